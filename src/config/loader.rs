use crate::config::config::AppConfig;
use crate::security::RequestValidator;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// 环境变量前缀
const ENV_PREFIX: &str = "DUKA_";

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 搜索路径：
    /// 1. 内置默认值
    /// 2. ./config.toml
    /// 3. 环境变量（`DUKA_SERVER__PORT=9000`）
    pub fn load() -> Result<AppConfig, figment::Error> {
        Self::load_from(default_config_path())
    }

    /// 从指定路径加载配置
    pub fn load_from(path: PathBuf) -> Result<AppConfig, figment::Error> {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.chat.history_limit == 0 {
            return Err(ConfigValidationError::InvalidHistoryLimit);
        }

        if config.chat.max_message_length == 0 {
            return Err(ConfigValidationError::InvalidMessageLength);
        }

        RequestValidator::default()
            .validate_session_id(&config.chat.default_session_id)
            .map_err(|e| ConfigValidationError::InvalidDefaultSession(e.to_string()))?;

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("历史记录条数无效，必须大于 0")]
    InvalidHistoryLimit,

    #[error("消息最大长度无效，必须大于 0")]
    InvalidMessageLength,

    #[error("默认会话 ID 无效: {0}")]
    InvalidDefaultSession(String),
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::config::DatasetKind;
    use figment::Jail;

    #[test]
    fn test_load_from_toml_and_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [chat]
                dataset = "extended"
                rng_seed = 7
                "#,
            )?;
            jail.set_env("DUKA_SERVER__PORT", "9000");

            let config = ConfigLoader::load().expect("config should load");
            assert_eq!(config.server.port, 9000);
            assert_eq!(config.chat.dataset, DatasetKind::Extended);
            assert_eq!(config.chat.rng_seed, Some(7));
            assert_eq!(config.chat.history_limit, 20);
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        Jail::expect_with(|_jail| {
            let config = ConfigLoader::load().expect("defaults should load");
            assert_eq!(config.server.port, 5000);
            Ok(())
        });
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidPort)
        ));
    }

    #[test]
    fn test_validate_rejects_zero_history_limit() {
        let mut config = AppConfig::default();
        config.chat.history_limit = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidHistoryLimit)
        ));
    }

    #[test]
    fn test_validate_rejects_bad_default_session() {
        let mut config = AppConfig::default();
        config.chat.default_session_id = "shared session".into();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidDefaultSession(_))
        ));
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(ConfigLoader::validate(&AppConfig::default()).is_ok());
    }
}
