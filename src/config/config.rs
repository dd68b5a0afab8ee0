use serde::{Deserialize, Serialize};

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 服务地址
    pub host: String,
    /// 服务端口
    pub port: u16,
    /// 请求超时（秒）
    pub request_timeout: u64,
    /// 最大请求体大小（字节）
    pub max_request_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
            request_timeout: 30,
            max_request_size: 64 * 1024,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            structured: false,
        }
    }
}

/// 内置应答数据集
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    /// 八个类别的门店问答表
    #[default]
    Storefront,
    /// 扩展问答表（末尾带兜底规则）
    Extended,
}

impl DatasetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::Storefront => "storefront",
            DatasetKind::Extended => "extended",
        }
    }
}

/// 对话配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// 使用的数据集
    pub dataset: DatasetKind,
    /// 历史记录最多返回条数
    pub history_limit: usize,
    /// 单条消息最大字符数
    pub max_message_length: usize,
    /// 随机数种子（设置后应答可复现）
    pub rng_seed: Option<u64>,
    /// 未指定会话时使用的会话 ID
    pub default_session_id: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetKind::Storefront,
            history_limit: 20,
            max_message_length: 2000,
            rng_seed: None,
            default_session_id: "default".into(),
        }
    }
}

/// 安全配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// 是否添加安全响应头
    pub security_headers: bool,
    /// 允许跨域的来源，为空时不启用 CORS
    pub cors_origins: Vec<String>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            security_headers: true,
            cors_origins: Vec::new(),
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 服务器配置
    pub server: ServerConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 对话配置
    pub chat: ChatConfig,
    /// 安全配置
    pub security: SecurityConfig,
    /// 应用名称
    pub app_name: String,
    /// 环境
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            chat: ChatConfig::default(),
            security: SecurityConfig::default(),
            app_name: "duka-chat".into(),
            environment: "development".into(),
        }
    }
}

impl AppConfig {
    /// 创建生产环境配置
    pub fn production() -> Self {
        let mut config = Self::default();
        config.environment = "production".into();
        config.logging.level = "info".into();
        config.logging.structured = true;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.chat.history_limit, 20);
        assert_eq!(config.chat.dataset, DatasetKind::Storefront);
        assert_eq!(config.chat.default_session_id, "default");
        assert!(config.chat.rng_seed.is_none());
    }

    #[test]
    fn test_production_preset() {
        let config = AppConfig::production();
        assert_eq!(config.environment, "production");
        assert!(config.logging.structured);
    }

    #[test]
    fn test_dataset_kind_deserializes_snake_case() {
        let kind: DatasetKind = serde_json::from_str("\"extended\"").unwrap();
        assert_eq!(kind, DatasetKind::Extended);
    }
}
