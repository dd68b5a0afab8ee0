//! 顾客画像数据模型
//!
//! 每个会话一份的扁平键值偏好，每轮对话合并调用方提供的字段（后写覆盖）。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// 顾客画像
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// 显示名称
    pub name: Option<String>,

    /// 偏好风格
    pub preferred_style: Option<String>,

    /// 尺码偏好
    pub size_preference: Option<String>,

    /// 所在地
    pub location: Option<String>,

    /// 最近浏览的品类
    pub last_product_category: Option<String>,

    /// 其他字段（前端上下文等）
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl UserProfile {
    /// 合并调用方提供的字段
    ///
    /// `null` 会清空已知字段；非字符串标量按其 JSON 文本保存。
    pub fn merge(&mut self, updates: &Map<String, Value>) {
        for (key, value) in updates {
            let slot = match key.as_str() {
                "name" => &mut self.name,
                "preferred_style" => &mut self.preferred_style,
                "size_preference" => &mut self.size_preference,
                "location" => &mut self.location,
                "last_product_category" => &mut self.last_product_category,
                _ => {
                    self.extra.insert(key.clone(), value.clone());
                    continue;
                }
            };
            *slot = match value {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                other => Some(other.to_string()),
            };
        }
    }

    /// 非空的显示名称
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// 清空画像
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
