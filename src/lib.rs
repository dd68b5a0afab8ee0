//! Duka Chat - 时装店铺问答机器人
//!
//! 基于正则规则表的双语（英语/斯瓦希里语）店铺问答服务：
//! 匹配用户输入的问题类别，返回预设应答，并维护每个会话的对话记录与用户画像。

pub mod api;
pub mod config;
pub mod dataset;
pub mod error;
pub mod models;
pub mod observability;
pub mod security;
pub mod services;
