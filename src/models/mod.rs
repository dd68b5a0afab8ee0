//! 核心数据模型模块
//!
//! 定义对话记录、顾客画像、应答模式表、商品目录和尺码参考表。

pub mod catalog;
pub mod exchange;
pub mod pattern;
pub mod profile;
pub mod size_guide;

pub use catalog::*;
pub use exchange::*;
pub use pattern::*;
pub use profile::*;
pub use size_guide::*;
