//! 应答选择
//!
//! 在命中类别的候选应答中均匀随机选择一条（不做去重），
//! 然后做少量模板替换并追加该类别的追问。

use rand::Rng;
use rand::seq::SliceRandom;

use crate::dataset::GREETINGS;
use crate::models::{PatternCategory, UserProfile};

/// 捕获组占位符
const CAPTURE_PLACEHOLDER: &str = "{match}";

/// 从类别中选出应答并完成替换
pub fn select_response<R: Rng + ?Sized>(
    category: &PatternCategory,
    capture: Option<&str>,
    profile: &UserProfile,
    rng: &mut R,
) -> String {
    let template = category
        .responses
        .choose(rng)
        .map(String::as_str)
        .unwrap_or_default();

    let mut response = match capture {
        Some(value) => template.replace(CAPTURE_PLACEHOLDER, value),
        None => template.to_string(),
    };

    if category.name == GREETINGS {
        if let Some(name) = profile.display_name() {
            response = personalize_greeting(&response, name);
        }
    }

    if let Some(follow_up) = &category.follow_up {
        response.push_str(follow_up);
    }

    response
}

/// 把问候语的开头替换为 "Jambo <Name>!"
///
/// 第一个 `!`/`?`/`.` 之后的内容原样保留；没有标点时整句前置问候。
pub fn personalize_greeting(response: &str, name: &str) -> String {
    match response.find(['!', '?', '.']) {
        Some(idx) => format!("Jambo {}!{}", name, &response[idx + 1..]),
        None => format!("Jambo {}! {}", name, response),
    }
}
