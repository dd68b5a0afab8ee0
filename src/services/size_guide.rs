//! 尺码指南
//!
//! 从文本中识别服装关键词（表顺序优先），渲染对应的尺码表；
//! 没有关键词时默认女装连衣裙。输出完全确定。

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Write;

use crate::models::{Audience, GarmentClass, SizeChart};

/// 服装关键词 → (人群, 类别)，按顺序匹配
const GARMENT_KEYWORDS: &[(&str, Audience, GarmentClass)] = &[
    ("dress", Audience::Women, GarmentClass::Dresses),
    ("shirt", Audience::Men, GarmentClass::Shirts),
    ("trouser", Audience::Men, GarmentClass::Trousers),
    ("blouse", Audience::Women, GarmentClass::Tops),
    ("skirt", Audience::Women, GarmentClass::Tops),
    ("suit", Audience::Men, GarmentClass::Shirts),
];

const DEFAULT_GARMENT: (Audience, GarmentClass) = (Audience::Women, GarmentClass::Dresses);

/// 直接请求尺码表的短语
const SIZE_GUIDE_PHRASES: &[&str] = &["size guide", "size chart", "sizing help", "measurement chart"];

/// 合身问题识别的服装词，不含 suit（suit 的尺码问题走 sizing 类别）
const FIT_GARMENTS: &[&str] = &["dress", "shirt", "trouser", "blouse", "skirt"];

static GARMENT_RULES: Lazy<Vec<(Regex, Audience, GarmentClass)>> = Lazy::new(|| {
    GARMENT_KEYWORDS
        .iter()
        .map(|(keyword, audience, garment)| {
            let re = Regex::new(&format!(r"\b{}(?:e?s)?\b", keyword))
                .expect("Invalid regex: garment keyword");
            (re, *audience, *garment)
        })
        .collect()
});

static SIZE_FIT_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(size|fit|measurement)\b").expect("Invalid regex: size fit"));

static FIT_GARMENT_RULE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\b({})(?:e?s)?\b", FIT_GARMENTS.join("|")))
        .expect("Invalid regex: fit garment")
});

/// 识别文本中的服装类别
pub fn detect_garment(text: &str) -> Option<(Audience, GarmentClass)> {
    let normalized = text.to_lowercase();
    GARMENT_RULES
        .iter()
        .find(|(re, _, _)| re.is_match(&normalized))
        .map(|(_, audience, garment)| (*audience, *garment))
}

/// 是否直接请求尺码表
pub fn is_size_guide_request(text: &str) -> bool {
    let normalized = text.to_lowercase();
    SIZE_GUIDE_PHRASES.iter().any(|p| normalized.contains(p))
}

/// 是否同时提到尺码/合身关键词和服装关键词
pub fn is_garment_fit_question(text: &str) -> bool {
    let normalized = text.to_lowercase();
    SIZE_FIT_RULE.is_match(&normalized) && FIT_GARMENT_RULE.is_match(&normalized)
}

/// 尺码指南格式化器
#[derive(Debug, Clone, Copy)]
pub struct SizeGuideFormatter<'a> {
    chart: &'a SizeChart,
}

impl<'a> SizeGuideFormatter<'a> {
    pub fn new(chart: &'a SizeChart) -> Self {
        Self { chart }
    }

    /// 渲染文本对应的尺码指南
    pub fn format(&self, text: &str) -> String {
        let (audience, garment) = detect_garment(text).unwrap_or(DEFAULT_GARMENT);
        self.render(audience, garment)
    }

    /// 渲染指定类别的尺码指南
    pub fn render(&self, audience: Audience, garment: GarmentClass) -> String {
        let mut out = format!("📏 Size Guide for {}:\n\n", garment.title());

        if let Some(entry) = self.chart.entry(audience, garment) {
            out.push_str("Size | Measurements\n");
            out.push_str("---- | ------------\n");
            for row in &entry.rows {
                let fields = row
                    .measurements
                    .iter()
                    .map(|(field, value)| format!("{}: {}", field, value))
                    .collect::<Vec<_>>()
                    .join(", ");
                let _ = writeln!(out, "{} | {}", row.label, fields);
            }

            if let Some(local_sizes) = &entry.local_sizes {
                out.push_str("\n🇰🇪 Kenyan Size Conversion:\n");
                for (label, local) in local_sizes {
                    let _ = writeln!(out, "{} → Size {}", label, local);
                }
            }
        }

        out.push_str("\n📌 Tips:\n");
        out.push_str(&self.chart.general_tips.join("\n"));
        out.push_str("\n\nNeed help choosing? Share your measurements!");
        out
    }
}
