//! 情感倾向
//!
//! 打分器被视为外部能力，只通过 [`SentimentScorer`] 访问；
//! 打分失败时一律按中性处理，不向上传播。

use thiserror::Error;
use tracing::warn;

/// 打分器不可用
#[derive(Debug, Error, Clone, PartialEq)]
#[error("sentiment scoring unavailable: {0}")]
pub struct ScoringUnavailable(pub String);

/// 情感打分能力
#[cfg_attr(test, mockall::automock)]
pub trait SentimentScorer: Send + Sync {
    /// 返回 [-1, 1] 区间的极性分数
    fn score(&self, text: &str) -> Result<f32, ScoringUnavailable>;
}

/// 情感标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// 正负判定阈值
const POLARITY_THRESHOLD: f32 = 0.1;

impl Sentiment {
    /// 按阈值分桶
    pub fn from_polarity(polarity: f32) -> Self {
        if polarity > POLARITY_THRESHOLD {
            Sentiment::Positive
        } else if polarity < -POLARITY_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// 计算情感标签，打分失败时返回中性
pub fn classify(scorer: &dyn SentimentScorer, text: &str) -> Sentiment {
    match scorer.score(text) {
        Ok(polarity) if polarity.is_finite() => Sentiment::from_polarity(polarity),
        Ok(polarity) => {
            warn!(polarity, "Sentiment scorer returned a non-finite score");
            Sentiment::Neutral
        }
        Err(e) => {
            warn!(error = %e, "Sentiment scoring failed, defaulting to neutral");
            Sentiment::Neutral
        }
    }
}

/// 极性词典
const LEXICON: &[(&str, f32)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("love", 0.5),
    ("nice", 0.6),
    ("beautiful", 0.85),
    ("excellent", 1.0),
    ("amazing", 0.6),
    ("happy", 0.8),
    ("perfect", 1.0),
    ("helpful", 0.5),
    ("thanks", 0.2),
    ("fast", 0.2),
    ("nzuri", 0.7),
    ("poa", 0.6),
    ("bad", -0.7),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("worst", -1.0),
    ("hate", -0.8),
    ("angry", -0.5),
    ("annoyed", -0.4),
    ("disappointed", -0.75),
    ("useless", -0.5),
    ("slow", -0.3),
    ("late", -0.3),
    ("wrong", -0.5),
    ("broken", -0.4),
    ("stupid", -0.8),
    ("poor", -0.4),
    ("mbaya", -0.7),
];

/// 加强词
const INTENSIFIERS: &[&str] = &["very", "really", "so", "extremely", "too", "sana"];
const INTENSIFIER_FACTOR: f32 = 1.3;

/// 否定词
const NEGATORS: &[&str] = &["not", "no", "never", "dont", "don't", "isn't", "hakuna", "si"];
const NEGATION_FACTOR: f32 = -0.5;

/// 词典打分器
///
/// 对命中词典的词取平均极性；加强词放大下一个极性词，否定词反转下一个极性词。
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    fn polarity_of(word: &str) -> Option<f32> {
        LEXICON.iter().find(|(w, _)| *w == word).map(|(_, p)| *p)
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<f32, ScoringUnavailable> {
        if !text.chars().any(char::is_alphabetic) {
            return Err(ScoringUnavailable("no words to score".to_string()));
        }

        let lowered = text.to_lowercase();
        let words = lowered
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|w| !w.is_empty());

        let mut total = 0.0f32;
        let mut hits = 0usize;
        let mut modifier = 1.0f32;

        for word in words {
            if INTENSIFIERS.contains(&word) {
                modifier *= INTENSIFIER_FACTOR;
                continue;
            }
            if NEGATORS.contains(&word) {
                modifier *= NEGATION_FACTOR;
                continue;
            }
            if let Some(polarity) = Self::polarity_of(word) {
                total += (polarity * modifier).clamp(-1.0, 1.0);
                hits += 1;
            }
            modifier = 1.0;
        }

        if hits == 0 {
            return Ok(0.0);
        }
        Ok(total / hits as f32)
    }
}
