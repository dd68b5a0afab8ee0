//! 应答生成
//!
//! 每轮按固定顺序决策，任何分支都会给出应答：
//! 尺码表请求 → 尺码/合身 + 服装 → 类别匹配 → 情感兜底。

use rand::Rng;
use rand::seq::SliceRandom;
use std::sync::Arc;
use tracing::debug;

use crate::dataset::SIZE_CHART;
use crate::models::{PatternTable, SizeChart, UserProfile};
use crate::services::matcher::find_category;
use crate::services::selector::select_response;
use crate::services::sentiment::{Sentiment, SentimentScorer, classify};
use crate::services::size_guide::{SizeGuideFormatter, is_garment_fit_question, is_size_guide_request};

/// 负面情绪时的固定引导语
pub const EMPATHETIC_REPLY: &str = "Pole! Let me help you better. Try asking about:\n- Product availability\n- Sizing help\n- Delivery options\n- Payment methods\nHow can I assist?";

/// 通用引导语
pub const GENERIC_REPLIES: &[&str] = &[
    "Great question! I can help with:\n\n• Product info\n• Size guides\n• Payment options\n• Delivery details\n• Store location\n\nWhat would you like to know?",
    "I'd love to help! Try asking:\n\"Show me casual dresses\"\n\"What's your size guide?\"\n\"How do I pay via M-Pesa?\"\nWhat can I do for you?",
    "Karibu! I specialize in:\n\n🛍️ Product recommendations\n📏 Size assistance\n🚚 Delivery info\n💳 Payment help\n\nHow may I assist you today?",
];

/// 应答来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyRoute {
    /// 尺码指南
    SizeGuide,
    /// 命中类别
    Category(String),
    /// 负面情绪引导
    Empathetic,
    /// 通用引导
    Generic,
}

impl ReplyRoute {
    /// 用于日志与指标的路径名
    pub fn kind(&self) -> &'static str {
        match self {
            ReplyRoute::SizeGuide => "size_guide",
            ReplyRoute::Category(_) => "category",
            ReplyRoute::Empathetic | ReplyRoute::Generic => "fallback",
        }
    }
}

/// 一轮的应答
#[derive(Debug, Clone)]
pub struct Reply {
    pub text: String,
    pub route: ReplyRoute,
}

/// 应答生成器
#[derive(Clone)]
pub struct Responder {
    table: Arc<PatternTable>,
    scorer: Arc<dyn SentimentScorer>,
    chart: &'static SizeChart,
}

impl std::fmt::Debug for Responder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Responder")
            .field("categories", &self.table.len())
            .finish()
    }
}

impl Responder {
    pub fn new(table: Arc<PatternTable>, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self {
            table,
            scorer,
            chart: &SIZE_CHART,
        }
    }

    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    /// 生成应答
    pub fn respond<R: Rng + ?Sized>(&self, text: &str, profile: &UserProfile, rng: &mut R) -> Reply {
        if is_size_guide_request(text) || is_garment_fit_question(text) {
            debug!(route = "size_guide", "Rendering size guide");
            return Reply {
                text: SizeGuideFormatter::new(self.chart).format(text),
                route: ReplyRoute::SizeGuide,
            };
        }

        if let Some(matched) = find_category(&self.table, text) {
            debug!(route = "category", category = matched.name(), "Category matched");
            return Reply {
                text: select_response(matched.category, matched.capture.as_deref(), profile, rng),
                route: ReplyRoute::Category(matched.name().to_string()),
            };
        }

        match classify(self.scorer.as_ref(), text) {
            Sentiment::Negative => {
                debug!(route = "fallback", sentiment = "negative", "No category matched");
                Reply {
                    text: EMPATHETIC_REPLY.to_string(),
                    route: ReplyRoute::Empathetic,
                }
            }
            sentiment => {
                debug!(route = "fallback", ?sentiment, "No category matched");
                let text = GENERIC_REPLIES
                    .choose(rng)
                    .copied()
                    .unwrap_or(EMPATHETIC_REPLY)
                    .to_string();
                Reply {
                    text,
                    route: ReplyRoute::Generic,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatasetKind;
    use crate::dataset::pattern_table;
    use crate::services::sentiment::{MockSentimentScorer, ScoringUnavailable};
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;

    fn responder_with(scorer: MockSentimentScorer) -> Responder {
        let table = pattern_table(DatasetKind::Storefront).unwrap();
        Responder::new(Arc::new(table), Arc::new(scorer))
    }

    fn silent_scorer() -> MockSentimentScorer {
        let mut scorer = MockSentimentScorer::new();
        scorer.expect_score().never();
        scorer
    }

    #[test]
    fn test_explicit_size_guide_request() {
        let responder = responder_with(silent_scorer());
        let reply = responder.respond("Do you have a size chart?", &UserProfile::default(), &mut StepRng::new(0, 0));
        assert_eq!(reply.route, ReplyRoute::SizeGuide);
        assert!(reply.text.starts_with("📏 Size Guide for Dresses:"));
    }

    #[test]
    fn test_fit_question_with_garment() {
        let responder = responder_with(silent_scorer());
        let reply = responder.respond("what size is a shirt", &UserProfile::default(), &mut StepRng::new(0, 0));
        assert_eq!(reply.route, ReplyRoute::SizeGuide);
        assert!(reply.text.starts_with("📏 Size Guide for Shirts:"));
    }

    #[test]
    fn test_category_match_skips_sentiment() {
        let responder = responder_with(silent_scorer());
        let reply = responder.respond("Hello", &UserProfile::default(), &mut StepRng::new(0, 0));
        assert_eq!(reply.route, ReplyRoute::Category("greetings".to_string()));
        let pool = &responder.table().get("greetings").unwrap().responses;
        assert!(pool.contains(&reply.text));
    }

    #[test]
    fn test_garment_without_fit_word_goes_to_matcher() {
        let responder = responder_with(silent_scorer());
        let reply = responder.respond("bei ya dress", &UserProfile::default(), &mut StepRng::new(0, 0));
        assert_eq!(reply.route, ReplyRoute::Category("products".to_string()));
        assert!(reply.text.ends_with("Would you like size recommendations for any item?"));
    }

    #[test]
    fn test_negative_fallback_is_empathetic() {
        let mut scorer = MockSentimentScorer::new();
        scorer.expect_score().times(1).returning(|_| Ok(-0.8));
        let responder = responder_with(scorer);
        let reply = responder.respond("asdkjasd random gibberish", &UserProfile::default(), &mut StepRng::new(0, 0));
        assert_eq!(reply.route, ReplyRoute::Empathetic);
        assert_eq!(reply.text, EMPATHETIC_REPLY);
    }

    #[test]
    fn test_neutral_fallback_is_generic() {
        let mut scorer = MockSentimentScorer::new();
        scorer.expect_score().returning(|_| Ok(0.0));
        let responder = responder_with(scorer);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let reply = responder.respond("asdkjasd", &UserProfile::default(), &mut rng);
            assert_eq!(reply.route, ReplyRoute::Generic);
            assert!(GENERIC_REPLIES.contains(&reply.text.as_str()));
        }
    }

    #[test]
    fn test_scorer_failure_is_generic() {
        let mut scorer = MockSentimentScorer::new();
        scorer
            .expect_score()
            .returning(|_| Err(ScoringUnavailable("offline".to_string())));
        let responder = responder_with(scorer);
        let reply = responder.respond("asdkjasd", &UserProfile::default(), &mut StepRng::new(0, 0));
        assert_eq!(reply.route, ReplyRoute::Generic);
        assert_eq!(reply.text, GENERIC_REPLIES[0]);
    }

    #[test]
    fn test_route_kind() {
        assert_eq!(ReplyRoute::SizeGuide.kind(), "size_guide");
        assert_eq!(ReplyRoute::Category("x".into()).kind(), "category");
        assert_eq!(ReplyRoute::Empathetic.kind(), "fallback");
    }
}
