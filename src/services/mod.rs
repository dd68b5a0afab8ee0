//! 服务模块

pub mod chat;
pub mod language;
pub mod matcher;
pub mod responder;
pub mod selector;
pub mod sentiment;
pub mod session;
pub mod size_guide;

pub use chat::{ChatService, ChatServiceImpl, create_chat_service};
pub use language::detect_language;
pub use matcher::{CategoryMatch, find_category};
pub use responder::{EMPATHETIC_REPLY, GENERIC_REPLIES, Reply, ReplyRoute, Responder};
pub use selector::select_response;
pub use sentiment::{LexiconScorer, ScoringUnavailable, Sentiment, SentimentScorer};
pub use session::{ConversationStats, Session, SessionRegistry, TurnOutcome};
pub use size_guide::SizeGuideFormatter;
