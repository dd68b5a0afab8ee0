//! 会话
//!
//! 每个会话独占自己的对话记录、用户画像和随机数源；
//! 会话注册表按 ID 管理会话，首轮对话时创建，清空后保留空会话。

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::models::{Exchange, LanguageTag, Originator, UserProfile};
use crate::services::language::detect_language;
use crate::services::responder::{ReplyRoute, Responder};

/// 对话统计
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ConversationStats {
    pub total_messages: usize,
    pub user_messages: usize,
    pub bot_messages: usize,
    /// 距第一条记录的秒数
    #[serde(rename = "duration")]
    pub duration_seconds: i64,
}

/// 一轮对话的结果
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub response: String,
    pub route: ReplyRoute,
    pub language: LanguageTag,
    pub timestamp: DateTime<Utc>,
    pub stats: ConversationStats,
}

/// 单个会话
#[derive(Debug)]
pub struct Session {
    ledger: Vec<Exchange>,
    profile: UserProfile,
    rng: StdRng,
}

impl Session {
    pub fn new(rng: StdRng) -> Self {
        Self {
            ledger: Vec::new(),
            profile: UserProfile::default(),
            rng,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    /// 处理一轮对话
    ///
    /// 调用方需保证文本已通过校验。机器人回复固定标记为英语。
    pub fn process_turn(
        &mut self,
        responder: &Responder,
        text: &str,
        updates: &Map<String, Value>,
    ) -> TurnOutcome {
        let language = detect_language(text);
        self.profile.merge(updates);
        self.ledger.push(Exchange::new(text, Originator::User, language));

        let reply = responder.respond(text, &self.profile, &mut self.rng);
        self.ledger
            .push(Exchange::new(&reply.text, Originator::Bot, LanguageTag::English));

        TurnOutcome {
            response: reply.text,
            route: reply.route,
            language,
            timestamp: Utc::now(),
            stats: self.stats(),
        }
    }

    /// 最近的 `limit` 条记录，按时间先后排列
    pub fn recent_history(&self, limit: usize) -> Vec<Exchange> {
        let start = self.ledger.len().saturating_sub(limit);
        self.ledger[start..].to_vec()
    }

    /// 全量记录的统计
    pub fn stats(&self) -> ConversationStats {
        let user_messages = self.ledger.iter().filter(|e| e.is_user()).count();
        let duration_seconds = self
            .ledger
            .first()
            .map(|first| (Utc::now() - first.created_at).num_seconds().max(0))
            .unwrap_or(0);

        ConversationStats {
            total_messages: self.ledger.len(),
            user_messages,
            bot_messages: self.ledger.len() - user_messages,
            duration_seconds,
        }
    }

    /// 清空记录和画像
    pub fn clear(&mut self) {
        self.ledger.clear();
        self.profile.clear();
    }
}

/// 会话注册表
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: DashMap<String, Arc<Mutex<Session>>>,
    rng_seed: Option<u64>,
}

impl SessionRegistry {
    /// `rng_seed` 设置后所有会话使用同一种子，应答可复现
    pub fn new(rng_seed: Option<u64>) -> Self {
        Self {
            sessions: DashMap::new(),
            rng_seed,
        }
    }

    fn new_rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// 获取会话，不存在时创建；第二项表示是否新建
    pub fn get_or_create(&self, id: &str) -> (Arc<Mutex<Session>>, bool) {
        if let Some(session) = self.sessions.get(id) {
            return (session.clone(), false);
        }
        match self.sessions.entry(id.to_string()) {
            Entry::Occupied(entry) => (entry.get().clone(), false),
            Entry::Vacant(entry) => {
                let session = Arc::new(Mutex::new(Session::new(self.new_rng())));
                entry.insert(session.clone());
                (session, true)
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<Arc<Mutex<Session>>> {
        self.sessions.get(id).map(|s| s.clone())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatasetKind;
    use crate::dataset::pattern_table;
    use crate::services::sentiment::LexiconScorer;
    use serde_json::json;

    fn responder() -> Responder {
        let table = pattern_table(DatasetKind::Storefront).unwrap();
        Responder::new(Arc::new(table), Arc::new(LexiconScorer))
    }

    fn session() -> Session {
        Session::new(StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_turn_appends_user_then_bot() {
        let responder = responder();
        let mut session = session();
        let outcome = session.process_turn(&responder, "Hello", &Map::new());

        assert_eq!(session.len(), 2);
        let history = session.recent_history(20);
        assert_eq!(history[0].originator, Originator::User);
        assert_eq!(history[0].text, "Hello");
        assert_eq!(history[1].originator, Originator::Bot);
        assert_eq!(history[1].text, outcome.response);
        assert_eq!(history[1].language, LanguageTag::English);

        assert_eq!(outcome.stats.total_messages, 2);
        assert_eq!(outcome.stats.user_messages, 1);
        assert_eq!(outcome.stats.bot_messages, 1);
        assert_eq!(outcome.stats.duration_seconds, 0);
    }

    #[test]
    fn test_swahili_turn_tagged() {
        let responder = responder();
        let mut session = session();
        let outcome = session.process_turn(&responder, "bei ya dress", &Map::new());
        assert_eq!(outcome.language, LanguageTag::Swahili);
        assert_eq!(session.recent_history(1)[0].language, LanguageTag::English);
        assert_eq!(session.recent_history(2)[0].language, LanguageTag::Swahili);
    }

    #[test]
    fn test_profile_merged_before_reply() {
        let responder = responder();
        let mut session = session();
        let updates = json!({ "name": "Wanjiru" });
        let outcome = session.process_turn(&responder, "Hello", updates.as_object().unwrap());
        assert!(outcome.response.starts_with("Jambo Wanjiru!"));
        assert_eq!(session.profile().display_name(), Some("Wanjiru"));
    }

    #[test]
    fn test_recent_history_window() {
        let responder = responder();
        let mut session = session();
        for i in 0..15 {
            session.process_turn(&responder, &format!("hello {}", i), &Map::new());
        }
        assert_eq!(session.len(), 30);

        let history = session.recent_history(20);
        assert_eq!(history.len(), 20);
        assert_eq!(history[0].text, "hello 5");
        assert_eq!(history[19].originator, Originator::Bot);

        assert_eq!(session.stats().total_messages, 30);
    }

    #[test]
    fn test_clear_resets_ledger_and_profile() {
        let responder = responder();
        let mut session = session();
        session.process_turn(&responder, "Hello", json!({ "name": "Amina" }).as_object().unwrap());
        session.clear();

        assert!(session.is_empty());
        assert!(session.recent_history(20).is_empty());
        assert_eq!(session.profile().display_name(), None);
        assert_eq!(session.stats(), ConversationStats::default());
    }

    #[test]
    fn test_registry_creates_once() {
        let registry = SessionRegistry::new(Some(3));
        assert!(registry.get("a").is_none());

        let (first, created) = registry.get_or_create("a");
        assert!(created);
        let (second, created) = registry.get_or_create("a");
        assert!(!created);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 1);

        registry.get_or_create("b");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_seeded_sessions_reply_identically() {
        let responder = responder();
        let registry = SessionRegistry::new(Some(42));
        let (a, _) = registry.get_or_create("a");
        let (b, _) = registry.get_or_create("b");
        for _ in 0..5 {
            let left = a.lock().process_turn(&responder, "Hello", &Map::new());
            let right = b.lock().process_turn(&responder, "Hello", &Map::new());
            assert_eq!(left.response, right.response);
        }
    }
}
