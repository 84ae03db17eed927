//! In-memory trait implementations shared across core unit tests.

use std::sync::{Arc, Mutex};

use chrono::Utc;

use feeler_types::chat::{ChatTurn, Sender};
use feeler_types::error::RepositoryError;
use feeler_types::llm::{CompletionRequest, CompletionResponse, LlmError};
use feeler_types::summary::{EmotionPayload, SessionSummary};
use feeler_types::user::UserId;

use crate::llm::emotion::EmotionClassifier;
use crate::llm::provider::LlmProvider;
use crate::store::summaries::SummaryStore;
use crate::store::turns::TurnStore;

/// Append-only turn log backed by a shared Vec.
#[derive(Clone, Default)]
pub(crate) struct InMemoryTurnStore {
    turns: Arc<Mutex<Vec<ChatTurn>>>,
}

impl TurnStore for InMemoryTurnStore {
    async fn append(
        &self,
        user_id: &UserId,
        sender: Sender,
        message: &str,
    ) -> Result<ChatTurn, RepositoryError> {
        let mut turns = self.turns.lock().unwrap();
        let turn = ChatTurn {
            id: turns.len() as i64 + 1,
            user_id: user_id.clone(),
            sender,
            message: message.to_string(),
            created_at: Utc::now(),
        };
        turns.push(turn.clone());
        Ok(turn)
    }

    async fn recent(&self, user_id: &UserId, limit: u32) -> Result<Vec<ChatTurn>, RepositoryError> {
        if limit == 0 {
            return Err(RepositoryError::InvalidLimit(0));
        }
        let turns = self.turns.lock().unwrap();
        let mut newest_first: Vec<ChatTurn> = turns
            .iter()
            .rev()
            .filter(|t| &t.user_id == user_id)
            .take(limit as usize)
            .cloned()
            .collect();
        newest_first.reverse();
        Ok(newest_first)
    }
}

/// Append-only summary log backed by a shared Vec.
#[derive(Clone, Default)]
pub(crate) struct InMemorySummaryStore {
    summaries: Arc<Mutex<Vec<SessionSummary>>>,
}

impl InMemorySummaryStore {
    pub(crate) fn len(&self) -> usize {
        self.summaries.lock().unwrap().len()
    }
}

impl SummaryStore for InMemorySummaryStore {
    async fn append(
        &self,
        user_id: &UserId,
        emotions: &EmotionPayload,
        topic_summary: &str,
    ) -> Result<SessionSummary, RepositoryError> {
        let mut summaries = self.summaries.lock().unwrap();
        let now = Utc::now();
        let summary = SessionSummary {
            id: summaries.len() as i64 + 1,
            user_id: user_id.clone(),
            date: now.date_naive(),
            time_of_day: now.time(),
            emotions: emotions.clone(),
            topic_summary: topic_summary.to_string(),
        };
        summaries.push(summary.clone());
        Ok(summary)
    }

    async fn recent(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<SessionSummary>, RepositoryError> {
        if limit == 0 {
            return Err(RepositoryError::InvalidLimit(0));
        }
        let summaries = self.summaries.lock().unwrap();
        Ok(summaries
            .iter()
            .rev()
            .filter(|s| &s.user_id == user_id)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

/// Provider that replies with a fixed string (or a fixed failure) and
/// records every request it receives.
#[derive(Clone)]
pub(crate) struct ScriptedProvider {
    reply: String,
    fail: bool,
    pub(crate) requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl ScriptedProvider {
    pub(crate) fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            fail: false,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            reply: String::new(),
            fail: true,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(LlmError::Provider {
                message: "scripted failure".to_string(),
            });
        }
        Ok(CompletionResponse {
            id: "test".to_string(),
            content: self.reply.clone(),
            model: "scripted-model".to_string(),
        })
    }
}

/// Classifier that always returns the same label.
pub(crate) struct StaticClassifier(pub(crate) &'static str);

impl EmotionClassifier for StaticClassifier {
    fn classify(&self, _text: &str) -> String {
        self.0.to_string()
    }
}
