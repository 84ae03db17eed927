//! Session summarizer.
//!
//! At session end the recent transcript is compressed into one sentence by
//! the generation collaborator and appended to the summary store. Either a
//! full summary is saved or nothing is: a generation failure performs no
//! write. An empty compression result is still persisted; the memory
//! digest filters it out later.

use serde::Serialize;
use std::fmt;

use feeler_types::chat::ChatTurn;
use feeler_types::error::RepositoryError;
use feeler_types::llm::{CompletionRequest, LlmError, Message};
use feeler_types::summary::EmotionPayload;
use feeler_types::user::UserId;

use crate::llm::provider::LlmProvider;
use crate::store::summaries::SummaryStore;
use crate::store::turns::TurnStore;

/// How many recent turns feed the compression prompt.
pub const SUMMARY_WINDOW: u32 = 15;

/// Output cap for the one-sentence summary.
pub const SUMMARY_MAX_TOKENS: u32 = 60;

/// Low temperature keeps summaries short and low-variance.
pub const SUMMARY_TEMPERATURE: f64 = 0.1;

const SUMMARY_INSTRUCTION: &str = "Summarize the events of this chat in 1 sentence:";

/// Outcome of a session-end call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionEndStatus {
    /// The user had no recorded turns; nothing was written.
    #[serde(rename = "no data")]
    NoData,
    /// Exactly one summary row was appended.
    #[serde(rename = "saved")]
    Saved,
}

impl fmt::Display for SessionEndStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionEndStatus::NoData => write!(f, "no data"),
            SessionEndStatus::Saved => write!(f, "saved"),
        }
    }
}

/// Errors from session summarization.
#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),

    #[error("generation error: {0}")]
    Generation(#[from] LlmError),
}

/// Compresses a session transcript into durable memory.
pub struct SessionSummarizer<T: TurnStore, S: SummaryStore, P: LlmProvider> {
    turns: T,
    summaries: S,
    provider: P,
}

impl<T: TurnStore, S: SummaryStore, P: LlmProvider> SessionSummarizer<T, S, P> {
    pub fn new(turns: T, summaries: S, provider: P) -> Self {
        Self {
            turns,
            summaries,
            provider,
        }
    }

    /// Compress the last [`SUMMARY_WINDOW`] turns into one summary row.
    ///
    /// Idempotent no-op when the user has no turns. A provider failure
    /// propagates as [`SummarizeError::Generation`] with no partial write.
    #[tracing::instrument(name = "end_session", skip(self, emotions))]
    pub async fn end_session(
        &self,
        user_id: &UserId,
        emotions: &EmotionPayload,
    ) -> Result<SessionEndStatus, SummarizeError> {
        let recent = self.turns.recent(user_id, SUMMARY_WINDOW).await?;
        if recent.is_empty() {
            return Ok(SessionEndStatus::NoData);
        }

        let transcript = render_transcript(&recent);
        let request = CompletionRequest {
            model: String::new(),
            messages: vec![Message::user(format!(
                "{SUMMARY_INSTRUCTION}\n\n{transcript}"
            ))],
            max_tokens: SUMMARY_MAX_TOKENS,
            temperature: Some(SUMMARY_TEMPERATURE),
        };

        let response = self.provider.complete(&request).await?;
        if response.content.is_empty() {
            tracing::debug!(user_id = %user_id, "compression produced an empty summary");
        }

        let summary = self
            .summaries
            .append(user_id, emotions, &response.content)
            .await?;
        tracing::info!(user_id = %user_id, summary_id = summary.id, "session summary saved");

        Ok(SessionEndStatus::Saved)
    }
}

/// Render turns as `"<sender>: <message>"` lines, oldest to newest.
fn render_transcript(turns: &[ChatTurn]) -> String {
    turns
        .iter()
        .map(|t| format!("{}: {}", t.sender, t.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::turns::TurnStore as _;
    use crate::testing::{InMemorySummaryStore, InMemoryTurnStore, ScriptedProvider};
    use chrono::Utc;
    use feeler_types::chat::Sender;

    fn turn(id: i64, sender: Sender, message: &str) -> ChatTurn {
        ChatTurn {
            id,
            user_id: UserId::new("alice"),
            sender,
            message: message.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_render_transcript_lines() {
        let turns = vec![
            turn(1, Sender::User, "hi"),
            turn(2, Sender::Bot, "hey there"),
        ];
        assert_eq!(render_transcript(&turns), "user: hi\nbot: hey there");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(SessionEndStatus::NoData.to_string(), "no data");
        assert_eq!(SessionEndStatus::Saved.to_string(), "saved");
    }

    #[test]
    fn test_status_serde() {
        assert_eq!(
            serde_json::to_string(&SessionEndStatus::NoData).unwrap(),
            "\"no data\""
        );
        assert_eq!(
            serde_json::to_string(&SessionEndStatus::Saved).unwrap(),
            "\"saved\""
        );
    }

    #[tokio::test]
    async fn test_end_session_no_turns_is_noop() {
        let summaries = InMemorySummaryStore::default();
        let summarizer = SessionSummarizer::new(
            InMemoryTurnStore::default(),
            summaries.clone(),
            ScriptedProvider::replying("unused"),
        );

        let status = summarizer
            .end_session(&UserId::new("nobody"), &EmotionPayload::default())
            .await
            .unwrap();

        assert_eq!(status, SessionEndStatus::NoData);
        assert_eq!(summaries.len(), 0);
    }

    #[tokio::test]
    async fn test_end_session_saves_exactly_one_summary() {
        let turns = InMemoryTurnStore::default();
        let user = UserId::new("alice");
        turns.append(&user, Sender::User, "i got a new dog").await.unwrap();
        turns.append(&user, Sender::Bot, "that's great!").await.unwrap();

        let summaries = InMemorySummaryStore::default();
        let provider = ScriptedProvider::replying("Alice adopted a new dog.");
        let summarizer = SessionSummarizer::new(turns, summaries.clone(), provider.clone());

        let status = summarizer
            .end_session(&user, &EmotionPayload::default())
            .await
            .unwrap();

        assert_eq!(status, SessionEndStatus::Saved);
        assert_eq!(summaries.len(), 1);

        // Compression request carries the instruction and the transcript
        // in oldest-to-newest order with low-variance options.
        let requests = provider.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let prompt = &requests[0].messages[0].content;
        assert!(prompt.starts_with(SUMMARY_INSTRUCTION));
        assert!(prompt.contains("user: i got a new dog\nbot: that's great!"));
        assert_eq!(requests[0].max_tokens, SUMMARY_MAX_TOKENS);
        assert_eq!(requests[0].temperature, Some(SUMMARY_TEMPERATURE));
    }

    #[tokio::test]
    async fn test_end_session_generation_failure_writes_nothing() {
        let turns = InMemoryTurnStore::default();
        let user = UserId::new("alice");
        turns.append(&user, Sender::User, "hello").await.unwrap();

        let summaries = InMemorySummaryStore::default();
        let summarizer =
            SessionSummarizer::new(turns, summaries.clone(), ScriptedProvider::failing());

        let err = summarizer
            .end_session(&user, &EmotionPayload::default())
            .await
            .unwrap_err();

        assert!(matches!(err, SummarizeError::Generation(_)));
        assert_eq!(summaries.len(), 0);
    }

    #[tokio::test]
    async fn test_end_session_persists_empty_summary() {
        let turns = InMemoryTurnStore::default();
        let user = UserId::new("alice");
        turns.append(&user, Sender::User, "hello").await.unwrap();

        let summaries = InMemorySummaryStore::default();
        let summarizer =
            SessionSummarizer::new(turns, summaries.clone(), ScriptedProvider::replying(""));

        let status = summarizer
            .end_session(&user, &EmotionPayload::default())
            .await
            .unwrap();

        // Empty summaries are stored; the digest filters them out later.
        assert_eq!(status, SessionEndStatus::Saved);
        assert_eq!(summaries.len(), 1);
    }
}
