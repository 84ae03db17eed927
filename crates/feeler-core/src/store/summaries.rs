//! SummaryStore trait definition.
//!
//! Implementations live in feeler-infra (e.g., `SqliteSummaryStore`).
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).

use feeler_types::error::RepositoryError;
use feeler_types::summary::{EmotionPayload, SessionSummary};
use feeler_types::user::UserId;

/// Append-only per-user log of session summaries.
pub trait SummaryStore: Send + Sync {
    /// Durably append one summary, stamped by the store with the current
    /// calendar date and time-of-day.
    fn append(
        &self,
        user_id: &UserId,
        emotions: &EmotionPayload,
        topic_summary: &str,
    ) -> impl std::future::Future<Output = Result<SessionSummary, RepositoryError>> + Send;

    /// Up to `limit` most recent summaries in newest-to-oldest order
    /// (no reversal). A zero limit is rejected with
    /// `RepositoryError::InvalidLimit`.
    fn recent(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> impl std::future::Future<Output = Result<Vec<SessionSummary>, RepositoryError>> + Send;
}
