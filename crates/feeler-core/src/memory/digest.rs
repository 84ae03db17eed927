//! Compact long-term-memory string built from stored session summaries.
//!
//! The digest is a pure read-through over the summary store with no
//! memoization: it is recomputed on every chat turn, which is acceptable
//! because a summary-store read is cheap relative to the generation call.

use feeler_types::error::RepositoryError;
use feeler_types::user::UserId;

use crate::store::summaries::SummaryStore;

/// How many recent summaries feed the digest.
pub const DIGEST_WINDOW: u32 = 5;

/// Literal separator between joined topic summaries.
pub const DIGEST_SEPARATOR: &str = "; ";

/// Builds the concatenated long-term memory string for a user.
pub struct MemoryDigest<S: SummaryStore> {
    summaries: S,
}

impl<S: SummaryStore> MemoryDigest<S> {
    pub fn new(summaries: S) -> Self {
        Self { summaries }
    }

    /// Join the non-empty topic summaries of the last [`DIGEST_WINDOW`]
    /// sessions, preserving the newest-to-oldest order the store returns.
    /// Empty text means the user has no usable long-term memory yet.
    pub async fn digest(&self, user_id: &UserId) -> Result<String, RepositoryError> {
        let recent = self.summaries.recent(user_id, DIGEST_WINDOW).await?;

        let stories: Vec<&str> = recent
            .iter()
            .map(|s| s.topic_summary.as_str())
            .filter(|s| !s.is_empty())
            .collect();

        if stories.is_empty() {
            return Ok(String::new());
        }

        let combined = stories.join(DIGEST_SEPARATOR);
        tracing::debug!(user_id = %user_id, digest = %combined, "long-term memory found");
        Ok(combined)
    }
}
