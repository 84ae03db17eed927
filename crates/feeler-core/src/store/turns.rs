//! TurnStore trait definition.
//!
//! Implementations live in feeler-infra (e.g., `SqliteTurnStore`).
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).

use feeler_types::chat::{ChatTurn, Sender};
use feeler_types::error::RepositoryError;
use feeler_types::user::UserId;

/// Append-only per-user log of chat turns.
pub trait TurnStore: Send + Sync {
    /// Durably append one turn. The store assigns the sequence id; no
    /// implicit retry on failure.
    fn append(
        &self,
        user_id: &UserId,
        sender: Sender,
        message: &str,
    ) -> impl std::future::Future<Output = Result<ChatTurn, RepositoryError>> + Send;

    /// The `limit` most recently appended turns for a user, returned in
    /// oldest-to-newest order (selected newest-first internally, then
    /// reversed). An unknown user yields an empty vec, not an error.
    /// A zero limit is rejected with `RepositoryError::InvalidLimit`.
    fn recent(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> impl std::future::Future<Output = Result<Vec<ChatTurn>, RepositoryError>> + Send;
}
