use thiserror::Error;

/// Errors from store operations (used by trait definitions in feeler-core).
///
/// Storage failures are never retried by this subsystem; they propagate
/// to the caller as a failed request.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("query error: {0}")]
    Query(String),

    #[error("invalid limit: {0}")]
    InvalidLimit(i64),
}
