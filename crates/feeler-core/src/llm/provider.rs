//! LlmProvider trait definition.
//!
//! The generation collaborator is consumed as a black-box function: a
//! message list plus options in, text out. Implementations live in
//! feeler-infra (e.g., `OpenAiCompatibleProvider`). Uses native async fn
//! in traits (RPITIT, Rust 2024 edition).

use feeler_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for generation backends.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai_compatible").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    ///
    /// Cancellation and timeouts are the caller's responsibility; this
    /// subsystem performs no automatic retries.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
