//! POST /chat — one conversational exchange.
//!
//! Assembles the prompt context (persona, recent history, optional
//! memory injection), calls the generation provider, and only then
//! persists the user turn and the bot reply together. A provider failure
//! therefore leaves no half-written exchange in the turn store.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use feeler_core::context::assembler::{AssembledContext, REPLY_MAX_TOKENS, REPLY_TEMPERATURE};
use feeler_core::llm::provider::LlmProvider;
use feeler_core::store::turns::TurnStore;
use feeler_types::chat::Sender;
use feeler_types::llm::CompletionRequest;
use feeler_types::user::UserId;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub user_name: String,
    pub message: String,
}

/// Response body: the bot reply plus the emotion label detected on the
/// incoming message.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub emotion: String,
}

/// POST /chat — assemble context, generate a reply, persist the exchange.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let user_id = UserId::new(&req.user_id);
    if user_id.is_empty() {
        return Err(AppError::Validation("user_id must not be empty".into()));
    }
    let user_name = req.user_name.trim();
    if user_name.is_empty() {
        return Err(AppError::Validation("user_name must not be empty".into()));
    }
    if req.message.trim().is_empty() {
        return Err(AppError::Validation("message must not be empty".into()));
    }

    let context = state
        .assembler
        .assemble(&user_id, user_name, &req.message)
        .await?;

    let response = execute_chat(
        state.turns.as_ref(),
        state.provider.as_ref(),
        &user_id,
        &req.message,
        context,
    )
    .await?;

    tracing::info!(user_id = %user_id, emotion = %response.emotion, "chat exchange complete");

    Ok(Json(response))
}

/// Generate the reply for an assembled context and persist the exchange.
///
/// The user turn and the bot reply are appended together only after a
/// successful generation call; a provider failure writes nothing. The
/// original message is stored, not the augmented prompt, and the user
/// turn goes first so ids keep the conversation order.
async fn execute_chat<T: TurnStore, P: LlmProvider>(
    turns: &T,
    provider: &P,
    user_id: &UserId,
    message: &str,
    context: AssembledContext,
) -> Result<ChatResponse, AppError> {
    let request = CompletionRequest {
        // Empty model string selects the provider's configured default.
        model: String::new(),
        messages: context.messages,
        max_tokens: REPLY_MAX_TOKENS,
        temperature: Some(REPLY_TEMPERATURE),
    };
    let response = provider.complete(&request).await?;

    turns.append(user_id, Sender::User, message).await?;
    turns.append(user_id, Sender::Bot, &response.content).await?;

    Ok(ChatResponse {
        reply: response.content,
        emotion: context.emotion,
    })
}
