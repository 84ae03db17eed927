//! POST /end_session — compress the session into durable memory.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use feeler_core::session::summarizer::SessionEndStatus;
use feeler_types::summary::EmotionPayload;
use feeler_types::user::UserId;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for the session-end endpoint. `emotions` is an optional
/// label-to-score map accumulated by the client over the session.
#[derive(Debug, Deserialize)]
pub struct EndSessionRequest {
    pub user_id: String,
    #[serde(default)]
    pub emotions: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct EndSessionResponse {
    pub status: SessionEndStatus,
}

/// POST /end_session — summarize recent turns into one stored sentence.
///
/// Idempotent for users with no recorded turns: responds "no data" and
/// writes nothing.
pub async fn end_session(
    State(state): State<AppState>,
    Json(req): Json<EndSessionRequest>,
) -> Result<Json<EndSessionResponse>, AppError> {
    let user_id = UserId::new(&req.user_id);
    if user_id.is_empty() {
        return Err(AppError::Validation("user_id must not be empty".into()));
    }

    let emotions = EmotionPayload::from_json(&req.emotions).map_err(AppError::Validation)?;

    let status = state.summarizer.end_session(&user_id, &emotions).await?;

    Ok(Json(EndSessionResponse { status }))
}
