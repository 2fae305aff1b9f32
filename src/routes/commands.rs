use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::OutputBlock;
use crate::services::executor;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/execute", post(execute_command))
}

#[derive(Debug, Deserialize)]
pub struct ExecuteRequest {
    /// Omitted on the page's first submission; the response hands one back.
    pub session_id: Option<Uuid>,
    pub command: String,
}

#[derive(Debug, Serialize)]
pub struct ExecuteResponse {
    pub session_id: Uuid,
    pub outputs: Vec<OutputBlock>,
}

pub async fn execute_command(
    State(state): State<AppState>,
    Json(req): Json<ExecuteRequest>,
) -> Result<Json<ExecuteResponse>, AppError> {
    let command = req.command.trim();
    if command.is_empty() {
        return Err(AppError::Validation(
            "Please enter a valid command.".to_string(),
        ));
    }

    let session_id = req.session_id.unwrap_or_else(Uuid::new_v4);
    info!("POST /api/commands/execute - session {}", session_id);

    let outputs = executor::execute(
        state.price_provider.as_ref(),
        &state.sessions,
        &state.market,
        session_id,
        command,
    )
    .await
    .map_err(|e| {
        error!("Command execution failed for session {}: {}", session_id, e);
        e
    })?;

    Ok(Json(ExecuteResponse {
        session_id,
        outputs,
    }))
}
