use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/:session_id/series", get(get_cached_series))
}

/// The "previously fetched stock data" panel: name, total row count, and a
/// short tail of the cached series.
#[derive(Debug, Serialize)]
pub struct SeriesTailResponse {
    pub name: String,
    pub rows: usize,
    pub csv: String,
}

pub async fn get_cached_series(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<SeriesTailResponse>, AppError> {
    info!("GET /api/sessions/{}/series - Reading cached series", session_id);

    let series = state.sessions.get(session_id).ok_or_else(|| {
        AppError::NotFound("no stock data fetched yet for this session".to_string())
    })?;

    Ok(Json(SeriesTailResponse {
        name: series.name.clone(),
        rows: series.len(),
        csv: series.tail(5).to_csv()?,
    }))
}
