use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{commands, health, sessions};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    // the single-page client is served elsewhere during development
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/commands", commands::router())
        .nest("/api/sessions", sessions::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
