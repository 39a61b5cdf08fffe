pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::errors::AppError;
use crate::opportunities::handlers;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}

/// Every unmatched path or method answers 404 `{error: "Not Found"}`,
/// and every response carries permissive CORS headers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler).fallback(not_found))
        .route(
            "/api/opportunities",
            post(handlers::handle_find_opportunities).fallback(not_found),
        )
        .route(
            "/api/templates",
            get(handlers::handle_list_templates).fallback(not_found),
        )
        .fallback(not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
}
