mod health;
mod stats;
mod typing;
mod words;

use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;

use crate::middleware::auth::require_auth;
use crate::response::AppError;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let authenticated = Router::new()
        .route("/api/analyze-typing", post(typing::analyze_typing))
        .route("/api/real-time-update", post(typing::real_time_update))
        .route("/api/user-stats", get(stats::user_stats))
        .route("/api/user-history", get(stats::user_history))
        .route(
            "/api/stats",
            post(typing::analyze_typing).get(stats::user_stats),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/api/words", get(words::random_words))
        .route("/api/leaderboard", get(stats::leaderboard))
        .nest("/health", health::router())
        .nest("/api/health", health::router())
        .merge(authenticated)
        .fallback(fallback_handler)
        .with_state(state)
}

async fn fallback_handler() -> Response {
    AppError::not_found("Route not found").into_response()
}
