use axum::extract::State;
use axum::{Extension, Json};
use serde::Serialize;

use crate::auth::AuthUser;
use crate::services::leaderboard::{self, LeaderboardEntry};
use crate::services::session;
use crate::services::user_stats::UserStats;
use crate::state::AppState;

#[derive(Serialize)]
pub(crate) struct HistoryResponse {
    history: serde_json::Value,
}

#[derive(Serialize)]
pub(crate) struct LeaderboardResponse {
    leaderboard: Vec<LeaderboardEntry>,
}

pub async fn user_stats(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Json<UserStats> {
    let store = state.store();
    Json(session::user_stats(store.as_ref(), &user.id).await)
}

/// The raw stored session, or `{}` when there is none.
pub async fn user_history(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Json<HistoryResponse> {
    let store = state.store();
    let history = session::load_latest(store.as_ref(), &user.id)
        .await
        .and_then(|doc| serde_json::to_value(doc).ok())
        .unwrap_or_else(|| serde_json::json!({}));

    Json(HistoryResponse { history })
}

pub async fn leaderboard() -> Json<LeaderboardResponse> {
    Json(LeaderboardResponse {
        leaderboard: leaderboard::placeholder(),
    })
}
