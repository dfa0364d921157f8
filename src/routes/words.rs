use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::response::AppError;
use crate::services::words::sample_words;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub(crate) struct WordsQuery {
    count: Option<i64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct WordsResponse {
    words: Vec<String>,
}

pub async fn random_words(
    State(state): State<AppState>,
    query: Result<Query<WordsQuery>, QueryRejection>,
) -> Result<Json<WordsResponse>, AppError> {
    let Query(query) = query.map_err(|_| AppError::bad_request("count must be an integer"))?;
    let count = query.count.unwrap_or(state.config().default_word_count);

    Ok(Json(WordsResponse {
        words: sample_words(count),
    }))
}
