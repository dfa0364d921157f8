use axum::body::Bytes;
use axum::extract::State;
use axum::{Extension, Json};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::analytics::{
    self, AnalyticsResult, ProgressSnapshot, ProgressTrace, TimeSample, TypingTrace,
};
use crate::auth::AuthUser;
use crate::response::AppError;
use crate::services::session;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct AnalyzeRequest {
    words: Option<Vec<String>>,
    input_text: Option<String>,
    start_time: Option<i64>,
    end_time: Option<i64>,
    time_data: Option<Vec<TimeSample>>,
}

impl AnalyzeRequest {
    /// Every required field must be present and non-empty/non-zero.
    fn into_trace(self) -> Result<TypingTrace, AppError> {
        let mut missing = Vec::new();

        let words = self.words.filter(|w| !w.is_empty());
        let input_text = self.input_text.filter(|t| !t.is_empty());
        let start_time = self.start_time.filter(|t| *t != 0);
        let end_time = self.end_time.filter(|t| *t != 0);

        if words.is_none() {
            missing.push("words");
        }
        if input_text.is_none() {
            missing.push("input_text");
        }
        if start_time.is_none() {
            missing.push("start_time");
        }
        if end_time.is_none() {
            missing.push("end_time");
        }

        match (words, input_text, start_time, end_time) {
            (Some(words), Some(input_text), Some(start_time), Some(end_time)) => Ok(TypingTrace {
                words,
                input_text,
                start_time,
                end_time,
                time_data: self.time_data.unwrap_or_default(),
            }),
            _ => Err(missing_fields(&missing)),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RealtimeRequest {
    words: Option<Vec<String>>,
    input_text: Option<String>,
    start_time: Option<i64>,
    current_time: Option<i64>,
}

impl RealtimeRequest {
    /// Typed text may still be empty at the very start of a test.
    fn into_trace(self) -> Result<ProgressTrace, AppError> {
        let mut missing = Vec::new();

        let words = self.words.filter(|w| !w.is_empty());
        let start_time = self.start_time.filter(|t| *t != 0);
        let current_time = self.current_time.filter(|t| *t != 0);

        if words.is_none() {
            missing.push("words");
        }
        if self.input_text.is_none() {
            missing.push("input_text");
        }
        if start_time.is_none() {
            missing.push("start_time");
        }
        if current_time.is_none() {
            missing.push("current_time");
        }

        match (words, self.input_text, start_time, current_time) {
            (Some(words), Some(input_text), Some(start_time), Some(current_time)) => {
                Ok(ProgressTrace {
                    words,
                    input_text,
                    start_time,
                    current_time,
                })
            }
            _ => Err(missing_fields(&missing)),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeResponse {
    status: &'static str,
    analytics: AnalyticsResult,
    session_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct RealtimeResponse {
    status: &'static str,
    #[serde(flatten)]
    metrics: ProgressSnapshot,
}

pub async fn analyze_typing(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Bytes,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let trace = parse_body::<AnalyzeRequest>(&body)?.into_trace()?;

    let analytics = analytics::analyze(&trace).map_err(|err| {
        tracing::error!(
            user_id = %user.id,
            error = %err,
            words = trace.words.len(),
            samples = trace.time_data.len(),
            start_time = trace.start_time,
            end_time = trace.end_time,
            "typing analysis failed"
        );
        AppError::from(err)
    })?;

    let document = session::new_document(&user.id, trace, analytics.clone());
    let session_id = document.session_id.clone();
    session::persist_in_background(state.store(), document);

    tracing::info!(
        user_id = %user.id,
        session_id = %session_id,
        wpm = analytics.wpm,
        accuracy = analytics.accuracy,
        "typing session analyzed"
    );

    Ok(Json(AnalyzeResponse {
        status: "success",
        analytics,
        session_id,
    }))
}

pub async fn real_time_update(
    Extension(_user): Extension<AuthUser>,
    body: Bytes,
) -> Result<Json<RealtimeResponse>, AppError> {
    let trace = parse_body::<RealtimeRequest>(&body)?.into_trace()?;

    Ok(Json(RealtimeResponse {
        status: "success",
        metrics: analytics::realtime::snapshot(&trace),
    }))
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|err| {
        tracing::debug!(error = %err, "rejecting undecodable request body");
        AppError::bad_request("Invalid JSON body")
    })
}

fn missing_fields(missing: &[&str]) -> AppError {
    AppError::bad_request(format!("Missing required fields: {}", missing.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: serde_json::Value) -> AnalyzeRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_complete_request_converts() {
        let trace = request(serde_json::json!({
            "words": ["a", "b"],
            "input_text": "a b",
            "start_time": 1,
            "end_time": 60_001,
            "time_data": [{"time": 1.0, "wpm": 30.0}],
        }))
        .into_trace()
        .unwrap();
        assert_eq!(trace.words.len(), 2);
        assert_eq!(trace.time_data.len(), 1);
    }

    #[test]
    fn test_falsy_fields_are_missing() {
        let err = request(serde_json::json!({
            "words": [],
            "input_text": "",
            "start_time": 0,
        }))
        .into_trace()
        .unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_realtime_allows_empty_input() {
        let trace: RealtimeRequest = serde_json::from_value(serde_json::json!({
            "words": ["a"],
            "input_text": "",
            "start_time": 5,
            "current_time": 10,
        }))
        .unwrap();
        assert!(trace.into_trace().is_ok());
    }

    #[test]
    fn test_realtime_requires_current_time() {
        let trace: RealtimeRequest = serde_json::from_value(serde_json::json!({
            "words": ["a"],
            "input_text": "a",
            "start_time": 5,
        }))
        .unwrap();
        assert!(trace.into_trace().is_err());
    }
}
