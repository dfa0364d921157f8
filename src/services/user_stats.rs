use serde::Serialize;

use crate::analytics::metrics::round2;
use crate::db::SessionDocument;

const RECENT_SESSIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub total_tests: usize,
    pub average_wpm: f64,
    pub best_wpm: f64,
    pub average_accuracy: f64,
    /// Seconds.
    pub total_time: f64,
    /// Newest first.
    pub sessions: Vec<SessionDocument>,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            total_tests: 0,
            average_wpm: 0.0,
            best_wpm: 0.0,
            average_accuracy: 0.0,
            total_time: 0.0,
            sessions: Vec::new(),
        }
    }
}

pub fn summarize(mut documents: Vec<SessionDocument>) -> UserStats {
    if documents.is_empty() {
        return UserStats::default();
    }

    let count = documents.len() as f64;
    let total_wpm: f64 = documents.iter().map(|doc| doc.analytics.wpm).sum();
    let total_accuracy: f64 = documents.iter().map(|doc| doc.analytics.accuracy).sum();
    let total_time: f64 = documents.iter().map(|doc| doc.analytics.time_taken).sum();
    let best_wpm = documents
        .iter()
        .map(|doc| doc.analytics.wpm)
        .fold(0.0, f64::max);

    documents.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    let total_tests = documents.len();
    documents.truncate(RECENT_SESSIONS);

    UserStats {
        total_tests,
        average_wpm: round2(total_wpm / count),
        best_wpm: round2(best_wpm),
        average_accuracy: round2(total_accuracy / count),
        total_time: round2(total_time),
        sessions: documents,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::analytics::{analyze, TypingTrace};

    fn document(id: usize, input: &str, secs: i64) -> SessionDocument {
        let trace = TypingTrace {
            words: vec!["red".to_string(), "fox".to_string()],
            input_text: input.to_string(),
            start_time: 0,
            end_time: secs * 1000,
            time_data: Vec::new(),
        };
        SessionDocument {
            session_id: format!("s{id}"),
            user_id: "u1".to_string(),
            analytics: analyze(&trace).unwrap(),
            test_data: trace,
            timestamp: Utc::now() + Duration::seconds(id as i64),
        }
    }

    #[test]
    fn test_no_documents() {
        assert_eq!(summarize(Vec::new()), UserStats::default());
    }

    #[test]
    fn test_single_document() {
        let stats = summarize(vec![document(1, "red fox", 12)]);
        assert_eq!(stats.total_tests, 1);
        assert_eq!(stats.average_wpm, 10.0);
        assert_eq!(stats.best_wpm, 10.0);
        assert_eq!(stats.average_accuracy, 100.0);
        assert_eq!(stats.total_time, 12.0);
        assert_eq!(stats.sessions.len(), 1);
    }

    #[test]
    fn test_many_documents_keep_latest_ten() {
        let docs: Vec<_> = (0..12)
            .map(|i| document(i, "red fox", if i == 5 { 6 } else { 12 }))
            .collect();
        let stats = summarize(docs);
        assert_eq!(stats.total_tests, 12);
        assert_eq!(stats.best_wpm, 20.0);
        assert_eq!(stats.sessions.len(), 10);
        assert_eq!(stats.sessions[0].session_id, "s11");
        assert_eq!(stats.total_time, 138.0);
    }
}
