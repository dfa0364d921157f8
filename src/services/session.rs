use std::sync::Arc;

use chrono::Utc;
use tokio::task::JoinHandle;

use crate::analytics::{AnalyticsResult, TypingTrace};
use crate::db::{SessionDocument, SessionStore};
use crate::services::user_stats::{self, UserStats};

pub fn new_document(
    user_id: &str,
    trace: TypingTrace,
    analytics: AnalyticsResult,
) -> SessionDocument {
    SessionDocument {
        session_id: uuid::Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        test_data: trace,
        analytics,
        timestamp: Utc::now(),
    }
}

/// Writes `document` without making the caller wait. Failures are logged and
/// dropped.
pub fn persist_in_background(
    store: Arc<dyn SessionStore>,
    document: SessionDocument,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        match store.put(&document.user_id, &document).await {
            Ok(()) => tracing::debug!(
                user_id = %document.user_id,
                session_id = %document.session_id,
                "typing session saved"
            ),
            Err(err) => tracing::warn!(
                user_id = %document.user_id,
                session_id = %document.session_id,
                error = %err,
                "failed to save typing session"
            ),
        }
    })
}

/// The user's stored session, or `None` when there is none or it could not be
/// read.
pub async fn load_latest(store: &dyn SessionStore, user_id: &str) -> Option<SessionDocument> {
    match store.get(user_id).await {
        Ok(document) => document,
        Err(err) => {
            tracing::warn!(user_id = %user_id, error = %err, "failed to load typing session");
            None
        }
    }
}

pub async fn user_stats(store: &dyn SessionStore, user_id: &str) -> UserStats {
    let documents = load_latest(store, user_id).await.into_iter().collect();
    user_stats::summarize(documents)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::analytics::analyze;
    use crate::db::{MemorySessionStore, StoreError};

    struct BrokenStore;

    #[async_trait]
    impl SessionStore for BrokenStore {
        async fn put(&self, _: &str, _: &SessionDocument) -> Result<(), StoreError> {
            Err(StoreError::Serialization(
                serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
            ))
        }

        async fn get(&self, _: &str) -> Result<Option<SessionDocument>, StoreError> {
            Err(StoreError::Database(sqlx::Error::PoolClosed))
        }

        fn kind(&self) -> &'static str {
            "broken"
        }
    }

    fn trace() -> TypingTrace {
        TypingTrace {
            words: vec!["sun".to_string()],
            input_text: "sun".to_string(),
            start_time: 0,
            end_time: 2_000,
            time_data: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_background_persist_writes_document() {
        let store = Arc::new(MemorySessionStore::new());
        let trace = trace();
        let document = new_document("u1", trace.clone(), analyze(&trace).unwrap());
        let session_id = document.session_id.clone();

        persist_in_background(store.clone(), document).await.unwrap();

        let stored = store.get("u1").await.unwrap().unwrap();
        assert_eq!(stored.session_id, session_id);
    }

    #[tokio::test]
    async fn test_background_persist_swallows_failure() {
        let trace = trace();
        let document = new_document("u1", trace.clone(), analyze(&trace).unwrap());
        let handle = persist_in_background(Arc::new(BrokenStore), document);
        assert!(handle.await.is_ok());
    }

    #[tokio::test]
    async fn test_read_failure_is_empty() {
        assert!(load_latest(&BrokenStore, "u1").await.is_none());
        assert_eq!(user_stats(&BrokenStore, "u1").await, UserStats::default());
    }

    #[test]
    fn test_session_ids_are_unique() {
        let trace = trace();
        let analytics = analyze(&trace).unwrap();
        let a = new_document("u1", trace.clone(), analytics.clone());
        let b = new_document("u1", trace, analytics);
        assert_ne!(a.session_id, b.session_id);
    }
}
