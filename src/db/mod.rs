pub mod memory;
pub mod sqlite;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analytics::{AnalyticsResult, TypingTrace};

pub use memory::MemorySessionStore;
pub use sqlite::SqliteSessionStore;

/// A finished typing test as it is persisted for its user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDocument {
    pub session_id: String,
    pub user_id: String,
    pub test_data: TypingTrace,
    pub analytics: AnalyticsResult,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Latest-session storage, one document per user. `put` replaces whatever
/// the user had before.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn put(&self, user_id: &str, document: &SessionDocument) -> Result<(), StoreError>;

    async fn get(&self, user_id: &str) -> Result<Option<SessionDocument>, StoreError>;

    fn kind(&self) -> &'static str;
}
