use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use super::{SessionDocument, SessionStore, StoreError};

const MAX_CONNECTIONS: u32 = 5;

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS typing_sessions (
    user_id    TEXT PRIMARY KEY NOT NULL,
    session_id TEXT NOT NULL,
    document   TEXT NOT NULL,
    updated_at TEXT NOT NULL
)
"#;

#[derive(Clone)]
pub struct SqliteSessionStore {
    pool: SqlitePool,
}

impl SqliteSessionStore {
    /// Opens (creating if needed) the database at `url` and ensures the
    /// sessions table exists.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        sqlx::query(CREATE_TABLE).execute(&pool).await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn put(&self, user_id: &str, document: &SessionDocument) -> Result<(), StoreError> {
        let payload = serde_json::to_string(document)?;

        sqlx::query(
            r#"
            INSERT INTO typing_sessions (user_id, session_id, document, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(user_id) DO UPDATE SET
                session_id = excluded.session_id,
                document = excluded.document,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(user_id)
        .bind(&document.session_id)
        .bind(payload)
        .bind(document.timestamp.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get(&self, user_id: &str) -> Result<Option<SessionDocument>, StoreError> {
        let row = sqlx::query(r#"SELECT document FROM typing_sessions WHERE user_id = ?"#)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let payload: String = row.try_get("document")?;
        Ok(Some(serde_json::from_str(&payload)?))
    }

    fn kind(&self) -> &'static str {
        "sqlite"
    }
}
