use std::sync::Arc;
use std::time::{Instant, SystemTime};

use crate::auth::{IdentityVerifier, JwtVerifier};
use crate::config::Config;
use crate::db::{MemorySessionStore, SessionStore, SqliteSessionStore, StoreError};

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    started_at_system: SystemTime,
    config: Arc<Config>,
    verifier: Arc<dyn IdentityVerifier>,
    store: Arc<dyn SessionStore>,
}

impl AppState {
    pub fn new(
        config: Config,
        verifier: Arc<dyn IdentityVerifier>,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            started_at: Instant::now(),
            started_at_system: SystemTime::now(),
            config: Arc::new(config),
            verifier,
            store,
        }
    }

    /// Builds the collaborators named by `config`: a bearer-token verifier for
    /// `token_secret` and a SQLite store when `database_url` is set, an
    /// in-memory one otherwise.
    pub async fn from_config(config: Config) -> Result<Self, StoreError> {
        let verifier = JwtVerifier::new(config.token_secret.clone());
        if !verifier.is_configured() {
            tracing::error!(
                "AUTH_TOKEN_SECRET is not set; authenticated routes will reject every request"
            );
        }

        let store: Arc<dyn SessionStore> = match config.database_url.as_deref() {
            Some(url) => Arc::new(SqliteSessionStore::connect(url).await?),
            None => {
                tracing::warn!("DATABASE_URL is not set; sessions are kept in memory only");
                Arc::new(MemorySessionStore::new())
            }
        };

        Ok(Self::new(config, Arc::new(verifier), store))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn verifier(&self) -> Arc<dyn IdentityVerifier> {
        Arc::clone(&self.verifier)
    }

    pub fn store(&self) -> Arc<dyn SessionStore> {
        Arc::clone(&self.store)
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn started_at_system(&self) -> SystemTime {
        self.started_at_system
    }
}
