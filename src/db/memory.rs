use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{SessionDocument, SessionStore, StoreError};

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    documents: RwLock<HashMap<String, SessionDocument>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn put(&self, user_id: &str, document: &SessionDocument) -> Result<(), StoreError> {
        self.documents
            .write()
            .insert(user_id.to_string(), document.clone());
        Ok(())
    }

    async fn get(&self, user_id: &str) -> Result<Option<SessionDocument>, StoreError> {
        Ok(self.documents.read().get(user_id).cloned())
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}
