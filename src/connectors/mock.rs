use super::errors::StoreError;
use super::TableStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
enum Scripted {
    Exists,
    Missing,
    Unauthorized,
    ClientTimeout,
    Delayed(Duration),
}

/// Scripted `TableStore`. Tables without a script are reported missing.
/// Every call is recorded so tests can assert which tables were queried.
#[derive(Default)]
pub struct MockTableStore {
    scripts: HashMap<String, Scripted>,
    calls: Mutex<Vec<String>>,
}

impl MockTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exists(mut self, table: &str) -> Self {
        self.scripts.insert(table.to_string(), Scripted::Exists);
        self
    }

    pub fn missing(mut self, table: &str) -> Self {
        self.scripts.insert(table.to_string(), Scripted::Missing);
        self
    }

    pub fn unauthorized(mut self, table: &str) -> Self {
        self.scripts.insert(table.to_string(), Scripted::Unauthorized);
        self
    }

    /// Fail with the client's own deadline error, as if its request timed out.
    pub fn client_timeout(mut self, table: &str) -> Self {
        self.scripts.insert(table.to_string(), Scripted::ClientTimeout);
        self
    }

    /// Resolve as existing, but only after `delay`.
    pub fn slow(mut self, table: &str, delay: Duration) -> Self {
        self.scripts.insert(table.to_string(), Scripted::Delayed(delay));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TableStore for MockTableStore {
    async fn ensure_table_exists(&self, table: &str) -> Result<(), StoreError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(table.to_string());
        }

        match self.scripts.get(table).cloned().unwrap_or(Scripted::Missing) {
            Scripted::Exists => Ok(()),
            Scripted::Missing => Err(StoreError::TableNotFound(table.to_string())),
            Scripted::Unauthorized => Err(StoreError::Unauthorized("token rejected".to_string())),
            Scripted::ClientTimeout => Err(StoreError::TimedOut(table.to_string())),
            Scripted::Delayed(delay) => {
                tokio::time::sleep(delay).await;
                Ok(())
            }
        }
    }
}
