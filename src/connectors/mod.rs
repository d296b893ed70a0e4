//! Data store connectors
//!
//! The probe never talks to a store directly. It goes through the `TableStore`
//! trait so the HTTP implementation can be swapped for a scripted one in tests.
//!
//! ## Architecture Pattern
//!
//! 1. `TableStore` is the only operation the probe consumes
//! 2. `hbase_rest.rs` implements it against the HBase REST gateway
//! 3. Configuration for the gateway lives in `config.rs`
//! 4. The client is injected as `Arc<dyn TableStore>`; the probe never owns its lifecycle
//!
//! ## Testing
//!
//! ```ignore
//! #[cfg(test)]
//! mod tests {
//!     use connectors::mock::MockTableStore;
//!
//!     #[tokio::test]
//!     async fn probe_without_http() {
//!         let store = Arc::new(MockTableStore::new().exists("users"));
//!         // Exercise probe logic without a running gateway
//!     }
//! }
//! ```

use async_trait::async_trait;

pub mod config;
pub mod errors;
pub mod hbase_rest;
#[cfg(test)]
pub mod mock;

pub use config::HBaseSettings;
pub use errors::StoreError;
pub use hbase_rest::HBaseRestClient;
#[cfg(test)]
pub use mock::MockTableStore;

#[async_trait]
pub trait TableStore: Send + Sync {
    /// Confirm that `table` is present and addressable.
    ///
    /// Returns `StoreError::TableNotFound` when the store affirmatively reports
    /// the table as absent. Every other error is left for the caller to treat
    /// as an unexpected failure. Implementations need not bound their own wait.
    async fn ensure_table_exists(&self, table: &str) -> Result<(), StoreError>;
}
