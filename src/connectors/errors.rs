use thiserror::Error;

/// Errors that can occur while asking a data store about a table
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store answered and the table is not there
    #[error("Table '{0}' does not exist")]
    TableNotFound(String),
    /// Credentials rejected (401/403)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// Any status the gateway is not expected to return for an existence check
    #[error("Unexpected status {status} checking '{table}'")]
    UnexpectedStatus { table: String, status: u16 },
    /// The client's own request deadline fired before the store answered
    #[error("Timed out checking '{0}'")]
    TimedOut(String),
    /// Transport failure: connection refused, reset, TLS, ...
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid table name: {0:?}")]
    InvalidTableName(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TableNotFound(_))
    }

    pub fn is_timed_out(&self) -> bool {
        matches!(self, Self::TimedOut(_))
    }
}
