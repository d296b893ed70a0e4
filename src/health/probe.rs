use super::models::ProbeVerdict;
use crate::connectors::{StoreError, TableStore};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::{error::Elapsed, timeout};

pub const DEFAULT_CHECK_TIMEOUT: Duration = Duration::from_millis(5000);

/// Classification of one bounded existence check.
#[derive(Debug)]
pub enum TableCheckOutcome {
    Exists,
    NotFound,
    TimedOut,
    /// Anything the probe does not know how to interpret.
    Failed(StoreError),
}

impl TableCheckOutcome {
    pub fn classify(result: Result<Result<(), StoreError>, Elapsed>) -> Self {
        match result {
            Ok(Ok(())) => Self::Exists,
            Ok(Err(err)) if err.is_not_found() => Self::NotFound,
            Ok(Err(err)) if err.is_timed_out() => Self::TimedOut,
            Ok(Err(err)) => Self::Failed(err),
            Err(_) => Self::TimedOut,
        }
    }
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Unexpected error checking for '{table}'")]
    Client {
        table: String,
        #[source]
        source: StoreError,
    },
}

/// Healthy as long as at least one of the configured tables can be confirmed
/// to exist within the per-table bound.
#[derive(Clone)]
pub struct TableExistenceProbe {
    client: Arc<dyn TableStore>,
    tables: Vec<String>,
    timeout: Duration,
}

impl TableExistenceProbe {
    pub fn new<I, S>(client: Arc<dyn TableStore>, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            client,
            tables: tables.into_iter().map(Into::into).collect(),
            timeout: DEFAULT_CHECK_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Check the candidates in order, stopping at the first one that exists.
    ///
    /// Missing and timed-out tables are reported in the verdict message. Any
    /// other client failure aborts the evaluation with `ProbeError::Client`.
    #[tracing::instrument(
        name = "Evaluate table existence probe",
        skip(self),
        fields(tables = self.tables.len())
    )]
    pub async fn evaluate(&self) -> Result<ProbeVerdict, ProbeError> {
        let mut healthy = false;
        let mut diagnostics = String::new();

        for table in &self.tables {
            let result = timeout(self.timeout, self.client.ensure_table_exists(table)).await;

            match TableCheckOutcome::classify(result) {
                TableCheckOutcome::Exists => {
                    healthy = true;
                    break;
                }
                TableCheckOutcome::TimedOut => {
                    tracing::warn!(table = %table, "Timed out checking for table");
                    diagnostics.push_str(&format!(
                        "Timed out checking for '{}' after {}. ",
                        table,
                        describe_bound(self.timeout)
                    ));
                }
                TableCheckOutcome::NotFound => {
                    tracing::warn!(table = %table, "Table does not exist");
                    diagnostics.push_str(&format!("Table '{}' does not exist. ", table));
                }
                TableCheckOutcome::Failed(source) => {
                    tracing::error!(table = %table, error = %source, "Table existence check failed");
                    return Err(ProbeError::Client {
                        table: table.clone(),
                        source,
                    });
                }
            }
        }

        if healthy {
            if !diagnostics.is_empty() {
                tracing::info!(suppressed = %diagnostics, "Healthy after earlier table failures");
            }
            Ok(ProbeVerdict::healthy())
        } else {
            Ok(ProbeVerdict::unhealthy(diagnostics))
        }
    }
}

fn describe_bound(bound: Duration) -> String {
    if bound.subsec_nanos() == 0 {
        match bound.as_secs() {
            1 => "1 second".to_string(),
            secs => format!("{} seconds", secs),
        }
    } else {
        format!("{} milliseconds", bound.as_millis())
    }
}
