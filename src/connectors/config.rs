use serde::{Deserialize, Serialize};

/// HBase REST gateway connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HBaseSettings {
    /// Base URL of the REST gateway (e.g., http://localhost:8080)
    pub base_url: String,
    /// Overall HTTP request timeout in seconds. The probe applies its own
    /// per-table bound on top of this.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for HBaseSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            request_timeout_secs: Some(10),
        }
    }
}
