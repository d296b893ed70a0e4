use super::config::HBaseSettings;
use super::errors::StoreError;
use super::TableStore;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::Instrument;

/// `TableStore` backed by the HBase REST gateway (`GET /{table}/exists`).
#[derive(Clone)]
pub struct HBaseRestClient {
    base_url: String,
    http_client: reqwest::Client,
    user_agent: String,
}

impl HBaseRestClient {
    pub fn new(settings: &HBaseSettings) -> Result<Self, StoreError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = settings.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs.max(1)));
        }
        let http_client = builder.build()?;

        Ok(Self::with_client(&settings.base_url, http_client))
    }

    /// Reuse an HTTP client that is already shared with other request paths.
    pub fn with_client(base_url: &str, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
            user_agent: format!("tableprobe-hbase-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn encode_segment(segment: &str) -> String {
        urlencoding::encode(segment).into_owned()
    }

    fn exists_url(&self, table: &str) -> String {
        format!("{}/{}/exists", self.base_url, Self::encode_segment(table))
    }
}

#[async_trait]
impl TableStore for HBaseRestClient {
    async fn ensure_table_exists(&self, table: &str) -> Result<(), StoreError> {
        if table.trim().is_empty() {
            return Err(StoreError::InvalidTableName(table.to_string()));
        }

        let url = self.exists_url(table);
        let span = tracing::debug_span!("hbase_exists_request", table);

        let response = self
            .http_client
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send()
            .instrument(span)
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    StoreError::TimedOut(table.to_string())
                } else {
                    StoreError::Http(err)
                }
            })?;

        match response.status() {
            StatusCode::OK => Ok(()),
            StatusCode::NOT_FOUND => Err(StoreError::TableNotFound(table.to_string())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                let text = match response.text().await {
                    Ok(text) => text,
                    Err(err) => {
                        tracing::debug!(table, error = %err, "Failed to read HBase error body");
                        format!("response body unreadable: {}", err)
                    }
                };
                Err(StoreError::Unauthorized(text))
            }
            status => Err(StoreError::UnexpectedStatus {
                table: table.to_string(),
                status: status.as_u16(),
            }),
        }
    }
}
