use super::models::{ComponentHealth, HealthCheckResponse, ProbeVerdict};
use super::probe::TableExistenceProbe;
use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;

/// Anything the registry can evaluate. An `Err` means the check could not
/// reach a verdict at all, which is reported apart from "unhealthy".
#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn check(&self) -> anyhow::Result<ProbeVerdict>;
}

#[async_trait]
impl HealthCheck for TableExistenceProbe {
    async fn check(&self) -> anyhow::Result<ProbeVerdict> {
        Ok(self.evaluate().await?)
    }
}

pub struct HealthRegistry {
    checks: Vec<(String, Arc<dyn HealthCheck>)>,
    start_time: Instant,
}

impl Default for HealthRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthRegistry {
    pub fn new() -> Self {
        Self {
            checks: Vec::new(),
            start_time: Instant::now(),
        }
    }

    /// Registering a name twice replaces the earlier check.
    pub fn register(&mut self, name: impl Into<String>, check: Arc<dyn HealthCheck>) {
        let name = name.into();
        self.checks.retain(|(existing, _)| existing != &name);
        self.checks.push((name, check));
    }

    pub fn names(&self) -> Vec<&str> {
        self.checks.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub async fn run_all(&self) -> HealthCheckResponse {
        let version = env!("CARGO_PKG_VERSION").to_string();
        let uptime = self.start_time.elapsed().as_secs();
        let mut response = HealthCheckResponse::new(version, uptime);

        let results = join_all(
            self.checks
                .iter()
                .map(|(name, check)| run_one(name, check.as_ref())),
        )
        .await;

        for (name, health) in results {
            response.add_component(name, health);
        }

        response
    }
}

#[tracing::instrument(name = "Run health check", skip(check))]
async fn run_one(name: &str, check: &dyn HealthCheck) -> (String, ComponentHealth) {
    let start = Instant::now();

    let health = match check.check().await {
        Ok(verdict) => {
            let elapsed = start.elapsed().as_millis() as u64;
            if !verdict.healthy {
                tracing::warn!(diagnostics = %verdict.message, "Health check reported unhealthy");
            }
            ComponentHealth::from_verdict(verdict, elapsed)
        }
        Err(err) => {
            tracing::error!("Health check errored: {:?}", err);
            ComponentHealth::errored(format!("{:#}", err))
        }
    };

    (name.to_string(), health)
}
