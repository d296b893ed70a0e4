use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome of a single probe evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProbeVerdict {
    pub healthy: bool,
    /// Empty when healthy.
    pub message: String,
}

impl ProbeVerdict {
    pub fn healthy() -> Self {
        Self {
            healthy: true,
            message: String::new(),
        }
    }

    pub fn unhealthy(message: impl Into<String>) -> Self {
        Self {
            healthy: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Healthy,
    Unhealthy,
    /// The check itself failed before it could reach a verdict.
    Errored,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub status: ComponentStatus,
    pub message: Option<String>,
    pub response_time_ms: Option<u64>,
    pub last_checked: DateTime<Utc>,
}

impl ComponentHealth {
    pub fn healthy(response_time_ms: u64) -> Self {
        Self {
            status: ComponentStatus::Healthy,
            message: None,
            response_time_ms: Some(response_time_ms),
            last_checked: Utc::now(),
        }
    }

    pub fn unhealthy(message: String, response_time_ms: Option<u64>) -> Self {
        Self {
            status: ComponentStatus::Unhealthy,
            message: Some(message),
            response_time_ms,
            last_checked: Utc::now(),
        }
    }

    pub fn errored(error: String) -> Self {
        Self {
            status: ComponentStatus::Errored,
            message: Some(error),
            response_time_ms: None,
            last_checked: Utc::now(),
        }
    }

    pub fn from_verdict(verdict: ProbeVerdict, response_time_ms: u64) -> Self {
        if verdict.healthy {
            Self::healthy(response_time_ms)
        } else {
            Self::unhealthy(verdict.message, Some(response_time_ms))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: ComponentStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: HashMap<String, ComponentHealth>,
}

impl HealthCheckResponse {
    pub fn new(version: String, uptime_seconds: u64) -> Self {
        Self {
            status: ComponentStatus::Healthy,
            timestamp: Utc::now(),
            version,
            uptime_seconds,
            components: HashMap::new(),
        }
    }

    /// An errored or unhealthy component makes the whole response unhealthy.
    pub fn add_component(&mut self, name: String, health: ComponentHealth) {
        if health.status != ComponentStatus::Healthy {
            self.status = ComponentStatus::Unhealthy;
        }
        self.components.insert(name, health);
    }

    pub fn is_healthy(&self) -> bool {
        self.status == ComponentStatus::Healthy
    }
}
