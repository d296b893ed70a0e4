mod models;
mod probe;
mod registry;

pub use models::{ComponentHealth, ComponentStatus, HealthCheckResponse, ProbeVerdict};
pub use probe::{ProbeError, TableCheckOutcome, TableExistenceProbe, DEFAULT_CHECK_TIMEOUT};
pub use registry::{HealthCheck, HealthRegistry};
