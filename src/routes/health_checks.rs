use crate::health::HealthRegistry;
use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

/// 200 when every registered check is healthy, 503 otherwise. The body is
/// the same `HealthCheckResponse` either way.
#[tracing::instrument(name = "Health check", skip(registry))]
#[get("")]
pub async fn health_check(registry: web::Data<Arc<HealthRegistry>>) -> HttpResponse {
    let response = registry.run_all().await;

    if response.is_healthy() {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
