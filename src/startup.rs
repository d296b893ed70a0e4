use crate::configuration::Settings;
use crate::connectors::{HBaseRestClient, StoreError, TableStore};
use crate::health::{HealthRegistry, TableExistenceProbe};
use crate::routes;
use actix_web::{dev::Server, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

/// Build the registry the server reports on: one table existence probe
/// over the configured HBase REST gateway.
pub fn build_registry(settings: &Settings) -> Result<HealthRegistry, StoreError> {
    let client: Arc<dyn TableStore> = Arc::new(HBaseRestClient::new(&settings.hbase)?);

    if settings.probe.tables.is_empty() {
        tracing::warn!(
            probe = %settings.probe.name,
            "No tables configured; the probe will always report unhealthy"
        );
    }

    let probe = TableExistenceProbe::new(client, settings.probe.tables.iter().cloned())
        .with_timeout(settings.probe.timeout());

    let mut registry = HealthRegistry::new();
    registry.register(settings.probe.name.clone(), Arc::new(probe));
    Ok(registry)
}

pub async fn run(listener: TcpListener, registry: HealthRegistry) -> Result<Server, std::io::Error> {
    let registry = web::Data::new(Arc::new(registry));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .service(web::scope("/health_check").service(routes::health_check))
            .app_data(registry.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
