use std::net::TcpListener;
use tableprobe::configuration::get_configuration;
use tableprobe::startup::{build_registry, run};
use tableprobe::telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("tableprobe".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let settings = get_configuration().expect("Failed to read configuration.");

    tracing::info!(
        hbase_url = %settings.hbase.base_url,
        probe = %settings.probe.name,
        tables = ?settings.probe.tables,
        timeout_ms = settings.probe.timeout_ms,
        "Configuring table existence probe"
    );

    let registry = build_registry(&settings)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener = TcpListener::bind(&address)?;

    run(listener, registry).await?.await
}
