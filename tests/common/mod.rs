use tableprobe::configuration::{ProbeSettings, Settings};
use tableprobe::connectors::HBaseSettings;
use wiremock::MockServer;

pub struct TestApp {
    pub address: String,
    pub hbase_server: MockServer,
}

pub fn settings_for(
    hbase_url: &str,
    tables: &[&str],
    timeout_ms: u64,
    request_timeout_secs: Option<u64>,
) -> Settings {
    Settings {
        app_port: 0,
        app_host: "127.0.0.1".to_string(),
        hbase: HBaseSettings {
            base_url: hbase_url.to_string(),
            request_timeout_secs,
        },
        probe: ProbeSettings {
            name: "hbase".to_string(),
            tables: tables.iter().map(|t| t.to_string()).collect(),
            timeout_ms,
        },
    }
}

/// Start the server on a random port, probing a wiremock HBase REST gateway.
/// Mount expectations on `hbase_server` before calling `/health_check`.
pub async fn spawn_app(tables: &[&str], timeout_ms: u64) -> TestApp {
    spawn_app_with_request_timeout(tables, timeout_ms, Some(10)).await
}

/// Same as `spawn_app`, with the HTTP client's own deadline set explicitly.
pub async fn spawn_app_with_request_timeout(
    tables: &[&str],
    timeout_ms: u64,
    request_timeout_secs: Option<u64>,
) -> TestApp {
    let hbase_server = MockServer::start().await;
    let settings = settings_for(&hbase_server.uri(), tables, timeout_ms, request_timeout_secs);

    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let registry =
        tableprobe::startup::build_registry(&settings).expect("Failed to build registry.");
    let server = tableprobe::startup::run(listener, registry)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        hbase_server,
    }
}
