use crate::connectors::HBaseSettings;
use crate::health::DEFAULT_CHECK_TIMEOUT;
use std::time::Duration;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_port: u16,
    pub app_host: String,
    pub hbase: HBaseSettings,
    pub probe: ProbeSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ProbeSettings {
    /// Component name reported by `/health_check`
    #[serde(default = "default_probe_name")]
    pub name: String,
    /// Candidate tables, attempted in this order. Any one existing is enough.
    pub tables: Vec<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_probe_name() -> String {
    "hbase".to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_CHECK_TIMEOUT.as_millis() as u64
}

impl ProbeSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.timeout_ms == 0 {
            return Err(config::ConfigError::Message(
                "probe.timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // configuration.yaml (or .json, .toml) in the working directory
    load_configuration(config::File::with_name("configuration"), "APP")
}

fn load_configuration<S>(file: S, env_prefix: &str) -> Result<Settings, config::ConfigError>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings: Settings = config::Config::builder()
        .add_source(file)
        .add_source(environment(env_prefix))
        .build()?
        .try_deserialize()?;

    settings.probe.validate()?;
    Ok(settings)
}

/// APP__PROBE__TIMEOUT_MS=2000 overrides probe.timeout_ms;
/// APP__PROBE__TABLES=users,events overrides the candidate list.
fn environment(prefix: &str) -> config::Environment {
    config::Environment::with_prefix(prefix)
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("probe.tables")
}
