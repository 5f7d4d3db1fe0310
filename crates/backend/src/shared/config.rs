use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub vehicle_api: VehicleApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Подключение к внешнему API автомобилей
#[derive(Debug, Deserialize, Clone)]
pub struct VehicleApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: "logs".to_string(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[vehicle_api]
base_url = "http://localhost:8080/api"
timeout_secs = 30

[logging]
dir = "logs"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Runs before tracing is initialized, so progress goes to stdout.
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                println!("✓ Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                println!("ℹ config.toml not found at: {}", config_path.display());
            }
        }
    }

    println!("ℹ Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.vehicle_api.base_url.trim().is_empty() {
        anyhow::bail!("vehicle_api.base_url must not be empty");
    }
    Ok(config)
}

/// Get the log directory from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_log_dir(config: &Config) -> PathBuf {
    let log_dir = Path::new(&config.logging.dir);

    if log_dir.is_absolute() {
        return log_dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(log_dir);
        }
    }

    Path::new("target").join(log_dir)
}
