use contracts::dashboards::d401_inventory_overview::DEFAULT_RECENT_LIMIT;
use contracts::system::settings::{AppSettings, Currency, Language, Theme};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub catalog: CatalogConfig,
    pub settings: SettingsConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid server address {}:{}: {}", self.host, self.port, e))?;
        Ok(addr)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// EnvFilter directive, used when RUST_LOG is not set
    pub level: String,
    /// File name inside the logs directory
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            file: "backend.log".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    /// Movements shown on the overview
    pub recent_movements: usize,
    /// Rows of the top products table
    pub top_products: usize,
    /// Reject seed records that fail validation
    pub validate_seed: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            recent_movements: DEFAULT_RECENT_LIMIT,
            top_products: 5,
            validate_seed: true,
        }
    }
}

/// Initial user preferences
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SettingsConfig {
    pub theme: Theme,
    pub language: Language,
    pub currency: Currency,
    pub notifications: bool,
    pub auto_backup: bool,
    pub low_stock_alert: bool,
    pub email_notifications: bool,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        AppSettings::default().into()
    }
}

impl From<AppSettings> for SettingsConfig {
    fn from(s: AppSettings) -> Self {
        Self {
            theme: s.theme,
            language: s.language,
            currency: s.currency,
            notifications: s.notifications,
            auto_backup: s.auto_backup,
            low_stock_alert: s.low_stock_alert,
            email_notifications: s.email_notifications,
        }
    }
}

impl From<&SettingsConfig> for AppSettings {
    fn from(c: &SettingsConfig) -> Self {
        Self {
            theme: c.theme,
            language: c.language,
            currency: c.currency,
            notifications: c.notifications,
            auto_backup: c.auto_backup,
            low_stock_alert: c.low_stock_alert,
            email_notifications: c.email_notifications,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[logging]
level = "info"
file = "backend.log"

[catalog]
recent_movements = 4
top_products = 5
validate_seed = true

[settings]
theme = "default"
language = "es"
currency = "MXN"
"#;

/// Directory of the running executable, if it can be determined
pub fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.to_path_buf()))
}

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Embedded default
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(dir) = exe_dir() {
        let config_path = dir.join("config.toml");
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        }
        tracing::warn!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Keep the loaded configuration for request handlers
pub fn install(config: Config) -> &'static Config {
    CONFIG.get_or_init(|| config)
}

/// Catalog section of the installed configuration (defaults before install)
pub fn catalog() -> CatalogConfig {
    CONFIG.get().map(|c| c.catalog.clone()).unwrap_or_default()
}
