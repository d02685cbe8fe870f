use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 8088;
pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const DEFAULT_LOCATOR_BASE_URL: &str = "http://localhost:5678";
pub const DEFAULT_WINDOW_SERVICE_NAME: &str = "MaintenanceWindowService";
pub const DEFAULT_PLANNED_PATH: &str = "Planned";
pub const DEFAULT_WINDOW_TIMEOUT_MS: u64 = 10_000;

/// Top-level config (windowplan.toml + WINDOWPLAN_* env overrides).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindowplanConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub window: WindowServiceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

/// Which medium backs the schedule store.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StoreBackend {
    /// Process-local map; schedules vanish on restart.
    #[default]
    Memory,
    /// Single SQLite file at `store.path`.
    Sqlite,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: default_db_path(),
        }
    }
}

/// Where to find the maintenance window service.
///
/// The service is resolved through a locator: `GET {locator_base_url}/{service_name}`
/// returns the service base URL, then `GET {location}/{planned_path}` returns
/// the planned window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowServiceConfig {
    #[serde(default = "default_locator_base_url")]
    pub locator_base_url: String,
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_planned_path")]
    pub planned_path: String,
    /// Per-request timeout for both locator and window calls.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// When set, skip the remote service and use this window length.
    #[serde(default)]
    pub fixed_length_hours: Option<f64>,
}

impl Default for WindowServiceConfig {
    fn default() -> Self {
        Self {
            locator_base_url: default_locator_base_url(),
            service_name: default_service_name(),
            planned_path: default_planned_path(),
            timeout_ms: DEFAULT_WINDOW_TIMEOUT_MS,
            fixed_length_hours: None,
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}
fn default_locator_base_url() -> String {
    DEFAULT_LOCATOR_BASE_URL.to_string()
}
fn default_service_name() -> String {
    DEFAULT_WINDOW_SERVICE_NAME.to_string()
}
fn default_planned_path() -> String {
    DEFAULT_PLANNED_PATH.to_string()
}
fn default_timeout_ms() -> u64 {
    DEFAULT_WINDOW_TIMEOUT_MS
}
fn default_db_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.windowplan/windowplan.db", home)
}

impl WindowplanConfig {
    /// Load config from a TOML file with WINDOWPLAN_* env var overrides.
    ///
    /// Nested keys use a double underscore, e.g.
    /// `WINDOWPLAN_WINDOW__LOCATOR_BASE_URL=http://locator:5678`.
    /// A missing file is not an error; every field has a default.
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        let config: WindowplanConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("WINDOWPLAN_").split("__"))
            .extract()
            .map_err(|e| crate::error::WindowplanError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> crate::error::Result<()> {
        if self.window.timeout_ms == 0 {
            return Err(crate::error::WindowplanError::Config(
                "window.timeout_ms must be greater than zero".to_string(),
            ));
        }
        if let Some(len) = self.window.fixed_length_hours {
            if !len.is_finite() || len < 0.0 {
                return Err(crate::error::WindowplanError::Config(format!(
                    "window.fixed_length_hours must be a non-negative number, got {len}"
                )));
            }
        }
        Ok(())
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.windowplan/windowplan.toml", home)
}
