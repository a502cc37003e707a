use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.exchangerate-api.com";
const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_REFRESH_MINUTES: u64 = 30;
const SEED_FILE_NAME: &str = "currency_data.tsv";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_fallback_base_rate() -> f64 {
    crate::providers::exchange_rate_api::DEFAULT_FALLBACK_BASE_RATE
}

fn default_refresh_minutes() -> u64 {
    DEFAULT_REFRESH_MINUTES
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ExchangeRateApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Base currency units per US Dollar, assumed when a response omits the base.
    #[serde(default = "default_fallback_base_rate")]
    pub fallback_base_rate: f64,
}

impl Default for ExchangeRateApiConfig {
    fn default() -> Self {
        ExchangeRateApiConfig {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            fallback_base_rate: default_fallback_base_rate(),
        }
    }
}

impl ExchangeRateApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub exchange_rate_api: ExchangeRateApiConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default = "default_refresh_minutes")]
    pub refresh_interval_minutes: u64,
    /// Seed file read at startup. See `docs/currency_data.tsv` for a sample.
    pub seed_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            providers: ProvidersConfig::default(),
            refresh_interval_minutes: default_refresh_minutes(),
            seed_path: None,
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, or the defaults when no
    /// file has been set up yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "fxconv", "fxconv")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn seed_path(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.seed_path {
            return Ok(PathBuf::from(custom_path));
        }
        let proj_dirs = ProjectDirs::from("dev", "fxconv", "fxconv")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.data_dir().join(SEED_FILE_NAME))
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_minutes.max(1) * 60)
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
