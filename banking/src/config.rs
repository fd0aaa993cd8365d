use crate::util::errors::BankingError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

pub const CONFIG_FILE: &str = "banking.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    pub name: String,
    pub debug_mode: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding `bank.yaml`; the compiled-in fixture is used when unset.
    pub fixtures_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub redirect_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub toast_ttl_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub application: ApplicationConfig,
    pub data: DataConfig,
    pub flows: FlowConfig,
    pub ui: UiConfig,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        ApplicationConfig {
            name: "FinTechApp".to_string(),
            debug_mode: false,
        }
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        FlowConfig { redirect_delay_ms: 3000 }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig { toast_ttl_ms: 5000 }
    }
}

impl Config {
    /// Loads `banking.toml` from the working directory when present, then
    /// applies environment overrides.
    pub fn load() -> Result<Self, BankingError> {
        let path = Path::new(CONFIG_FILE);
        let mut config = if path.exists() {
            Self::load_from_file(path)?
        } else {
            warn!("{} not found, using defaults", CONFIG_FILE);
            Config::default()
        };

        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, BankingError> {
        let config = Self::from_toml_str(&std::fs::read_to_string(path)?)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, BankingError> {
        Ok(toml::from_str(text)?)
    }

    /// Applies `BANKING_*` overrides read through `lookup`. Values that do
    /// not parse are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup("BANKING_FIXTURES_DIR") {
            self.data.fixtures_dir = Some(PathBuf::from(dir));
        }
        if let Some(ms) = lookup("BANKING_REDIRECT_DELAY_MS").and_then(|v| v.parse().ok()) {
            self.flows.redirect_delay_ms = ms;
        }
        if let Some(ms) = lookup("BANKING_TOAST_TTL_MS").and_then(|v| v.parse().ok()) {
            self.ui.toast_ttl_ms = ms;
        }
        if let Some(debug) = lookup("DEBUG") {
            self.application.debug_mode = debug.to_lowercase() == "true" || debug == "1";
        }
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.flows.redirect_delay_ms)
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.ui.toast_ttl_ms)
    }
}
