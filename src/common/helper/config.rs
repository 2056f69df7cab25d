use crate::common::error::ConfigError;
use crate::common::generator::PasswordOptions;
use crate::common::session::{CopyIndicator, ResetPolicy};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_CONFIG_PATH: &str = "pwgen.toml";
pub const CONFIG_PATH_ENV: &str = "PWGEN_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub defaults: PasswordOptions,
    pub copy_feedback: CopyFeedbackConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyFeedbackConfig {
    pub reset_after_ms: u64,
    pub restart_on_copy: bool,
}

impl Default for CopyFeedbackConfig {
    fn default() -> Self {
        Self {
            reset_after_ms: 2000,
            restart_on_copy: false,
        }
    }
}

impl CopyFeedbackConfig {
    pub fn indicator(&self) -> CopyIndicator {
        let policy = if self.restart_on_copy {
            ResetPolicy::Restart
        } else {
            ResetPolicy::Independent
        };
        CopyIndicator::new(Duration::from_millis(self.reset_after_ms), policy)
    }
}

//Flag first, then env (a .env file counts), then the working directory
pub fn resolve_config_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Load the config at `path`. A missing file is not an error and gives the
/// defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("No config file at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config: AppConfig = toml::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if !PasswordOptions::length_in_range(config.defaults.length) {
        return Err(ConfigError::LengthOutOfRange(config.defaults.length));
    }
    info!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn save_config(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    let toml = toml::to_string(config)?;
    fs::write(path, toml).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}
