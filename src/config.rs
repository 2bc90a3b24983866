//! Configuration file support for depviz.
//!
//! An optional `depviz.config.yml` tunes the HTTP client used by the remote
//! index backend. It is auto-discovered in the working directory or given
//! explicitly with `--config`.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapters::outbound::network::HttpClientSettings;
use crate::shared::error::DepvizError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "depviz.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// HTTP timeout for the index request, in seconds
    pub timeout_secs: Option<u64>,
    /// User-Agent header sent to the index
    pub user_agent: Option<String>,
    /// Set to `false` to ignore proxy environment variables
    pub use_env_proxy: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// HTTP client settings with configured values applied over the defaults
    pub fn http_settings(&self) -> HttpClientSettings {
        let defaults = HttpClientSettings::default();
        HttpClientSettings {
            timeout: self
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            use_env_proxy: self.use_env_proxy.unwrap_or(defaults.use_env_proxy),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config, path)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Explicit path wins; otherwise discover in `dir`; otherwise defaults.
pub fn resolve_config(explicit: Option<&Path>, dir: &Path) -> Result<ConfigFile> {
    match explicit {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(dir)?.unwrap_or_default()),
    }
}

fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    if config.timeout_secs == Some(0) {
        return Err(DepvizError::ConfigError {
            path: PathBuf::from(path),
            details: "timeout_secs must be greater than 0".to_string(),
            hint: "Remove the key to use the default 10 second timeout".to_string(),
        }
        .into());
    }

    if let Some(user_agent) = &config.user_agent {
        if user_agent.trim().is_empty() {
            return Err(DepvizError::ConfigError {
                path: PathBuf::from(path),
                details: "user_agent must not be empty".to_string(),
                hint: "Remove the key to use the default user agent".to_string(),
            }
            .into());
        }
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
