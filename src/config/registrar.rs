// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Registrar configuration
//!
//! Sources, lowest precedence first: built-in defaults, a TOML file with a
//! `[registrar]` table, then environment variables. CLI flags override all
//! of them.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

use crate::registration::client::parse_endpoint;

/// Local Xinference supervisor
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:9997";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for reaching the registration API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrarConfig {
    /// Base URL of the model-serving backend
    pub endpoint: String,
    /// Request timeout in seconds; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
    /// Ask the backend to keep registrations across restarts
    pub persist: bool,
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
            persist: true,
        }
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    registrar: RegistrarConfig,
}

impl RegistrarConfig {
    /// Defaults overlaid with environment variables
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Load the `[registrar]` table of a TOML file; missing keys keep defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let file: ConfigFile = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        Ok(file.registrar)
    }

    /// Apply `XINFERENCE_ENDPOINT`, `REGISTRAR_TIMEOUT_SECS` and `REGISTRAR_PERSIST`
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| env::var(key).ok())
    }

    /// Apply overrides read through `lookup` (keyed by environment variable name).
    ///
    /// A timeout of 0 is kept as `Some(0)` so that `validate()` rejects it
    /// exactly as it does for a config file.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup("XINFERENCE_ENDPOINT") {
            if !endpoint.trim().is_empty() {
                self.endpoint = endpoint;
            }
        }

        if let Some(raw) = lookup("REGISTRAR_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) => self.timeout_secs = Some(secs),
                Err(_) => warn!("Ignoring REGISTRAR_TIMEOUT_SECS={:?}: not a number", raw),
            }
        }

        if let Some(raw) = lookup("REGISTRAR_PERSIST") {
            match parse_flag(&raw) {
                Some(persist) => self.persist = persist,
                None => warn!("Ignoring REGISTRAR_PERSIST={:?}: expected true/false", raw),
            }
        }

        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_endpoint(&self.endpoint).map_err(|e| ConfigError::Invalid(e.to_string()))?;

        if self.timeout_secs == Some(0) {
            return Err(ConfigError::Invalid(
                "timeout_secs must be at least 1 (omit it to disable the timeout)".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
