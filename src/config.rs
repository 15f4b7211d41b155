use crate::error::{ProfileVerifyError, Result};
use profile_verify_common::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the configured endpoint
pub const ENDPOINT_ENV: &str = "PROFILE_VERIFY_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    /// Request timeout; `None` leaves it to the transport
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_seconds: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let mut config: Config = serde_json::from_str(&content)?;
            // 0 means no timeout, same as `set_timeout`
            if config.timeout_seconds == Some(0) {
                config.timeout_seconds = None;
            }
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Settings to edit with `config`; a reset never reads the existing file
    pub fn load_for_update(path: &Path, reset: bool) -> Result<Self> {
        if reset {
            Ok(Self::default())
        } else {
            Self::load_from(path)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ProfileVerifyError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("profile-verify").join("config.json"))
    }

    /// Endpoint to use, environment variable first
    pub fn effective_endpoint(&self) -> String {
        match std::env::var(ENDPOINT_ENV) {
            Ok(endpoint) if !endpoint.trim().is_empty() => endpoint.trim().to_string(),
            _ => self.endpoint.clone(),
        }
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        validate_endpoint(&endpoint)?;
        self.endpoint = endpoint;
        Ok(())
    }

    pub fn set_timeout(&mut self, seconds: u64) {
        self.timeout_seconds = if seconds == 0 { None } else { Some(seconds) };
    }
}

/// Only absolute http(s) URLs are accepted
pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    let url = reqwest::Url::parse(endpoint)
        .map_err(|e| ProfileVerifyError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ProfileVerifyError::InvalidEndpoint(format!(
            "{}: unsupported scheme {}",
            endpoint, scheme
        ))),
    }
}
