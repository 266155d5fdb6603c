//! Configuration for the FlowForge CLI

use std::env;
use std::fs;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::paths::Paths;

/// Connection and process settings for the managed n8n instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct N8nConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub use_https: bool,

    /// API key sent as X-N8N-API-KEY when set
    #[serde(default)]
    pub api_key: Option<String>,

    /// Executable name the server runs under
    #[serde(default = "default_process_name")]
    pub process_name: String,

    /// Fixed warm-up wait between a background start and the health check
    #[serde(default = "default_startup_wait")]
    pub startup_wait_secs: u64,

    /// Timeout applied to every HTTP request
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5678
}

fn default_process_name() -> String {
    "n8n".to_string()
}

fn default_startup_wait() -> u64 {
    5
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for N8nConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            use_https: false,
            api_key: None,
            process_name: default_process_name(),
            startup_wait_secs: default_startup_wait(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl N8nConfig {
    /// Load from the config file when present, then apply environment
    /// overrides (N8N_HOST, N8N_PORT, N8N_API_KEY)
    pub fn load() -> Result<Self> {
        let path = Paths::new().config_file();

        let mut config: Self = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid config at {}", path.display()))?
        } else {
            Self::default()
        };

        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(host) = env::var("N8N_HOST") {
            if !host.is_empty() {
                self.host = host;
            }
        }
        if let Ok(port) = env::var("N8N_PORT") {
            if let Ok(port) = port.parse() {
                self.port = port;
            }
        }
        if let Ok(key) = env::var("N8N_API_KEY") {
            if !key.is_empty() {
                self.api_key = Some(key);
            }
        }
    }

    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        format!("{}://{}:{}", scheme, self.host, self.port)
    }

    pub fn api_url(&self) -> String {
        format!("{}/api/v1", self.base_url())
    }

    pub fn health_url(&self) -> String {
        format!("{}/healthz", self.base_url())
    }

    pub fn startup_wait(&self) -> Duration {
        Duration::from_secs(self.startup_wait_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
