//! Health checking service

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::client::N8nClient;

/// Outcome of a single health probe
#[derive(Debug, Clone, Serialize)]
pub struct HealthResult {
    pub healthy: bool,
    pub message: String,
    pub issues: Vec<String>,
}

/// Health probing seam for the command layer
#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn check(&self) -> HealthResult;
}

/// Probes the n8n health endpoint
pub struct HealthChecker {
    client: N8nClient,
}

impl HealthChecker {
    pub fn new(client: N8nClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HealthCheck for HealthChecker {
    async fn check(&self) -> HealthResult {
        let healthy = self.client.check_health().await;
        let message = self.client.health_details().await;
        debug!("health check: healthy={} ({})", healthy, message);

        let issues = if healthy {
            Vec::new()
        } else {
            vec![message.clone()]
        };

        HealthResult {
            healthy,
            message,
            issues,
        }
    }
}

/// Fixed-outcome health check, for command-layer tests
#[cfg(test)]
pub struct StaticHealth(pub bool);

#[cfg(test)]
#[async_trait]
impl HealthCheck for StaticHealth {
    async fn check(&self) -> HealthResult {
        if self.0 {
            HealthResult {
                healthy: true,
                message: "n8n is running and responding".to_string(),
                issues: Vec::new(),
            }
        } else {
            HealthResult {
                healthy: false,
                message: "Connection failed: refused".to_string(),
                issues: vec!["Connection failed: refused".to_string()],
            }
        }
    }
}
