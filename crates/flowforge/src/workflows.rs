//! Workflow retrieval service
//!
//! Client failures (HTTP error, timeout, malformed JSON) are caught
//! here and converted into failure results; no partial results.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::client::N8nClient;
use crate::models::workflow::{WorkflowDetails, WorkflowSummary};

#[derive(Debug, Serialize)]
pub struct WorkflowListResult {
    pub success: bool,
    pub workflows: Vec<WorkflowSummary>,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WorkflowDetailsResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow: Option<WorkflowDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Read-only access to the workflows the server knows about
pub struct WorkflowService {
    client: N8nClient,
}

impl WorkflowService {
    pub fn new(client: N8nClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> WorkflowListResult {
        debug!("retrieving workflows");

        match self.client.list_workflows().await {
            Ok(workflows) => {
                info!("retrieved {} workflows", workflows.len());
                WorkflowListResult {
                    success: true,
                    total: workflows.len(),
                    workflows,
                    error: None,
                }
            }
            Err(err) => {
                warn!("failed to retrieve workflows: {}", err);
                WorkflowListResult {
                    success: false,
                    workflows: Vec::new(),
                    total: 0,
                    error: Some(format!("Failed to retrieve workflows: {}", err)),
                }
            }
        }
    }

    pub async fn get(&self, id: &str) -> WorkflowDetailsResult {
        debug!("retrieving workflow {}", id);

        match self.client.get_workflow(id).await {
            Ok(workflow) => {
                info!("retrieved workflow {}", id);
                WorkflowDetailsResult {
                    success: true,
                    workflow: Some(workflow),
                    error: None,
                }
            }
            Err(err) => {
                warn!("failed to retrieve workflow {}: {}", id, err);
                WorkflowDetailsResult {
                    success: false,
                    workflow: None,
                    error: Some(format!("Failed to retrieve workflow: {}", err)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowforge_core::N8nConfig;

    #[tokio::test]
    async fn test_unreachable_server_yields_failure_result() {
        let config = N8nConfig {
            port: 1,
            request_timeout_secs: 2,
            ..N8nConfig::default()
        };
        let service = WorkflowService::new(N8nClient::new(&config).unwrap());

        let listed = service.list().await;
        assert!(!listed.success);
        assert!(listed.workflows.is_empty());
        assert_eq!(listed.total, 0);
        assert!(listed
            .error
            .as_deref()
            .unwrap()
            .starts_with("Failed to retrieve workflows:"));

        let fetched = service.get("wf-1").await;
        assert!(!fetched.success);
        assert!(fetched.workflow.is_none());
        assert!(fetched
            .error
            .as_deref()
            .unwrap()
            .starts_with("Failed to retrieve workflow:"));
    }
}
