//! HTTP client for the n8n REST API

use reqwest::{Client, StatusCode};
use tracing::debug;

use flowforge_core::N8nConfig;

use crate::errors::FlowForgeError;
use crate::models::workflow::{
    ApiWorkflow, WorkflowDetails, WorkflowListResponse, WorkflowSummary,
};

/// Header n8n expects the API key in
const API_KEY_HEADER: &str = "X-N8N-API-KEY";

/// HTTP client for a single n8n instance
pub struct N8nClient {
    client: Client,
    base_url: String,
    api_url: String,
    health_url: String,
    api_key: Option<String>,
}

impl N8nClient {
    pub fn new(config: &N8nConfig) -> Result<Self, FlowForgeError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url(),
            api_url: config.api_url(),
            health_url: config.health_url(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        debug!("GET {}", url);
        let mut request = self.client.get(url);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }
        request
    }

    /// Single liveness probe; any 2xx counts as healthy
    pub async fn check_health(&self) -> bool {
        match self.get(&self.health_url).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                debug!("health probe failed: {}", err);
                false
            }
        }
    }

    /// One-line health message distinguishing the failure modes
    pub async fn health_details(&self) -> String {
        match self.get(&self.health_url).send().await {
            Ok(response) if response.status().is_success() => {
                "n8n is running and responding".to_string()
            }
            Ok(response) => status_message(response.status()),
            Err(err) => error_message(&err),
        }
    }

    pub async fn list_workflows(&self) -> Result<Vec<WorkflowSummary>, FlowForgeError> {
        let url = format!("{}/workflows", self.api_url);
        let response = self.get(&url).send().await?.error_for_status()?;
        let envelope: WorkflowListResponse = response.json().await?;
        Ok(envelope.data.into_iter().map(WorkflowSummary::from).collect())
    }

    pub async fn get_workflow(&self, id: &str) -> Result<WorkflowDetails, FlowForgeError> {
        let url = format!("{}/workflows/{}", self.api_url, id);
        let response = self.get(&url).send().await?.error_for_status()?;
        let workflow: ApiWorkflow = response.json().await?;
        Ok(WorkflowDetails::from(workflow))
    }
}

fn status_message(status: StatusCode) -> String {
    format!("n8n responded with status: {}", status)
}

fn error_message(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "Health check request timed out".to_string()
    } else if err.is_connect() {
        format!("Connection failed: {}", err)
    } else {
        format!("Unexpected error: {}", err)
    }
}
