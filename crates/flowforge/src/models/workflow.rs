//! Workflow display records and upstream n8n API models
//!
//! The API models mirror the JSON the n8n REST endpoints return; the
//! display records are what the commands render. Conversion is a plain
//! projection, no validation beyond serde.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row shown by `list-workflows`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSummary {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub node_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Full view shown by `get-workflow`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDetails {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub node_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub nodes: Vec<NodeDefinition>,
}

/// Single node of a workflow definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDefinition {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub node_type: String,
}

/// Envelope returned by GET /api/v1/workflows
#[derive(Debug, Deserialize)]
pub struct WorkflowListResponse {
    #[serde(default)]
    pub data: Vec<ApiWorkflow>,
}

/// Upstream workflow representation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiWorkflow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<ApiTag>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub nodes: Vec<NodeDefinition>,
}

/// n8n emits tag objects; older payloads used bare strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiTag {
    Name(String),
    Object { name: String },
}

impl ApiTag {
    pub fn into_name(self) -> String {
        match self {
            ApiTag::Name(name) => name,
            ApiTag::Object { name } => name,
        }
    }
}

impl From<ApiWorkflow> for WorkflowSummary {
    fn from(api: ApiWorkflow) -> Self {
        Self {
            node_count: api.nodes.len(),
            id: api.id,
            name: api.name,
            active: api.active,
            created_at: api.created_at.unwrap_or(DateTime::UNIX_EPOCH),
            updated_at: api.updated_at.unwrap_or(DateTime::UNIX_EPOCH),
            tags: api.tags.into_iter().map(ApiTag::into_name).collect(),
            description: api.description,
        }
    }
}

impl From<ApiWorkflow> for WorkflowDetails {
    fn from(api: ApiWorkflow) -> Self {
        Self {
            node_count: api.nodes.len(),
            id: api.id,
            name: api.name,
            active: api.active,
            created_at: api.created_at.unwrap_or(DateTime::UNIX_EPOCH),
            updated_at: api.updated_at.unwrap_or(DateTime::UNIX_EPOCH),
            tags: api.tags.into_iter().map(ApiTag::into_name).collect(),
            description: api.description,
            nodes: api.nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORKFLOW_JSON: &str = r#"{
        "id": "wf-1",
        "name": "Sync invoices",
        "active": true,
        "createdAt": "2024-03-01T09:00:00.000Z",
        "updatedAt": "2024-03-05T17:30:00.000Z",
        "tags": [{"name": "billing"}, "internal"],
        "description": "Nightly invoice sync",
        "nodes": [
            {"id": "n1", "name": "Webhook", "type": "n8n-nodes-base.webhook"},
            {"id": "n2", "name": "Set", "type": "n8n-nodes-base.set"}
        ]
    }"#;

    #[test]
    fn test_details_projection() {
        let api: ApiWorkflow = serde_json::from_str(WORKFLOW_JSON).unwrap();
        let details = WorkflowDetails::from(api);

        assert_eq!(details.id, "wf-1");
        assert!(details.active);
        assert_eq!(details.node_count, 2);
        assert_eq!(details.node_count, details.nodes.len());
        assert_eq!(details.tags, vec!["billing", "internal"]);
        assert_eq!(details.nodes[0].node_type, "n8n-nodes-base.webhook");
    }

    #[test]
    fn test_summary_counts_nodes() {
        let api: ApiWorkflow = serde_json::from_str(WORKFLOW_JSON).unwrap();
        let summary = WorkflowSummary::from(api);
        assert_eq!(summary.node_count, 2);
        assert_eq!(summary.description.as_deref(), Some("Nightly invoice sync"));
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let api: ApiWorkflow =
            serde_json::from_str(r#"{"id": "wf-2", "name": "Empty"}"#).unwrap();
        let summary = WorkflowSummary::from(api);

        assert!(!summary.active);
        assert!(summary.tags.is_empty());
        assert_eq!(summary.node_count, 0);
        assert!(summary.description.is_none());
        assert_eq!(summary.created_at, DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_list_envelope() {
        let envelope: WorkflowListResponse =
            serde_json::from_str(&format!(r#"{{"data": [{}]}}"#, WORKFLOW_JSON)).unwrap();
        assert_eq!(envelope.data.len(), 1);

        let empty: WorkflowListResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.data.is_empty());
    }
}
