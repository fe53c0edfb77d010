use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMeta {
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// SBOM project. The API serves these from its `products` collection.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Project {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub meta: ProjectMeta,
}

impl Project {
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.meta.updated_at.or(self.meta.created_at)
    }
}

/// Envelope of `GET /products`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ProductsResponse {
    #[serde(default)]
    pub products: Vec<Project>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

/// Body of `POST /products/add`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbom: Option<serde_json::Value>,
}

/// Outcome of a failed create/delete action, shown inline in the UI.
#[derive(Clone, PartialEq, Debug)]
pub struct ActionError {
    pub status: String,
    pub message: String,
}

impl From<ApiError> for ActionError {
    fn from(err: ApiError) -> Self {
        let status = match &err {
            ApiError::Http { status, status_text, .. } => format!("{status} {status_text}"),
            ApiError::Network { .. } => "Network error".to_string(),
            ApiError::Aborted { .. } => "Cancelled".to_string(),
            ApiError::Parse { .. } | ApiError::Serialize { .. } => "Error".to_string(),
        };
        Self {
            status: status.trim().to_string(),
            message: err.to_string(),
        }
    }
}
