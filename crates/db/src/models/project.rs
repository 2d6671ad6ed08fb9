//! Onboarded project entity model and read projections.

use devsecops_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::secret::ProjectSecret;

/// A row from the `onboarded_projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OnboardedProject {
    pub id: DbId,
    pub project_name: String,
    pub repository_url: String,
    pub main_branch: String,
    pub node_version: String,
    pub docker_file_path: String,
    pub build_command: String,
    pub test_command: String,
    pub port_number: i64,
    pub staging_server_address: String,
    pub sonar_project_key: String,
    pub sonar_organization: String,
    pub notification_endpoint: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// List-view projection: only the fields shown in the project index.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectSummary {
    pub id: DbId,
    pub project_name: String,
    pub repository_url: String,
    pub created_at: Timestamp,
}

/// A project enriched with its secret requirements for the detail view.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithSecrets {
    #[serde(flatten)]
    pub project: OnboardedProject,
    pub secrets: Vec<ProjectSecret>,
}
