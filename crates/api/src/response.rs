//! Response envelope types matching the public API contract.
//!
//! Every success body carries `success: true`; error envelopes are built
//! by [`crate::error::AppError`]. Typed structs instead of ad-hoc
//! `serde_json::json!` keep the shapes compile-checked.

use devsecops_core::types::DbId;
use devsecops_db::models::project::{ProjectSummary, ProjectWithSecrets};
use serde::Serialize;

/// Body of a successful `POST /onboarding`.
#[derive(Debug, Serialize)]
pub struct OnboardResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "projectId")]
    pub project_id: DbId,
}

/// Body of `GET /api/projects`.
#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub success: bool,
    pub projects: Vec<ProjectSummary>,
}

/// Body of `GET /api/projects/{id}`.
#[derive(Debug, Serialize)]
pub struct ProjectDetailResponse {
    pub success: bool,
    pub project: ProjectWithSecrets,
}
