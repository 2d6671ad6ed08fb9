//! Handlers for the read-only `/api/projects` resource.

use axum::extract::{Path, State};
use axum::Json;

use devsecops_core::error::CoreError;
use devsecops_core::types::DbId;
use devsecops_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::response::{ProjectDetailResponse, ProjectListResponse};
use crate::state::AppState;

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ProjectListResponse>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(ProjectListResponse {
        success: true,
        projects,
    }))
}

/// GET /api/projects/{id}
///
/// The identifier arrives as a raw path segment so a non-integer value is
/// answered with a 400 in the API's envelope rather than axum's default
/// path rejection.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProjectDetailResponse>> {
    let id: DbId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid project ID.".to_string()))?;

    let project = ProjectRepo::find_with_secrets(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    Ok(Json(ProjectDetailResponse {
        success: true,
        project,
    }))
}
