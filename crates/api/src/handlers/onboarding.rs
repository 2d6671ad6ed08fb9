//! Handler for the onboarding form submission.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use devsecops_core::error::CoreError;
use devsecops_core::onboarding::{self, OnboardingSubmission};
use devsecops_db::repositories::OnboardingRepo;

use crate::error::AppResult;
use crate::response::OnboardResponse;
use crate::state::AppState;

/// POST /onboarding
///
/// Validates the submitted project fields, then persists the project and
/// its secret requirements in a single transaction. Validation problems
/// are reported together and nothing is written; a secret name collision
/// surfaces as 409 with the whole submission rolled back.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<OnboardingSubmission>,
) -> AppResult<(StatusCode, Json<OnboardResponse>)> {
    let new_project = onboarding::validate(&input).map_err(CoreError::Validation)?;

    let project_id = OnboardingRepo::onboard(&state.pool, &new_project).await?;

    tracing::info!(
        project_id,
        project_name = %new_project.project_name,
        secrets = 5 + new_project.custom_secrets.len(),
        "Project onboarded"
    );

    Ok((
        StatusCode::CREATED,
        Json(OnboardResponse {
            success: true,
            message: "Project onboarded successfully and configuration generated.".to_string(),
            project_id,
        }),
    ))
}
