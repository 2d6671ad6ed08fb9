pub mod health;
pub mod onboarding;
pub mod projects;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (everything except `/health`).
///
/// ```text
/// POST /onboarding             submit a project for onboarding
/// GET  /api/projects           list onboarded projects
/// GET  /api/projects/{id}      project detail with secrets
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(onboarding::router())
        .nest("/api/projects", projects::router())
}
