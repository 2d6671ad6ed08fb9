//! Route definition for the onboarding submission endpoint.

use axum::routing::post;
use axum::Router;

use crate::handlers::onboarding;
use crate::state::AppState;

/// Routes mounted at the application root.
///
/// ```text
/// POST /onboarding -> submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/onboarding", post(onboarding::submit))
}
