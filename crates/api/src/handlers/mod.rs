//! Request handlers.
//!
//! Handlers validate input via `devsecops-core`, delegate persistence to
//! the repositories in `devsecops-db`, and map errors via [`crate::error::AppError`].

pub mod onboarding;
pub mod projects;
