//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument.

pub mod onboarding_repo;
pub mod project_repo;
pub mod secret_repo;

pub use onboarding_repo::OnboardingRepo;
pub use project_repo::ProjectRepo;
pub use secret_repo::SecretRepo;
