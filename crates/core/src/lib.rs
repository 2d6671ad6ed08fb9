//! Domain logic for the DevSecOps onboarding service.
//!
//! Pure functions and types with no I/O: the submission validator,
//! default/derivation rules, and the shared error taxonomy. The `db`
//! and `api` crates build on these.

pub mod error;
pub mod onboarding;
pub mod types;
