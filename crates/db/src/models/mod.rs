//! Row models and projections.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching a
//! database row or a read projection over one.

pub mod project;
pub mod secret;
