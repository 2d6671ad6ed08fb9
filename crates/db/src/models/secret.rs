//! Project secret requirement model.

use devsecops_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `project_secrets` table, as exposed in the detail view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectSecret {
    pub id: DbId,
    pub secret_name: String,
    pub secret_description: String,
    pub is_required: bool,
}
