//! Repository for the `project_secrets` table.

use devsecops_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::secret::ProjectSecret;

/// Read operations for project secret requirements.
pub struct SecretRepo;

impl SecretRepo {
    /// Secrets for a project, ordered by name for stable display.
    pub async fn list_for_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Vec<ProjectSecret>, sqlx::Error> {
        sqlx::query_as::<_, ProjectSecret>(
            "SELECT id, secret_name, secret_description, is_required
             FROM project_secrets
             WHERE project_id = $1
             ORDER BY secret_name",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }
}
