//! Repository for the `onboarded_projects` table.

use devsecops_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::project::{OnboardedProject, ProjectSummary, ProjectWithSecrets};
use crate::repositories::SecretRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, project_name, repository_url, main_branch, node_version, \
    docker_file_path, build_command, test_command, port_number, \
    staging_server_address, sonar_project_key, sonar_organization, \
    notification_endpoint, created_at, updated_at";

/// Read operations for onboarded projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// List all projects, most recently created first.
    ///
    /// `id` is the tiebreak: `created_at` has one-second resolution, so
    /// rows inserted in the same second would otherwise order arbitrarily.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<ProjectSummary>, sqlx::Error> {
        sqlx::query_as::<_, ProjectSummary>(
            "SELECT id, project_name, repository_url, created_at
             FROM onboarded_projects
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<OnboardedProject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM onboarded_projects WHERE id = $1");
        sqlx::query_as::<_, OnboardedProject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by ID, enriched with its secret requirements.
    pub async fn find_with_secrets(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<ProjectWithSecrets>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(project) => {
                let secrets = SecretRepo::list_for_project(pool, project.id).await?;
                Ok(Some(ProjectWithSecrets { project, secrets }))
            }
            None => Ok(None),
        }
    }

    /// Delete a project by ID. Returns `true` if a row was removed; the
    /// FK cascade removes its secrets.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM onboarded_projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
