//! Transactional write path for project onboarding.

use devsecops_core::onboarding::{self, NewProject};
use devsecops_core::types::DbId;
use sqlx::{Sqlite, SqlitePool, Transaction};

/// Persists a validated onboarding submission.
pub struct OnboardingRepo;

impl OnboardingRepo {
    /// Insert the project row plus its secret requirements (five standard
    /// plus any custom) in a single transaction, returning the new project
    /// id.
    ///
    /// A failure on any insert, including a `(project_id, secret_name)`
    /// uniqueness violation, rolls back the whole submission: the project
    /// row never outlives its secret set.
    pub async fn onboard(pool: &SqlitePool, input: &NewProject) -> Result<DbId, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let project_id: DbId = sqlx::query_scalar(
            "INSERT INTO onboarded_projects (
                project_name, repository_url, main_branch, node_version,
                docker_file_path, build_command, test_command, port_number,
                staging_server_address, sonar_project_key, sonar_organization,
                notification_endpoint
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING id",
        )
        .bind(&input.project_name)
        .bind(&input.repository_url)
        .bind(&input.main_branch)
        .bind(&input.node_version)
        .bind(&input.docker_file_path)
        .bind(&input.build_command)
        .bind(&input.test_command)
        .bind(i64::from(input.port_number))
        .bind(&input.staging_server_address)
        .bind(&input.sonar_project_key)
        .bind(&input.sonar_organization)
        .bind(&input.notification_endpoint)
        .fetch_one(&mut *tx)
        .await?;

        let standard = onboarding::standard_secrets(
            &input.staging_server_address,
            input.notification_endpoint.is_some(),
        );
        for secret in &standard {
            Self::insert_secret(&mut tx, project_id, secret.name, &secret.description, secret.required)
                .await?;
        }

        for secret in &input.custom_secrets {
            Self::insert_secret(&mut tx, project_id, &secret.name, &secret.description, false)
                .await?;
        }

        tx.commit().await?;
        Ok(project_id)
    }

    async fn insert_secret(
        tx: &mut Transaction<'_, Sqlite>,
        project_id: DbId,
        name: &str,
        description: &str,
        required: bool,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO project_secrets (project_id, secret_name, secret_description, is_required)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(project_id)
        .bind(name)
        .bind(description)
        .bind(required)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
