//! Repository for the `project_roles` membership table.

use sqlx::{PgPool, Postgres, Transaction};
use taskboard_core::types::DbId;

use crate::models::project_role::ProjectRole;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, project_id, role, created_at, updated_at";

/// Provides membership lookups and mutations.
pub struct ProjectRoleRepo;

impl ProjectRoleRepo {
    /// Find the membership row for a (user, project) pair.
    ///
    /// This is the lookup every project and task handler performs before
    /// acting; `None` means the user has no access.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        project_id: DbId,
    ) -> Result<Option<ProjectRole>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_roles WHERE user_id = $1 AND project_id = $2"
        );
        sqlx::query_as::<_, ProjectRole>(&query)
            .bind(user_id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// List every membership of a project, owner first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectRole>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_roles
             WHERE project_id = $1
             ORDER BY (role = 'owner') DESC, id ASC"
        );
        sqlx::query_as::<_, ProjectRole>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Remove a user's membership. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, project_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_roles WHERE user_id = $1 AND project_id = $2")
            .bind(user_id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert a membership row inside an existing transaction.
    pub(crate) async fn insert_inner(
        tx: &mut Transaction<'_, Postgres>,
        user_id: DbId,
        project_id: DbId,
        role: &str,
    ) -> Result<ProjectRole, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_roles (user_id, project_id, role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectRole>(&query)
            .bind(user_id)
            .bind(project_id)
            .bind(role)
            .fetch_one(&mut **tx)
            .await
    }
}
