//! Repository for the `projects` table.

use sqlx::PgPool;
use taskboard_core::roles::ROLE_OWNER;
use taskboard_core::types::DbId;

use crate::models::project::{CreateProject, Project, ProjectWithRole, UpdateProject};
use crate::models::project_role::ProjectRole;
use crate::repositories::ProjectRoleRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project together with its owner's membership row.
    ///
    /// Both rows are written in one transaction so a project never exists
    /// without an owner.
    pub async fn create_with_owner(
        pool: &PgPool,
        input: &CreateProject,
        owner_id: DbId,
    ) -> Result<(Project, ProjectRole), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO projects (name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .fetch_one(&mut *tx)
            .await?;

        let role = ProjectRoleRepo::insert_inner(&mut tx, owner_id, project.id, ROLE_OWNER).await?;

        tx.commit().await?;
        Ok((project, role))
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by its unique name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE name = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List the projects a user belongs to, with the user's role in each.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ProjectWithRole>, sqlx::Error> {
        sqlx::query_as::<_, ProjectWithRole>(
            "SELECT p.id, p.name, r.role, p.created_at, p.updated_at
             FROM projects p
             JOIN project_roles r ON r.project_id = p.id
             WHERE r.user_id = $1
             ORDER BY p.created_at DESC, p.id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project. Memberships, tasks and invitations go
    /// with it via `ON DELETE CASCADE`. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
