//! Repository for the `invitations` table.

use sqlx::PgPool;
use taskboard_core::roles::ROLE_PARTICIPANT;
use taskboard_core::types::DbId;

use crate::models::invitation::{CreateInvitation, Invitation};
use crate::models::project_role::ProjectRole;
use crate::repositories::ProjectRoleRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, code, inviter_id, project_id, expires_at, accepted_by, accepted_at, \
                       created_at, updated_at";

/// Provides CRUD operations for project invitations.
pub struct InvitationRepo;

impl InvitationRepo {
    /// Insert a new invitation, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInvitation,
    ) -> Result<Invitation, sqlx::Error> {
        let query = format!(
            "INSERT INTO invitations (code, inviter_id, project_id, expires_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invitation>(&query)
            .bind(&input.code)
            .bind(input.inviter_id)
            .bind(input.project_id)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find an invitation by its code.
    pub async fn find_by_code(
        pool: &PgPool,
        code: &str,
    ) -> Result<Option<Invitation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invitations WHERE code = $1");
        sqlx::query_as::<_, Invitation>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// List a project's invitations, newest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Invitation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM invitations WHERE project_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Invitation>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Mark an invitation as used by `user_id` and add them to the project as
    /// a participant, in one transaction.
    ///
    /// The invitation is only claimed if it is still unused and unexpired;
    /// otherwise `None` is returned and nothing is written.
    pub async fn accept(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<ProjectRole>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let claimed: Option<(DbId,)> = sqlx::query_as(
            "UPDATE invitations SET accepted_by = $2, accepted_at = NOW()
             WHERE id = $1 AND accepted_at IS NULL AND expires_at > NOW()
             RETURNING project_id",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((project_id,)) = claimed else {
            tx.rollback().await?;
            return Ok(None);
        };

        let role =
            ProjectRoleRepo::insert_inner(&mut tx, user_id, project_id, ROLE_PARTICIPANT).await?;

        tx.commit().await?;
        Ok(Some(role))
    }
}
