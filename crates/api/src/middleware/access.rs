//! Per-request project access checks.
//!
//! The caller's `project_roles` row is loaded fresh for every request and
//! run through [`taskboard_core::access::authorize`]; nothing is cached.

use taskboard_core::access::{authorize, ProjectAction};
use taskboard_core::roles::MemberRole;
use taskboard_core::types::DbId;
use taskboard_db::repositories::ProjectRoleRepo;
use taskboard_db::DbPool;

use crate::error::AppResult;

/// Ensure `user_id` may perform `action` on `project_id`.
///
/// Returns the caller's role on success. A caller without a role gets 404,
/// a participant attempting an owner-only action gets 403.
pub async fn require_project_access(
    pool: &DbPool,
    user_id: DbId,
    project_id: DbId,
    action: ProjectAction,
) -> AppResult<MemberRole> {
    let role = ProjectRoleRepo::find(pool, user_id, project_id)
        .await?
        .map(|row| row.member_role())
        .transpose()?;

    let role = authorize(project_id, role, action).inspect_err(|e| {
        tracing::debug!(user_id, project_id, action = action.as_str(), error = %e, "Project access denied");
    })?;
    Ok(role)
}
