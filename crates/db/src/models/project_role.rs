//! Project membership (join-table) model.

use serde::Serialize;
use sqlx::FromRow;
use taskboard_core::error::CoreError;
use taskboard_core::roles::MemberRole;
use taskboard_core::types::{DbId, Timestamp};

/// A row from the `project_roles` table: one user's role in one project.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectRole {
    pub id: DbId,
    pub user_id: DbId,
    pub project_id: DbId,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProjectRole {
    /// Parse the stored role string.
    pub fn member_role(&self) -> Result<MemberRole, CoreError> {
        self.role.parse()
    }
}
