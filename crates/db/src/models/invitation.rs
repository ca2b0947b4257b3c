//! Project invitation model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use taskboard_core::types::{DbId, Timestamp};

/// An invitation row from the `invitations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Invitation {
    pub id: DbId,
    pub code: String,
    pub inviter_id: DbId,
    pub project_id: DbId,
    pub expires_at: Timestamp,
    pub accepted_by: Option<DbId>,
    pub accepted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new invitation.
#[derive(Debug, Clone)]
pub struct CreateInvitation {
    pub code: String,
    pub inviter_id: DbId,
    pub project_id: DbId,
    pub expires_at: Timestamp,
}
