//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::types::{DbId, Timestamp};

use crate::models::status::StatusId;

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    pub status_id: StatusId,
    pub name: String,
    pub description: String,
    pub creation_date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task.
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub project_id: DbId,
    pub name: String,
    pub description: String,
    /// Defaults to 1 (Todo) if omitted.
    pub status_id: Option<StatusId>,
}

/// DTO for updating an existing task. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTask {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "status")]
    pub status_id: Option<StatusId>,
}
