//! Repository for the `task_statuses` lookup table.

use sqlx::PgPool;

use crate::models::status::{StatusId, TaskStatusRow};

const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Read-only access to the seeded task statuses.
pub struct TaskStatusRepo;

impl TaskStatusRepo {
    /// List all statuses in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<TaskStatusRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM task_statuses ORDER BY id");
        sqlx::query_as::<_, TaskStatusRow>(&query).fetch_all(pool).await
    }

    /// Returns `true` if a status with the given id exists.
    pub async fn exists(pool: &PgPool, id: StatusId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM task_statuses WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }
}
