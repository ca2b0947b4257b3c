//! Handlers for tasks nested under `/projects/{project_id}/tasks`.
//!
//! Owners and participants have the same task rights; non-members get 404.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use taskboard_core::access::ProjectAction;
use taskboard_core::error::CoreError;
use taskboard_core::types::DbId;
use taskboard_core::validation::{validate_task_description, validate_task_name};
use taskboard_db::models::status::StatusId;
use taskboard_db::models::task::{CreateTask, Task, UpdateTask};
use taskboard_db::repositories::{TaskRepo, TaskStatusRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam};
use crate::middleware::access::require_project_access;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /projects/{project_id}/tasks`.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub task_name: String,
    #[serde(default)]
    pub description: String,
    /// Starting status; new tasks are `todo` when omitted.
    #[serde(default)]
    pub status: Option<StatusId>,
}

/// POST /projects/{project_id}/tasks
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParam(project_id): PathParam<DbId>,
    JsonBody(input): JsonBody<CreateTaskRequest>,
) -> AppResult<Json<Task>> {
    require_project_access(&state.pool, auth.user_id, project_id, ProjectAction::WriteTasks)
        .await?;

    validate_task_name(&input.task_name)?;
    validate_task_description(&input.description)?;
    if let Some(status) = input.status {
        ensure_status_exists(&state, status).await?;
    }

    let task = TaskRepo::create(
        &state.pool,
        &CreateTask {
            project_id,
            name: input.task_name,
            description: input.description,
            status_id: input.status,
        },
    )
    .await?;

    tracing::info!(task_id = task.id, project_id, user_id = auth.user_id, "Task created");
    Ok(Json(task))
}

/// GET /projects/{project_id}/tasks
pub async fn list_by_project(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParam(project_id): PathParam<DbId>,
) -> AppResult<Json<Vec<Task>>> {
    require_project_access(&state.pool, auth.user_id, project_id, ProjectAction::ReadTasks).await?;
    let tasks = TaskRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(tasks))
}

/// GET /projects/{project_id}/tasks/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParam((project_id, id)): PathParam<(DbId, DbId)>,
) -> AppResult<Json<Task>> {
    require_project_access(&state.pool, auth.user_id, project_id, ProjectAction::ReadTasks).await?;
    let task = TaskRepo::find_by_id(&state.pool, project_id, id)
        .await?
        .ok_or(task_not_found(id))?;
    Ok(Json(task))
}

/// PUT /projects/{project_id}/tasks/{id}
///
/// Omitted fields keep their current value. `status` must name an existing
/// status id.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParam((project_id, id)): PathParam<(DbId, DbId)>,
    JsonBody(input): JsonBody<UpdateTask>,
) -> AppResult<Json<Task>> {
    require_project_access(&state.pool, auth.user_id, project_id, ProjectAction::WriteTasks)
        .await?;

    if let Some(name) = &input.name {
        validate_task_name(name)?;
    }
    if let Some(description) = &input.description {
        validate_task_description(description)?;
    }
    if let Some(status) = input.status_id {
        ensure_status_exists(&state, status).await?;
    }

    let task = TaskRepo::update(&state.pool, project_id, id, &input)
        .await?
        .ok_or(task_not_found(id))?;

    tracing::info!(task_id = id, project_id, user_id = auth.user_id, "Task updated");
    Ok(Json(task))
}

/// DELETE /projects/{project_id}/tasks/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParam((project_id, id)): PathParam<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    require_project_access(&state.pool, auth.user_id, project_id, ProjectAction::WriteTasks)
        .await?;

    if !TaskRepo::delete(&state.pool, project_id, id).await? {
        return Err(task_not_found(id));
    }

    tracing::info!(task_id = id, project_id, user_id = auth.user_id, "Task deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn ensure_status_exists(state: &AppState, status: StatusId) -> AppResult<()> {
    if TaskStatusRepo::exists(&state.pool, status).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(format!(
            "Unknown task status: {status}"
        ))))
    }
}

fn task_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Task", id })
}
