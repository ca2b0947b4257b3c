//! Handlers for the `/projects` resource and project membership.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use taskboard_core::access::ProjectAction;
use taskboard_core::error::CoreError;
use taskboard_core::roles::MemberRole;
use taskboard_core::types::DbId;
use taskboard_core::validation::validate_project_name;
use taskboard_db::models::project::{CreateProject, Project, ProjectWithRole, UpdateProject};
use taskboard_db::repositories::{ProjectRepo, ProjectRoleRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam};
use crate::middleware::access::require_project_access;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /projects`.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub project_name: String,
}

/// A project as seen by one member.
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    #[serde(flatten)]
    pub project: Project,
    pub role: MemberRole,
}

/// `GET /projects/{id}` payload: the project plus who belongs to it.
#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub role: MemberRole,
    /// User ids of all members, owner first.
    pub member_ids: Vec<DbId>,
}

/// POST /projects
///
/// The caller becomes the project's owner.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateProjectRequest>,
) -> AppResult<Json<ProjectResponse>> {
    validate_project_name(&input.project_name)?;
    ensure_name_free(&state, &input.project_name).await?;

    let create = CreateProject {
        name: input.project_name,
    };
    let (project, owner) = ProjectRepo::create_with_owner(&state.pool, &create, auth.user_id).await?;

    tracing::info!(project_id = project.id, user_id = auth.user_id, "Project created");

    Ok(Json(ProjectResponse {
        project,
        role: owner.member_role()?,
    }))
}

/// GET /projects
///
/// Every project the caller holds a role in.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProjectWithRole>>> {
    let projects = ProjectRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(projects))
}

/// GET /projects/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<ProjectDetail>> {
    let role = require_project_access(&state.pool, auth.user_id, id, ProjectAction::ViewProject).await?;
    let project = find_project(&state, id).await?;
    let member_ids = ProjectRoleRepo::list_by_project(&state.pool, id)
        .await?
        .into_iter()
        .map(|member| member.user_id)
        .collect();

    Ok(Json(ProjectDetail {
        project,
        role,
        member_ids,
    }))
}

/// PUT /projects/{id}
///
/// Owner only. Omitted fields keep their current value.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<UpdateProject>,
) -> AppResult<Json<ProjectResponse>> {
    let role =
        require_project_access(&state.pool, auth.user_id, id, ProjectAction::RenameProject).await?;

    if let Some(name) = &input.name {
        validate_project_name(name)?;
        if let Some(existing) = ProjectRepo::find_by_name(&state.pool, name).await? {
            if existing.id != id {
                return Err(name_taken(name));
            }
        }
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    tracing::info!(project_id = id, user_id = auth.user_id, "Project updated");

    Ok(Json(ProjectResponse { project, role }))
}

/// DELETE /projects/{id}
///
/// Owner only. Deletes the project itself; memberships, tasks and invitations
/// go with it. This route does not remove the caller's membership: a
/// participant who wants out uses `DELETE /projects/{id}/membership`
/// ([`leave`]).
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    require_project_access(&state.pool, auth.user_id, id, ProjectAction::DeleteProject).await?;

    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }

    tracing::info!(project_id = id, user_id = auth.user_id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /projects/{id}/membership
///
/// The caller leaves the project. Owners get 409.
pub async fn leave(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    require_project_access(&state.pool, auth.user_id, id, ProjectAction::LeaveProject).await?;

    if !ProjectRoleRepo::delete(&state.pool, auth.user_id, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }

    tracing::info!(project_id = id, user_id = auth.user_id, "User left project");
    Ok(StatusCode::NO_CONTENT)
}

async fn find_project(state: &AppState, id: DbId) -> AppResult<Project> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
}

async fn ensure_name_free(state: &AppState, name: &str) -> AppResult<()> {
    match ProjectRepo::find_by_name(&state.pool, name).await? {
        Some(_) => Err(name_taken(name)),
        None => Ok(()),
    }
}

fn name_taken(name: &str) -> AppError {
    AppError::Core(CoreError::Conflict(format!(
        "A project named '{name}' already exists"
    )))
}
