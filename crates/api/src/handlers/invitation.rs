//! Handlers for project invitations.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use taskboard_core::access::ProjectAction;
use taskboard_core::error::CoreError;
use taskboard_core::invitation::{ensure_acceptable, expiry_from, generate_code};
use taskboard_core::types::DbId;
use taskboard_db::models::invitation::{CreateInvitation, Invitation};
use taskboard_db::models::project_role::ProjectRole;
use taskboard_db::repositories::{InvitationRepo, ProjectRoleRepo};

use crate::error::{AppError, AppResult};
use crate::extract::PathParam;
use crate::middleware::access::require_project_access;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /projects/{project_id}/invitations
///
/// Owner only. The returned `code` is what the invitee passes to
/// `POST /invitations/{code}/accept`.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParam(project_id): PathParam<DbId>,
) -> AppResult<(StatusCode, Json<Invitation>)> {
    require_project_access(
        &state.pool,
        auth.user_id,
        project_id,
        ProjectAction::InviteMembers,
    )
    .await?;

    let input = CreateInvitation {
        code: generate_code(),
        inviter_id: auth.user_id,
        project_id,
        expires_at: expiry_from(Utc::now(), state.config.invitation_ttl_hours)?,
    };
    let invitation = InvitationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        invitation_id = invitation.id,
        project_id,
        user_id = auth.user_id,
        "Invitation created"
    );
    Ok((StatusCode::CREATED, Json(invitation)))
}

/// GET /projects/{project_id}/invitations
pub async fn list_by_project(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParam(project_id): PathParam<DbId>,
) -> AppResult<Json<Vec<Invitation>>> {
    require_project_access(
        &state.pool,
        auth.user_id,
        project_id,
        ProjectAction::InviteMembers,
    )
    .await?;
    let invitations = InvitationRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(invitations))
}

/// POST /invitations/{code}/accept
///
/// Any authenticated user may accept; they join as a participant.
pub async fn accept(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParam(code): PathParam<String>,
) -> AppResult<Json<ProjectRole>> {
    let invitation = InvitationRepo::find_by_code(&state.pool, &code)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Invitation",
                key: code.clone(),
            })
        })?;

    ensure_acceptable(invitation.expires_at, invitation.accepted_at, Utc::now())?;

    if ProjectRoleRepo::find(&state.pool, auth.user_id, invitation.project_id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "You are already a member of this project".into(),
        )));
    }

    // The repository re-checks usability inside its transaction, so a
    // concurrent accept of the same code lands here as `None`.
    let membership = InvitationRepo::accept(&state.pool, invitation.id, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "Invitation has already been used".into(),
            ))
        })?;

    tracing::info!(
        invitation_id = invitation.id,
        project_id = invitation.project_id,
        user_id = auth.user_id,
        "Invitation accepted"
    );
    Ok(Json(membership))
}
