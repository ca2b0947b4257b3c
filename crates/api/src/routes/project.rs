//! Route definitions for the `/projects` resource.
//!
//! Also nests task and invitation routes under `/projects/{project_id}/...`.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{invitation, project, task};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{project_id}                      -> get_by_id
/// PUT    /{project_id}                      -> update
/// DELETE /{project_id}                      -> delete
/// DELETE /{project_id}/membership           -> leave
///
/// GET    /{project_id}/tasks                -> list_by_project
/// POST   /{project_id}/tasks                -> create
/// GET    /{project_id}/tasks/{id}           -> get_by_id
/// PUT    /{project_id}/tasks/{id}           -> update
/// DELETE /{project_id}/tasks/{id}           -> delete
///
/// GET    /{project_id}/invitations          -> list_by_project
/// POST   /{project_id}/invitations          -> create
/// ```
pub fn router() -> Router<AppState> {
    let task_routes = Router::new()
        .route("/", get(task::list_by_project).post(task::create))
        .route(
            "/{id}",
            get(task::get_by_id).put(task::update).delete(task::delete),
        );

    let invitation_routes = Router::new().route(
        "/",
        get(invitation::list_by_project).post(invitation::create),
    );

    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{project_id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{project_id}/membership", delete(project::leave))
        .nest("/{project_id}/tasks", task_routes)
        .nest("/{project_id}/invitations", invitation_routes)
}
