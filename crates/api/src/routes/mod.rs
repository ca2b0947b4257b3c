pub mod auth;
pub mod health;
pub mod invitation;
pub mod project;
pub mod status;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree. Everything is mounted at the root.
///
/// ```text
/// /register                                        register (public)
/// /login                                           login (public)
///
/// /statuses                                        list task statuses
///
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete (owner)
/// /projects/{id}/membership                        leave (participant)
/// /projects/{project_id}/tasks                     list, create
/// /projects/{project_id}/tasks/{id}                get, update, delete
/// /projects/{project_id}/invitations               list, create (owner)
///
/// /invitations/{code}/accept                       accept (any user)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(status::router())
        .nest("/projects", project::router())
        .nest("/invitations", invitation::router())
}
