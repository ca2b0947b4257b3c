use axum::routing::post;
use axum::Router;

use crate::handlers::invitation;
use crate::state::AppState;

/// Routes mounted at `/invitations`.
///
/// ```text
/// POST /{code}/accept -> accept
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{code}/accept", post(invitation::accept))
}
