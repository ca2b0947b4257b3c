use axum::routing::get;
use axum::Router;

use crate::handlers::status;
use crate::state::AppState;

/// `GET /statuses -> list`
pub fn router() -> Router<AppState> {
    Router::new().route("/statuses", get(status::list))
}
