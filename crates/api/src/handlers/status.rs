use axum::extract::State;
use axum::Json;
use taskboard_db::models::status::TaskStatusRow;
use taskboard_db::repositories::TaskStatusRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /statuses
pub async fn list(_auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<TaskStatusRow>>> {
    let statuses = TaskStatusRepo::list(&state.pool).await?;
    Ok(Json(statuses))
}
