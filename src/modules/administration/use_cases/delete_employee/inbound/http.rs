use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::shell::state::AppState;

/// Deleting an id that does not exist still answers 200. A path segment that is not a UUID
/// matches no employee route at all and answers 404.
pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> impl IntoResponse {
    let Ok(Path(id)) = id else {
        return StatusCode::NOT_FOUND.into_response();
    };
    match state.employees.delete_by_id(id).await {
        Ok(()) => {
            tracing::info!(employee_id = %id, "employee deleted");
            StatusCode::OK.into_response()
        }
        Err(e) => {
            tracing::warn!(employee_id = %id, error = %e, "employee deletion rejected");
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}
