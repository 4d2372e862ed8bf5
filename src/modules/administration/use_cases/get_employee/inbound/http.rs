use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::modules::administration::use_cases::get_employee::projection::EmployeeResponse;
use crate::shell::state::AppState;

/// A path segment that is not a UUID answers 404, like an unknown id.
pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> impl IntoResponse {
    let Ok(Path(id)) = id else {
        return StatusCode::NOT_FOUND.into_response();
    };
    match state.employees.get_by_id(id).await {
        Ok(Some(employee)) => Json(EmployeeResponse::from(employee)).into_response(),
        Ok(None) => {
            tracing::debug!(employee_id = %id, "employee not found");
            StatusCode::NOT_FOUND.into_response()
        }
        Err(e) => {
            tracing::error!(employee_id = %id, error = %e, "loading employee failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
