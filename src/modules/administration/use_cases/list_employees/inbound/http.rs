use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::administration::use_cases::list_employees::projection::EmployeeShortResponse;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.employees.get_all().await {
        Ok(employees) => Json(
            employees
                .into_iter()
                .map(EmployeeShortResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "listing employees failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
