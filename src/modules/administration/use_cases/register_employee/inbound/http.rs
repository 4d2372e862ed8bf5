use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::administration::use_cases::register_employee::command::RegisterEmployee;
use crate::shell::state::AppState;

/// A client-supplied `id` is not part of the body; the repository assigns one.
#[derive(Deserialize)]
pub struct RegisterEmployeeBody {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub role_ids: Vec<Uuid>,
    #[serde(default)]
    pub applied_promocodes_count: u32,
}

#[derive(Serialize)]
pub struct RegisterEmployeeResponse {
    pub id: Uuid,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterEmployeeBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return (StatusCode::BAD_REQUEST, rejection.body_text()).into_response(),
    };

    let command = RegisterEmployee {
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
        role_ids: body.role_ids,
        applied_promocodes_count: body.applied_promocodes_count,
    };

    match state.register_handler.handle(command).await {
        Ok(employee) => {
            tracing::info!(employee_id = %employee.id, "employee registered");
            Json(RegisterEmployeeResponse { id: employee.id }).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "employee registration rejected");
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}
