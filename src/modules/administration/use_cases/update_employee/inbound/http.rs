use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::administration::use_cases::update_employee::command::UpdateEmployee;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateEmployeeBody {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub role_ids: Vec<Uuid>,
    #[serde(default)]
    pub applied_promocodes_count: u32,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<UpdateEmployeeBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return (StatusCode::BAD_REQUEST, rejection.body_text()).into_response(),
    };

    let id = body.id;
    let command = UpdateEmployee {
        id,
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
        role_ids: body.role_ids,
        applied_promocodes_count: body.applied_promocodes_count,
    };

    match state.update_handler.handle(command).await {
        Ok(()) => {
            tracing::info!(employee_id = %id, "employee updated");
            StatusCode::OK.into_response()
        }
        Err(e) => {
            tracing::warn!(employee_id = %id, error = %e, "employee update rejected");
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}
