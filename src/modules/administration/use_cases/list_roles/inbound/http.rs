use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::administration::use_cases::list_roles::projection::RoleItemResponse;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.roles.get_all().await {
        Ok(roles) => Json(
            roles
                .into_iter()
                .map(RoleItemResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "listing roles failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
