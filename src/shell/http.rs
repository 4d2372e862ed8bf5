use axum::{Router, routing::get};

use crate::modules::administration::use_cases::delete_employee::inbound::http as delete_http;
use crate::modules::administration::use_cases::get_employee::inbound::http as get_http;
use crate::modules::administration::use_cases::list_employees::inbound::http as list_http;
use crate::modules::administration::use_cases::list_roles::inbound::http as list_roles_http;
use crate::modules::administration::use_cases::register_employee::inbound::http as register_http;
use crate::modules::administration::use_cases::update_employee::inbound::http as update_http;
use crate::shell::state::AppState;

pub const API_PREFIX: &str = "/api/v1";

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/employees",
            get(list_http::handle)
                .post(register_http::handle)
                .put(update_http::handle),
        )
        .route(
            "/employees/{id}",
            get(get_http::handle).delete(delete_http::handle),
        )
        .route("/roles", get(list_roles_http::handle));

    Router::new().nest(API_PREFIX, api).with_state(state)
}
