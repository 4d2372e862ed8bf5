// End to end in memory test for the employee CRUD flow, driven through the full router.

use axum::{body::Body, http::Request, http::StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::modules::administration::adapters::outbound::fake_data::{
    self, ADMIN_ROLE_ID, PARTNER_MANAGER_ROLE_ID,
};
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::http::{body_json, json_request, seeded_state};

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn it_should_create_read_update_and_delete_an_employee() {
    let app = router(AppState::in_memory(Vec::new(), fake_data::roles()));

    let created = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/employees",
            json!({
                "first_name": "Ann",
                "last_name": "Lee",
                "email": "ann@somemail.ru",
                "role_ids": [ADMIN_ROLE_ID]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::OK);
    let id = body_json(created).await["id"].as_str().unwrap().to_string();
    let employee_uri = format!("/api/v1/employees/{id}");

    let fetched = app.clone().oneshot(get(&employee_uri)).await.unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(body_json(fetched).await["full_name"], "Ann Lee");

    let updated = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/v1/employees",
            json!({
                "id": id,
                "first_name": "Annie",
                "last_name": "Lee",
                "email": "ann@somemail.ru",
                "role_ids": [PARTNER_MANAGER_ROLE_ID]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(updated.status(), StatusCode::OK);

    let fetched = body_json(app.clone().oneshot(get(&employee_uri)).await.unwrap()).await;
    assert_eq!(fetched["full_name"], "Annie Lee");
    assert_eq!(fetched["roles"][0]["name"], "PartnerManager");

    let unknown = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/v1/employees",
            json!({
                "id": "00000000-0000-0000-0000-000000000b0b",
                "first_name": "Bob",
                "last_name": "Lee",
                "email": "bob@somemail.ru"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);

    let deleted = app.clone().oneshot(delete(&employee_uri)).await.unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);

    let missing = app.clone().oneshot(get(&employee_uri)).await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let listed = app.oneshot(get("/api/v1/employees")).await.unwrap();
    assert_eq!(body_json(listed).await, json!([]));
}

#[tokio::test]
async fn it_should_serve_the_seeded_roles_and_employees() {
    let app = router(seeded_state());

    let roles = body_json(app.clone().oneshot(get("/api/v1/roles")).await.unwrap()).await;
    assert_eq!(roles.as_array().unwrap().len(), 2);

    let employees = body_json(app.oneshot(get("/api/v1/employees")).await.unwrap()).await;
    assert_eq!(employees.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn it_should_answer_404_outside_the_api_prefix() {
    let response = router(seeded_state())
        .oneshot(get("/employees"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn it_should_answer_404_for_an_id_that_is_not_a_uuid() {
    let app = router(seeded_state());

    let fetched = app
        .clone()
        .oneshot(get("/api/v1/employees/not-a-guid"))
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);

    let deleted = app
        .clone()
        .oneshot(delete("/api/v1/employees/not-a-guid"))
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NOT_FOUND);

    let listed = body_json(app.oneshot(get("/api/v1/employees")).await.unwrap()).await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
}
