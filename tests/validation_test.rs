//! Integration tests for request-shape validation.

mod common;

use http::StatusCode;
use serde_json::json;
use vetdesk_entity::user::Role;

#[tokio::test]
async fn violations_accumulate_in_declaration_order() {
    let app = common::TestApp::new();
    app.create_test_user("admin@clinic.test", "plainpassword", &[Role::Admin])
        .await;
    let token = app.login("admin@clinic.test", "plainpassword").await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({
                "email": "not-an-email",
                "address": "123 Main St",
                "phone": 42,
                "roles": ["owner"],
                "password": "longenough",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let details = response.body["details"].as_array().unwrap();
    let fields: Vec<&str> = details
        .iter()
        .map(|error| error["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "lastname", "email", "phone"]);
    assert_eq!(details[0]["message"], "Name is required");
    assert_eq!(details[2]["message"], "Invalid email format");
}

#[tokio::test]
async fn strict_shapes_reject_undeclared_fields() {
    let app = common::TestApp::new();
    app.create_test_user("vet@clinic.test", "plainpassword", &[Role::Vet])
        .await;
    let token = app.login("vet@clinic.test", "plainpassword").await;

    let response = app
        .request(
            "POST",
            "/api/pets",
            Some(json!({
                "name": "Rex",
                "species": "dog",
                "breed": "labrador",
                "size": "large",
                "age": 3,
                "owner_id": uuid::Uuid::new_v4().to_string(),
                "extra": "x",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let details = response.body["details"].as_array().unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0]["field"], "extra");
    assert_eq!(details[0]["message"], "Unexpected field");
}

#[tokio::test]
async fn login_shape_runs_before_credentials_are_checked() {
    let app = common::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "not-an-email", "password": "short" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let details = response.body["details"].as_array().unwrap();
    assert_eq!(details[0]["message"], "Invalid email format");
    assert_eq!(details[1]["message"], "Password must be at least 6 characters");
}

#[tokio::test]
async fn malformed_json_body_is_a_bad_request() {
    let app = common::TestApp::new();

    // The request helper only sends valid JSON, so build the raw case here.
    use axum::body::Body;
    use http::{Request, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "Malformed JSON body");
}

#[tokio::test]
async fn appointment_formats_are_enforced() {
    let app = common::TestApp::new();
    app.create_test_user("owner@clinic.test", "plainpassword", &[Role::Owner])
        .await;
    let token = app.login("owner@clinic.test", "plainpassword").await;

    let response = app
        .request(
            "POST",
            "/api/appointments",
            Some(json!({
                "date": "14/03/2025",
                "time": "9am",
                "vet_id": "not-a-uuid",
                "pet_id": uuid::Uuid::new_v4().to_string(),
                "owner_id": uuid::Uuid::new_v4().to_string(),
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let details = response.body["details"].as_array().unwrap();
    let messages: Vec<&str> = details
        .iter()
        .map(|error| error["message"].as_str().unwrap())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Date must be in YYYY-MM-DD format",
            "Time must be in HH:MM:SS format",
            "Vet id must be a valid UUID",
        ]
    );
}

#[tokio::test]
async fn user_update_shape_has_no_password_field() {
    let app = common::TestApp::new();
    app.create_test_user("admin@clinic.test", "plainpassword", &[Role::Admin])
        .await;
    let target_id = app
        .create_test_user("owner@clinic.test", "plainpassword", &[Role::Owner])
        .await;
    let token = app.login("admin@clinic.test", "plainpassword").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{target_id}"),
            Some(json!({
                "name": "Olive",
                "lastname": "Owner",
                "email": "owner@clinic.test",
                "address": "123 Main St",
                "phone": 3001234567_i64,
                "roles": ["owner"],
                "password": "sneaky-overwrite",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let details = response.body["details"].as_array().unwrap();
    assert_eq!(details[0]["field"], "password");

    // The stored credential is untouched.
    app.login("owner@clinic.test", "plainpassword").await;
}
