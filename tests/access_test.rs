//! Integration tests for role-based route gating.

mod common;

use http::StatusCode;
use serde_json::json;
use vetdesk_entity::user::Role;

fn pet_body() -> serde_json::Value {
    json!({
        "name": "Rex",
        "species": "dog",
        "breed": "labrador",
        "size": "large",
        "age": 3,
        "owner_id": uuid::Uuid::new_v4().to_string(),
    })
}

#[tokio::test]
async fn vet_passes_a_staff_gate_owner_does_not() {
    let app = common::TestApp::new();
    app.create_test_user("vet@clinic.test", "plainpassword", &[Role::Vet])
        .await;
    app.create_test_user("owner@clinic.test", "plainpassword", &[Role::Owner])
        .await;

    let vet_token = app.login("vet@clinic.test", "plainpassword").await;
    let owner_token = app.login("owner@clinic.test", "plainpassword").await;

    // POST /api/pets requires admin OR vet; one matching role is enough.
    let created = app
        .request("POST", "/api/pets", Some(pet_body()), Some(&vet_token))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);

    let forbidden = app
        .request("POST", "/api/pets", Some(pet_body()), Some(&owner_token))
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
    assert_eq!(forbidden.body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn reads_are_open_to_every_authenticated_role() {
    let app = common::TestApp::new();
    app.create_test_user("owner@clinic.test", "plainpassword", &[Role::Owner])
        .await;
    let token = app.login("owner@clinic.test", "plainpassword").await;

    let response = app.request("GET", "/api/pets", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let unauthenticated = app.request("GET", "/api/pets", None, None).await;
    assert_eq!(unauthenticated.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn user_management_is_admin_only() {
    let app = common::TestApp::new();
    app.create_test_user("admin@clinic.test", "plainpassword", &[Role::Admin])
        .await;
    app.create_test_user("vet@clinic.test", "plainpassword", &[Role::Vet])
        .await;

    let admin_token = app.login("admin@clinic.test", "plainpassword").await;
    let vet_token = app.login("vet@clinic.test", "plainpassword").await;

    let listed = app
        .request("GET", "/api/users", None, Some(&admin_token))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["data"].as_array().unwrap().len(), 2);

    let forbidden = app
        .request("GET", "/api/users", None, Some(&vet_token))
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn multi_role_principal_passes_any_matching_gate() {
    let app = common::TestApp::new();
    app.create_test_user(
        "both@clinic.test",
        "plainpassword",
        &[Role::Owner, Role::Vet],
    )
    .await;
    let token = app.login("both@clinic.test", "plainpassword").await;

    let created = app
        .request("POST", "/api/pets", Some(pet_body()), Some(&token))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
}

#[tokio::test]
async fn password_change_is_own_account_only() {
    let app = common::TestApp::new();
    let owner_id = app
        .create_test_user("owner@clinic.test", "plainpassword", &[Role::Owner])
        .await;
    let other_id = app
        .create_test_user("other@clinic.test", "plainpassword", &[Role::Owner])
        .await;
    let token = app.login("owner@clinic.test", "plainpassword").await;

    let body = json!({ "current_password": "plainpassword", "new_password": "freshpassword" });

    let foreign = app
        .request(
            "PUT",
            &format!("/api/users/{other_id}/password"),
            Some(body.clone()),
            Some(&token),
        )
        .await;
    assert_eq!(foreign.status, StatusCode::FORBIDDEN);

    let own = app
        .request(
            "PUT",
            &format!("/api/users/{owner_id}/password"),
            Some(body),
            Some(&token),
        )
        .await;
    assert_eq!(own.status, StatusCode::OK);

    // The old password is gone, the new one works.
    let stale = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "owner@clinic.test", "password": "plainpassword" })),
            None,
        )
        .await;
    assert_eq!(stale.status, StatusCode::UNAUTHORIZED);

    app.login("owner@clinic.test", "freshpassword").await;
}

#[tokio::test]
async fn admin_can_change_any_password() {
    let app = common::TestApp::new();
    app.create_test_user("admin@clinic.test", "plainpassword", &[Role::Admin])
        .await;
    let owner_id = app
        .create_test_user("owner@clinic.test", "plainpassword", &[Role::Owner])
        .await;
    let admin_token = app.login("admin@clinic.test", "plainpassword").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{owner_id}/password"),
            Some(json!({ "current_password": "plainpassword", "new_password": "freshpassword" })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}
