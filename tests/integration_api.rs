//! End-to-end flows against a real database. Each test runs in its own
//! database provisioned by `#[sqlx::test]` from the embedded migrations.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;

use common::test_app_with_pool;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", token);
    }
    builder
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", token)
        .body(Body::empty())
        .unwrap()
}

/// Registers a user and logs them in, returning (id, token).
async fn register_and_login(
    app: &axum::Router,
    username: &str,
    instructor: bool,
    client: bool,
) -> (i64, String) {
    let register = json!({
        "username": username,
        "password": "password123",
        "first_name": "Test",
        "last_name": "User",
        "instructor": instructor,
        "client": client
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/register", None, &register))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let user = body_json(response).await;
    let id = user["id"].as_i64().unwrap();

    let login = json!({ "username": username, "password": "password123" });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/login", None, &login))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let token = body["token"].as_str().unwrap().to_string();

    (id, token)
}

#[sqlx::test(migrations = "./migrations")]
async fn test_instructor_creates_class(pool: PgPool) {
    let app = test_app_with_pool(pool);
    let (instructor_id, token) = register_and_login(&app, "coach", true, false).await;

    let body = json!({
        "name": "Yoga",
        "type": "group",
        "location": "Studio A",
        "instructor_id": instructor_id
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/classes", Some(&token), &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let class = body_json(response).await;
    assert!(class["id"].as_i64().unwrap() >= 1);
    assert_eq!(class["name"], "Yoga");
    assert_eq!(class["type"], "group");
    assert_eq!(class["location"], "Studio A");
    assert_eq!(class["instructor_id"].as_i64().unwrap(), instructor_id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_client_token_cannot_create_class(pool: PgPool) {
    let app = test_app_with_pool(pool);
    let (client_id, token) = register_and_login(&app, "member", false, true).await;

    let body = json!({
        "name": "Yoga",
        "type": "group",
        "location": "Studio A",
        "instructor_id": client_id
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/classes", Some(&token), &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "This user isn't authorized to take this action!" })
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_missing_class_is_not_found(pool: PgPool) {
    let app = test_app_with_pool(pool);
    let (_, token) = register_and_login(&app, "coach", true, false).await;

    let response = app
        .clone()
        .oneshot(get("/api/classes/999999", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_class_round_trip_with_sessions(pool: PgPool) {
    let app = test_app_with_pool(pool);
    let (instructor_id, token) = register_and_login(&app, "coach", true, false).await;

    let body = json!({
        "name": "Spin",
        "type": "cardio",
        "location": "Room 2",
        "instructor_id": instructor_id
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/classes", Some(&token), &body))
        .await
        .unwrap();
    let class_id = body_json(response).await["id"].as_i64().unwrap();

    let session = json!({ "class_id": class_id, "date_time": "2026-09-01T18:30:00Z" });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/sessions", Some(&token), &session))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(get(&format!("/api/classes/{class_id}"), &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let combined = body_json(response).await;
    assert_eq!(combined["name"], "Spin");
    assert_eq!(combined["sessions"].as_array().unwrap().len(), 1);
    assert_eq!(
        combined["sessions"][0]["class_id"].as_i64().unwrap(),
        class_id
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_partial_update_preserves_absent_fields(pool: PgPool) {
    let app = test_app_with_pool(pool);
    let (instructor_id, token) = register_and_login(&app, "coach", true, false).await;

    let body = json!({
        "name": "Pilates",
        "type": "group",
        "location": "Studio A",
        "instructor_id": instructor_id
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/classes", Some(&token), &body))
        .await
        .unwrap();
    let class_id = body_json(response).await["id"].as_i64().unwrap();

    let update = json!({ "location": "Studio B" });
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/classes/{class_id}"),
            Some(&token),
            &update,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["location"], "Studio B");
    assert_eq!(updated["name"], "Pilates");
    assert_eq!(updated["type"], "group");
    assert_eq!(updated["instructor_id"].as_i64().unwrap(), instructor_id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_then_get_is_not_found(pool: PgPool) {
    let app = test_app_with_pool(pool);
    let (instructor_id, token) = register_and_login(&app, "coach", true, false).await;

    let body = json!({
        "name": "Boxing",
        "type": "group",
        "location": "Ring",
        "instructor_id": instructor_id
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/classes", Some(&token), &body))
        .await
        .unwrap();
    let class_id = body_json(response).await["id"].as_i64().unwrap();

    let mut request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/classes/{class_id}"))
        .body(Body::empty())
        .unwrap();
    request
        .headers_mut()
        .insert("authorization", token.parse().unwrap());
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Boxing");

    let response = app
        .clone()
        .oneshot(get(&format!("/api/classes/{class_id}"), &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_user_profile_joins_classes_and_passes(pool: PgPool) {
    let app = test_app_with_pool(pool);
    let (instructor_id, instructor_token) = register_and_login(&app, "coach", true, false).await;
    let (client_id, client_token) = register_and_login(&app, "member", false, true).await;

    let body = json!({
        "name": "Yoga",
        "type": "group",
        "location": "Studio A",
        "instructor_id": instructor_id
    });
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/classes",
            Some(&instructor_token),
            &body,
        ))
        .await
        .unwrap();
    let class_id = body_json(response).await["id"].as_i64().unwrap();

    let pass = json!({ "client_id": client_id, "class_id": class_id });
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/passes",
            Some(&client_token),
            &pass,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Instructor profile carries their classes; no passes.
    let response = app
        .clone()
        .oneshot(get(
            &format!("/api/users/{instructor_id}"),
            &instructor_token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let profile = body_json(response).await;
    assert_eq!(profile["username"], "coach");
    assert_eq!(profile["classes"].as_array().unwrap().len(), 1);
    assert!(profile["passes"].as_array().unwrap().is_empty());
    assert!(profile.get("password").is_none());

    // Client profile carries their passes; no classes.
    let response = app
        .clone()
        .oneshot(get(&format!("/api/users/{client_id}"), &client_token))
        .await
        .unwrap();
    let profile = body_json(response).await;
    assert_eq!(profile["classes"].as_array().unwrap().len(), 0);
    assert_eq!(profile["passes"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_rejects_duplicate_username(pool: PgPool) {
    let app = test_app_with_pool(pool);
    register_and_login(&app, "coach", true, false).await;

    let body = json!({
        "username": "coach",
        "password": "password123",
        "first_name": "Other",
        "last_name": "Coach",
        "instructor": true
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/register", None, &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_rejects_wrong_password(pool: PgPool) {
    let app = test_app_with_pool(pool);
    register_and_login(&app, "coach", true, false).await;

    let login = json!({ "username": "coach", "password": "wrongpassword" });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/login", None, &login))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_user_updates_own_record(pool: PgPool) {
    let app = test_app_with_pool(pool);
    let (id, token) = register_and_login(&app, "member", false, true).await;

    let update = json!({ "first_name": "Renamed" });
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/users/{id}"),
            Some(&token),
            &update,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let user = body_json(response).await;
    assert_eq!(user["first_name"], "Renamed");
    // Absent fields keep their stored value.
    assert_eq!(user["last_name"], "User");
    assert_eq!(user["username"], "member");
}
