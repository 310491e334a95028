//! E2E tests for user creation

mod common;

use common::TestServer;
use serde_json::Value;

#[tokio::test]
async fn test_create_user() {
    let server = TestServer::new().await;

    let user = server.create_user("walt@breakingbad.com").await;

    assert_eq!(user["email"], "walt@breakingbad.com");
    assert!(uuid::Uuid::parse_str(user["id"].as_str().unwrap()).is_ok());
    assert!(user["created_at"].is_string());
    assert!(user["updated_at"].is_string());
}

#[tokio::test]
async fn test_user_ids_are_unique() {
    let server = TestServer::new().await;

    let first = server.create_user("walt@breakingbad.com").await;
    let second = server.create_user("jesse@breakingbad.com").await;

    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_create_user_invalid_json() {
    let server = TestServer::new().await;

    let response = server
        .client
        .post(server.url("/api/users"))
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["error"], "Invalid JSON");
}

#[tokio::test]
async fn test_create_user_without_content_type() {
    let server = TestServer::new().await;

    let response = server
        .client
        .post(server.url("/api/users"))
        .body(r#"{"email":"saul@bettercall.com"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 201);
}

#[tokio::test]
async fn test_duplicate_email_is_a_server_error() {
    let server = TestServer::new().await;
    server.create_user("walt@breakingbad.com").await;

    let response = server
        .client
        .post(server.url("/api/users"))
        .json(&serde_json::json!({ "email": "walt@breakingbad.com" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["error"], "Something went wrong");
}

#[tokio::test]
async fn test_users_rejects_get() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(server.url("/api/users"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 405);
}

#[tokio::test]
async fn test_create_user_missing_email() {
    let server = TestServer::new().await;

    let response = server
        .client
        .post(server.url("/api/users"))
        .body("{}")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 201);
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["email"], "");
}
