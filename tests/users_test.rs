//! Users resource integration tests
//!
//! Exercises registration validation and account deletion with its
//! explicit cascade over sessions and topics.

mod common;

use agora::auth::users;
use agora::topics::db as topics;
use axum::http::StatusCode;
use common::{create_user, login, test_pool, test_server, token_header};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_signup_and_login() {
    let pool = test_pool().await;
    let server = test_server(&pool).await;

    let response = server
        .post("/users")
        .json(&serde_json::json!({
            "email": "new@example.com",
            "password": "p1aint3xt-pa55w0rd"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["email"], "new@example.com");
    assert!(body["id"].is_i64());
    assert!(body.get("password_hash").is_none());

    // The fresh account can log in right away.
    login(&server, "new@example.com", "p1aint3xt-pa55w0rd").await;
}

#[tokio::test]
async fn test_signup_with_blank_email() {
    let pool = test_pool().await;
    let server = test_server(&pool).await;

    let response = server
        .post("/users")
        .json(&serde_json::json!({"email": "", "password": "p1aint3xt-pa55w0rd"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["email"], "can't be blank");
}

#[tokio::test]
async fn test_signup_with_short_password() {
    let pool = test_pool().await;
    let server = test_server(&pool).await;

    let response = server
        .post("/users")
        .json(&serde_json::json!({"email": "new@example.com", "password": "short"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json();
    assert!(body["error"]["password"]
        .as_str()
        .unwrap()
        .contains("too short"));
}

#[tokio::test]
async fn test_signup_with_taken_email() {
    let pool = test_pool().await;
    let server = test_server(&pool).await;
    create_user(&pool, "taken@example.com", "correct password").await;

    let response = server
        .post("/users")
        .json(&serde_json::json!({
            "email": "taken@example.com",
            "password": "p1aint3xt-pa55w0rd"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["email"], "has already been taken");
}

#[tokio::test]
async fn test_email_uniqueness_is_case_sensitive() {
    let pool = test_pool().await;
    let server = test_server(&pool).await;
    create_user(&pool, "user@example.com", "correct password").await;

    // A differently-cased address is a different account.
    let response = server
        .post("/users")
        .json(&serde_json::json!({
            "email": "User@example.com",
            "password": "p1aint3xt-pa55w0rd"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_delete_account_requires_a_token() {
    let pool = test_pool().await;
    let server = test_server(&pool).await;

    let response = server.delete("/users").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_account_cascades_sessions_and_topics() {
    let pool = test_pool().await;
    let server = test_server(&pool).await;
    let doomed = create_user(&pool, "doomed@example.com", "correct password").await;
    let bystander = create_user(&pool, "bystander@example.com", "correct password").await;
    let kept_topic = topics::create_topic(&pool, bystander.id, "Kept topic", None)
        .await
        .unwrap();

    let token = login(&server, "doomed@example.com", "correct password").await;
    let second_token = login(&server, "doomed@example.com", "correct password").await;
    topics::create_topic(&pool, doomed.id, "Doomed topic", None)
        .await
        .unwrap();

    let response = server
        .delete("/users")
        .add_header("authorization", token_header(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    // The user and every token it held are gone.
    assert!(users::find_user_by_id(&pool, doomed.id)
        .await
        .unwrap()
        .is_none());
    for dead in [&token, &second_token] {
        let response = server
            .get("/sessions")
            .add_header("authorization", token_header(dead))
            .await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    // The user's topics are gone; the bystander's remain.
    let response = server.get("/topics").await;
    let body: serde_json::Value = response.json();
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Kept topic"]);
    assert!(topics::find_topic(&pool, kept_topic.id)
        .await
        .unwrap()
        .is_some());
}
