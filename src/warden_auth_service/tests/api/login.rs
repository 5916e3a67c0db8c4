use fake::{Fake, faker::internet::en::SafeEmail};
use serde_json::{Value, json};
use warden_adapters::authentication::decode_access_token;
use warden_adapters::config::test;

use crate::helpers::{ALLOWED_ORIGIN, TestApp};

const PASSWORD: &str = "password123!";

async fn json_body(response: reqwest::Response) -> Value {
    response
        .json()
        .await
        .expect("Failed to parse response body")
}

#[tokio::test]
async fn should_return_200_with_token_for_valid_credentials() {
    let app = TestApp::new().await;
    let email: String = SafeEmail().fake();
    let user = app.add_user(&email, PASSWORD).await;

    let response = app
        .post_login(&json!({ "email": email, "password": PASSWORD }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = json_body(response).await;
    let token = body["accessToken"]
        .as_str()
        .expect("accessToken missing from body");

    let claims = decode_access_token(token, test::JWT_SECRET.as_bytes()).unwrap();
    assert_eq!(claims.sub, user.id().as_str());

    let persisted = app.user_store.access_token_for(user.id()).await;
    assert_eq!(persisted.map(|t| t.into_inner()), Some(token.to_string()));
}

#[tokio::test]
async fn should_return_401_for_wrong_password() {
    let app = TestApp::new().await;
    let email: String = SafeEmail().fake();
    app.add_user(&email, PASSWORD).await;

    let response = app
        .post_login(&json!({ "email": email, "password": "wrong-password" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    let body = json_body(response).await;
    assert_eq!(body["name"], "UnauthorizedError");
    assert_eq!(body["message"], "Unauthorized");
}

#[tokio::test]
async fn should_return_401_for_unknown_user() {
    let app = TestApp::new().await;
    let email: String = SafeEmail().fake();

    let response = app
        .post_login(&json!({ "email": email, "password": PASSWORD }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_400_when_a_field_is_missing() {
    let app = TestApp::new().await;
    let email: String = SafeEmail().fake();

    let test_cases = [
        (json!({ "password": PASSWORD }), "Missing param: email"),
        (json!({ "email": "", "password": PASSWORD }), "Missing param: email"),
        (json!({ "email": email }), "Missing param: password"),
        (json!({ "email": email, "password": "" }), "Missing param: password"),
        (json!({}), "Missing param: email"),
    ];

    for (body, message) in test_cases {
        let response = app.post_login(&body).await;

        assert_eq!(response.status().as_u16(), 400, "Failed for input: {body}");
        let error = json_body(response).await;
        assert_eq!(error["name"], "MissingParameterError");
        assert_eq!(error["message"], message, "Failed for input: {body}");
    }
}

#[tokio::test]
async fn should_return_400_for_malformed_email() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&json!({ "email": "not-an-email", "password": PASSWORD }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body = json_body(response).await;
    assert_eq!(body["name"], "InvalidParameterError");
    assert_eq!(body["message"], "Invalid param: email");
}

#[tokio::test]
async fn should_return_500_for_unreadable_body() {
    let app = TestApp::new().await;

    for body in ["not json", "[1, 2]", r#"{"email": 42}"#] {
        let response = app.post_login_raw(body).await;

        assert_eq!(response.status().as_u16(), 500, "Failed for input: {body}");
        let error = json_body(response).await;
        assert_eq!(error["name"], "ServerError");
        assert_eq!(error["message"], "Internal error");
    }
}

#[tokio::test]
async fn should_allow_configured_origin() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/login", &app.address))
        .header("origin", ALLOWED_ORIGIN)
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some(ALLOWED_ORIGIN)
    );
}

#[tokio::test]
async fn should_not_allow_unknown_origin() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/login", &app.address))
        .header("origin", "http://evil.example.com")
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(
        response
            .headers()
            .get("access-control-allow-origin")
            .is_none()
    );
}
