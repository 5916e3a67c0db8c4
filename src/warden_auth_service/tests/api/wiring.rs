use fake::{Fake, faker::internet::en::SafeEmail};
use serde_json::json;
use warden_application::{AuthError, DependencyBundle};
use warden_auth_service::{SetupError, login_router};

use crate::helpers::TestApp;

const PASSWORD: &str = "password123!";

#[tokio::test]
async fn bundle_wired_service_issues_and_persists_tokens() {
    let app = TestApp::from_bundle(true).await;
    let email: String = SafeEmail().fake();
    let user = app.add_user(&email, PASSWORD).await;

    let response = app
        .post_login(&json!({ "email": email, "password": PASSWORD }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(app.user_store.access_token_for(user.id()).await.is_some());
}

#[tokio::test]
async fn email_format_is_not_checked_when_validation_is_disabled() {
    let app = TestApp::from_bundle(false).await;

    let response = app
        .post_login(&json!({ "email": "not-an-email", "password": PASSWORD }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
}

#[test]
fn incomplete_bundle_is_rejected() {
    let result = login_router(DependencyBundle::new(), true);

    assert!(matches!(
        result,
        Err(SetupError::Dependencies(AuthError::MissingParameter(
            "userLookup"
        )))
    ));
}
