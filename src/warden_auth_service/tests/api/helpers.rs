use std::sync::Arc;

use reqwest::Response;
use secrecy::Secret;
use serde::Serialize;
use tokio::net::TcpListener;
use warden_adapters::{
    authentication::{Argon2CredentialVerifier, JwtConfig, JwtTokenIssuer, compute_password_hash},
    config::{AllowedOrigins, test},
    handlers::LoginRouter,
    persistence::HashMapUserStore,
    validation::RegexEmailValidator,
};
use warden_application::{AuthDependencies, AuthUseCase, DependencyBundle};
use warden_auth_service::{AuthService, login_router};
use warden_core::User;

pub const ALLOWED_ORIGIN: &str = "http://app.example.com";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub user_store: HashMapUserStore,
}

impl TestApp {
    /// Statically wired service with email validation and token persistence.
    pub async fn new() -> Self {
        let user_store = HashMapUserStore::new();
        let dependencies = AuthDependencies::new(
            user_store.clone(),
            Argon2CredentialVerifier::new(),
            JwtTokenIssuer::new(jwt_config()),
        )
        .with_token_persister(user_store.clone());
        let email_validator =
            RegexEmailValidator::new().expect("Failed to build email validator");
        let login =
            LoginRouter::new(AuthUseCase::new(dependencies)).with_email_validator(email_validator);

        Self::spawn(AuthService::new(login), user_store).await
    }

    /// Service wired at runtime through a dependency bundle.
    pub async fn from_bundle(validate_email: bool) -> Self {
        let user_store = HashMapUserStore::new();
        let bundle = DependencyBundle::new()
            .with_user_lookup(Arc::new(user_store.clone()))
            .with_credential_verifier(Arc::new(Argon2CredentialVerifier::new()))
            .with_token_issuer(Arc::new(JwtTokenIssuer::new(jwt_config())))
            .with_token_persister(Arc::new(user_store.clone()));
        let login = login_router(bundle, validate_email).expect("Failed to build login router");

        Self::spawn(AuthService::new(login), user_store).await
    }

    async fn spawn(service: AuthService, user_store: HashMapUserStore) -> Self {
        let listener = TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!(
            "http://{}",
            listener.local_addr().expect("Failed to read local address")
        );

        let allowed_origins = AllowedOrigins::new(vec![ALLOWED_ORIGIN.to_string()]);
        tokio::spawn(service.run_standalone(listener, Some(allowed_origins)));

        Self {
            address,
            http_client: reqwest::Client::new(),
            user_store,
        }
    }

    pub async fn add_user(&self, email: &str, password: &str) -> User {
        let hash = compute_password_hash(Secret::new(password.to_string()))
            .await
            .expect("Failed to hash password");
        self.user_store
            .add_user(email, hash)
            .await
            .expect("Failed to add user")
    }

    pub async fn post_login<Body>(&self, body: &Body) -> Response
    where
        Body: Serialize + ?Sized,
    {
        self.http_client
            .post(format!("{}/login", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login_raw(&self, body: &'static str) -> Response {
        self.http_client
            .post(format!("{}/login", &self.address))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        jwt_secret: Secret::new(test::JWT_SECRET.to_string()),
        token_ttl_in_seconds: test::JWT_TIME_TO_LIVE,
    }
}
