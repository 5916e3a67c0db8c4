use std::sync::Arc;

use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::{access_token::AccessToken, user::UserId};

// CredentialVerifier port trait and errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialVerifierError {
    #[error("Malformed password hash: {0}")]
    MalformedHash(String),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Compares a plaintext secret against a stored hash.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn compare(
        &self,
        plain: &Secret<String>,
        hash: &Secret<String>,
    ) -> Result<bool, CredentialVerifierError>;
}

#[async_trait]
impl<T: CredentialVerifier + ?Sized> CredentialVerifier for Arc<T> {
    async fn compare(
        &self,
        plain: &Secret<String>,
        hash: &Secret<String>,
    ) -> Result<bool, CredentialVerifierError> {
        (**self).compare(plain, hash).await
    }
}

// TokenIssuer port trait and errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenIssuerError {
    #[error("Token error: {0}")]
    TokenError(String),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Produces an opaque access token for a user id.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    async fn generate(&self, user_id: &UserId) -> Result<AccessToken, TokenIssuerError>;
}

#[async_trait]
impl<T: TokenIssuer + ?Sized> TokenIssuer for Arc<T> {
    async fn generate(&self, user_id: &UserId) -> Result<AccessToken, TokenIssuerError> {
        (**self).generate(user_id).await
    }
}

// EmailValidator port trait and errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailValidatorError {
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Format check applied by the login handler before authentication.
#[async_trait]
pub trait EmailValidator: Send + Sync {
    async fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError>;
}

#[async_trait]
impl<T: EmailValidator + ?Sized> EmailValidator for Arc<T> {
    async fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError> {
        (**self).is_valid(email).await
    }
}
