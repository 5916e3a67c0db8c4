//! Error descriptors surfaced to HTTP clients.
//!
//! Every response error body has the shape `{"name": ..., "message": ...}`.
//! Only the login handler turns outcomes into these values; use cases report
//! their own error types and the handler maps them here.

use serde_json::{Value, json};
use thiserror::Error;

/// Names of the values and collaborators that can be reported as missing or
/// invalid.
pub mod param {
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const USER_LOOKUP: &str = "userLookup";
    pub const CREDENTIAL_VERIFIER: &str = "credentialVerifier";
    pub const TOKEN_ISSUER: &str = "tokenIssuer";
    pub const TOKEN_PERSISTER: &str = "tokenPersister";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Missing param: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid param: {0}")]
    InvalidParameter(&'static str),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Internal error")]
    ServerError,
}

impl ApiError {
    pub fn name(&self) -> &'static str {
        match self {
            ApiError::MissingParameter(_) => "MissingParameterError",
            ApiError::InvalidParameter(_) => "InvalidParameterError",
            ApiError::Unauthorized => "UnauthorizedError",
            ApiError::ServerError => "ServerError",
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::MissingParameter(_) | ApiError::InvalidParameter(_) => 400,
            ApiError::Unauthorized => 401,
            ApiError::ServerError => 500,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name(),
            "message": self.to_string(),
        })
    }
}
