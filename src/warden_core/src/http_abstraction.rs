//! Framework-agnostic HTTP shapes for the login endpoint.
//!
//! The login handler consumes an [`HttpRequest`] and produces an
//! [`HttpResponse`]; neither depends on a web framework. Frameworks only
//! need to implement [`HttpResponseBuilder`] on one of their own types.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  warden_core: HttpRequest/HttpResponse   │
//! │  and the HttpResponseBuilder trait       │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  warden_axum: AxumResponseBuilder        │
//! │  impl HttpResponseBuilder for it         │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  LoginRouter returns an HttpResponse,    │
//! │  the route writes it into the builder    │
//! └──────────────────────────────────────────┘
//! ```

use secrecy::Secret;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{domain::access_token::AccessToken, error::ApiError};

/// JSON body of a login request.
///
/// Both fields are optional at this level so that the handler, not the
/// deserializer, decides how a missing field is reported.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    pub email: Option<Secret<String>>,
    #[serde(default)]
    pub password: Option<Secret<String>>,
}

impl LoginRequestBody {
    pub fn new(email: Option<&str>, password: Option<&str>) -> Self {
        Self {
            email: email.map(|e| Secret::new(e.to_owned())),
            password: password.map(|p| Secret::new(p.to_owned())),
        }
    }
}

#[derive(Debug, Default)]
pub struct HttpRequest {
    pub body: Option<LoginRequestBody>,
}

impl HttpRequest {
    pub fn with_body(body: LoginRequestBody) -> Self {
        Self { body: Some(body) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    Error(ApiError),
    AccessToken(AccessToken),
}

/// Status code and body produced by the login handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: ResponseBody,
}

impl HttpResponse {
    pub fn ok(token: AccessToken) -> Self {
        Self {
            status_code: 200,
            body: ResponseBody::AccessToken(token),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            status_code: error.status_code(),
            body: ResponseBody::Error(error),
        }
    }

    pub fn unauthorized() -> Self {
        Self::error(ApiError::Unauthorized)
    }

    pub fn server_error() -> Self {
        Self::error(ApiError::ServerError)
    }

    pub fn access_token(&self) -> Option<&AccessToken> {
        match &self.body {
            ResponseBody::AccessToken(token) => Some(token),
            ResponseBody::Error(_) => None,
        }
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match &self.body {
            ResponseBody::Error(error) => Some(error),
            ResponseBody::AccessToken(_) => None,
        }
    }

    /// JSON rendering of the body: `{"accessToken"}` or `{"name", "message"}`.
    pub fn body_json(&self) -> Value {
        match &self.body {
            ResponseBody::AccessToken(token) => json!({ "accessToken": token.as_str() }),
            ResponseBody::Error(error) => error.to_json(),
        }
    }

    /// Write this response into a framework response builder.
    pub fn write<B: HttpResponseBuilder>(self, builder: B) -> B::Response {
        let body = self.body_json();
        builder.status(self.status_code).json_body(body).build()
    }
}

/// Trait for building framework responses out of an [`HttpResponse`].
///
/// # Example
///
/// ```ignore
/// // In warden_axum
/// pub struct AxumResponseBuilder { builder: axum::http::response::Builder, body: Option<String> }
///
/// impl HttpResponseBuilder for AxumResponseBuilder {
///     type Response = axum::response::Response;
///
///     fn status(mut self, code: u16) -> Self {
///         self.builder = self.builder.status(code);
///         self
///     }
///     // ...
/// }
/// ```
pub trait HttpResponseBuilder: Sized {
    /// The final response type produced by this builder
    type Response;

    /// Set the HTTP status code
    fn status(self, code: u16) -> Self;

    /// Add an HTTP header
    fn header(self, name: &str, value: &str) -> Self;

    /// Set a JSON body with Content-Type header
    fn json_body(self, body: Value) -> Self;

    /// Build the final response
    fn build(self) -> Self::Response;
}
