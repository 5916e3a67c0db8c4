//! Framework-agnostic login handler.

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use warden_application::Authenticator;
use warden_core::{
    ApiError, Credentials, EmailValidator, EmailValidatorError, HttpRequest, HttpResponse, param,
};

/// Email validator type for routers configured without one.
pub enum NoEmailValidator {}

#[async_trait]
impl EmailValidator for NoEmailValidator {
    async fn is_valid(&self, _email: &str) -> Result<bool, EmailValidatorError> {
        match *self {}
    }
}

/// Maps login requests to responses.
///
/// | Outcome                          | Status |
/// |----------------------------------|--------|
/// | request or body absent           | 500    |
/// | email or password missing        | 400    |
/// | email rejected by the validator  | 400    |
/// | email validator failed           | 500    |
/// | no use case configured           | 500    |
/// | use case returned an error       | 500    |
/// | credentials denied               | 401    |
/// | token issued                     | 200    |
pub struct LoginRouter<A, E = NoEmailValidator> {
    auth_use_case: Option<A>,
    email_validator: Option<E>,
}

impl<A> LoginRouter<A, NoEmailValidator>
where
    A: Authenticator,
{
    pub fn new(auth_use_case: A) -> Self {
        Self {
            auth_use_case: Some(auth_use_case),
            email_validator: None,
        }
    }
}

impl<A, E> LoginRouter<A, E>
where
    A: Authenticator,
    E: EmailValidator,
{
    pub fn from_parts(auth_use_case: Option<A>, email_validator: Option<E>) -> Self {
        Self {
            auth_use_case,
            email_validator,
        }
    }

    pub fn with_email_validator<F>(self, email_validator: F) -> LoginRouter<A, F>
    where
        F: EmailValidator,
    {
        LoginRouter {
            auth_use_case: self.auth_use_case,
            email_validator: Some(email_validator),
        }
    }

    /// Handle a login request.
    ///
    /// Never fails: every error path is turned into a response. Causes of
    /// 500 responses are logged, not returned to the client.
    #[tracing::instrument(name = "LoginRouter::route", skip_all)]
    pub async fn route(&self, request: Option<HttpRequest>) -> HttpResponse {
        let Some(body) = request.and_then(|request| request.body) else {
            tracing::error!("Login request has no body");
            return HttpResponse::server_error();
        };

        let Some(email) = non_empty(body.email) else {
            return HttpResponse::error(ApiError::MissingParameter(param::EMAIL));
        };
        let Some(password) = non_empty(body.password) else {
            return HttpResponse::error(ApiError::MissingParameter(param::PASSWORD));
        };

        if let Some(email_validator) = &self.email_validator {
            match email_validator.is_valid(email.expose_secret()).await {
                Ok(true) => {}
                Ok(false) => return HttpResponse::error(ApiError::InvalidParameter(param::EMAIL)),
                Err(e) => {
                    tracing::error!(error = %e, "Email validator failed");
                    return HttpResponse::server_error();
                }
            }
        }

        let Some(auth_use_case) = &self.auth_use_case else {
            tracing::error!("No authentication use case configured");
            return HttpResponse::server_error();
        };

        let credentials = Credentials::from((email, password));
        match auth_use_case.authenticate(&credentials).await {
            Ok(Some(access_token)) => HttpResponse::ok(access_token),
            Ok(None) => HttpResponse::unauthorized(),
            Err(e) => {
                tracing::error!(error = %e, "Authentication failed");
                HttpResponse::server_error()
            }
        }
    }
}

fn non_empty(value: Option<Secret<String>>) -> Option<Secret<String>> {
    value.filter(|v| !v.expose_secret().is_empty())
}
