pub mod domain;
pub mod error;
pub mod http_abstraction;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    access_token::{AccessToken, AccessTokenError},
    credentials::Credentials,
    user::{User, UserId},
};

pub use error::{ApiError, param};

pub use ports::{
    repositories::{TokenPersister, TokenPersisterError, UserLookup, UserLookupError},
    services::{
        CredentialVerifier, CredentialVerifierError, EmailValidator, EmailValidatorError,
        TokenIssuer, TokenIssuerError,
    },
};

pub use http_abstraction::{
    HttpRequest, HttpResponse, HttpResponseBuilder, LoginRequestBody, ResponseBody,
};
