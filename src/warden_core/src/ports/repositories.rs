use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{access_token::AccessToken, user::User};

// UserLookup port trait and errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserLookupError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Resolves an email address to a user record.
///
/// A missing user is `Ok(None)`, not an error.
#[async_trait]
pub trait UserLookup: Send + Sync {
    async fn load(&self, email: &str) -> Result<Option<User>, UserLookupError>;
}

#[async_trait]
impl<T: UserLookup + ?Sized> UserLookup for Arc<T> {
    async fn load(&self, email: &str) -> Result<Option<User>, UserLookupError> {
        (**self).load(email).await
    }
}

// TokenPersister port trait and errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenPersisterError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("User not found")]
    UserNotFound,
}

/// Records an issued access token against its user.
#[async_trait]
pub trait TokenPersister: Send + Sync {
    async fn update(&self, user: &User, token: &AccessToken) -> Result<(), TokenPersisterError>;
}

#[async_trait]
impl<T: TokenPersister + ?Sized> TokenPersister for Arc<T> {
    async fn update(&self, user: &User, token: &AccessToken) -> Result<(), TokenPersisterError> {
        (**self).update(user, token).await
    }
}
