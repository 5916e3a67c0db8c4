//! Recording collaborator doubles shared by the use case tests.

use std::sync::{Arc, Mutex};

use secrecy::{ExposeSecret, Secret};
use warden_core::{
    AccessToken, CredentialVerifier, CredentialVerifierError, TokenIssuer, TokenIssuerError,
    TokenPersister, TokenPersisterError, User, UserId, UserLookup, UserLookupError,
};

pub const EMAIL: &str = "any_email@mail.com";
pub const PASSWORD: &str = "any_password";
pub const HASH: &str = "hashed_password";
pub const USER_ID: &str = "any_id";
pub const TOKEN: &str = "any_token";

pub fn user() -> User {
    User::new(UserId::new(USER_ID), Secret::new(HASH.to_owned()))
}

#[derive(Clone)]
pub struct MockUserLookup {
    pub user: Option<User>,
    pub fail: bool,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockUserLookup {
    pub fn returning(user: Option<User>) -> Self {
        Self {
            user,
            fail: false,
            calls: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            user: None,
            fail: true,
            calls: Arc::default(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl UserLookup for MockUserLookup {
    async fn load(&self, email: &str) -> Result<Option<User>, UserLookupError> {
        self.calls.lock().unwrap().push(email.to_owned());
        if self.fail {
            return Err(UserLookupError::DatabaseError("connection refused".to_owned()));
        }
        Ok(self.user.clone())
    }
}

#[derive(Clone)]
pub struct MockCredentialVerifier {
    pub is_valid: bool,
    pub fail: bool,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockCredentialVerifier {
    pub fn returning(is_valid: bool) -> Self {
        Self {
            is_valid,
            fail: false,
            calls: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            is_valid: false,
            fail: true,
            calls: Arc::default(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl CredentialVerifier for MockCredentialVerifier {
    async fn compare(
        &self,
        plain: &Secret<String>,
        hash: &Secret<String>,
    ) -> Result<bool, CredentialVerifierError> {
        self.calls.lock().unwrap().push((
            plain.expose_secret().clone(),
            hash.expose_secret().clone(),
        ));
        if self.fail {
            return Err(CredentialVerifierError::MalformedHash("bad hash".to_owned()));
        }
        Ok(self.is_valid)
    }
}

#[derive(Clone)]
pub struct MockTokenIssuer {
    pub token: String,
    pub fail: bool,
    pub calls: Arc<Mutex<Vec<UserId>>>,
}

impl MockTokenIssuer {
    pub fn returning(token: &str) -> Self {
        Self {
            token: token.to_owned(),
            fail: false,
            calls: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            token: String::new(),
            fail: true,
            calls: Arc::default(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl TokenIssuer for MockTokenIssuer {
    async fn generate(&self, user_id: &UserId) -> Result<AccessToken, TokenIssuerError> {
        self.calls.lock().unwrap().push(user_id.clone());
        if self.fail {
            return Err(TokenIssuerError::TokenError("signing failed".to_owned()));
        }
        AccessToken::parse(self.token.clone())
            .map_err(|e| TokenIssuerError::UnexpectedError(e.to_string()))
    }
}

#[derive(Clone, Default)]
pub struct MockTokenPersister {
    pub fail: bool,
    pub calls: Arc<Mutex<Vec<(UserId, AccessToken)>>>,
}

impl MockTokenPersister {
    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: Arc::default(),
        }
    }
}

#[async_trait::async_trait]
impl TokenPersister for MockTokenPersister {
    async fn update(&self, user: &User, token: &AccessToken) -> Result<(), TokenPersisterError> {
        self.calls
            .lock()
            .unwrap()
            .push((user.id().clone(), token.clone()));
        if self.fail {
            return Err(TokenPersisterError::DatabaseError("write failed".to_owned()));
        }
        Ok(())
    }
}
