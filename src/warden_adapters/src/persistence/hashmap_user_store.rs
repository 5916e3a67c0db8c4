use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use secrecy::Secret;
use thiserror::Error;
use warden_application::Collaborator;
use warden_core::{
    AccessToken, TokenPersister, TokenPersisterError, User, UserId, UserLookup, UserLookupError,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashMapUserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
}

#[derive(Clone)]
struct StoredUser {
    user: User,
    access_token: Option<AccessToken>,
}

/// In-memory user store keyed by email. Serves as both user lookup and
/// token persister.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<String, StoredUser>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn add_user(
        &self,
        email: &str,
        password_hash: Secret<String>,
    ) -> Result<User, HashMapUserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(email) {
            return Err(HashMapUserStoreError::UserAlreadyExists);
        }

        let user = User::new(UserId::generate(), password_hash);
        users.insert(
            email.to_owned(),
            StoredUser {
                user: user.clone(),
                access_token: None,
            },
        );
        Ok(user)
    }

    pub async fn access_token_for(&self, user_id: &UserId) -> Option<AccessToken> {
        let users = self.users.read().await;
        users
            .values()
            .find(|stored| stored.user.id() == user_id)
            .and_then(|stored| stored.access_token.clone())
    }
}

#[async_trait::async_trait]
impl UserLookup for HashMapUserStore {
    async fn load(&self, email: &str) -> Result<Option<User>, UserLookupError> {
        let users = self.users.read().await;
        Ok(users.get(email).map(|stored| stored.user.clone()))
    }
}

#[async_trait::async_trait]
impl TokenPersister for HashMapUserStore {
    async fn update(&self, user: &User, token: &AccessToken) -> Result<(), TokenPersisterError> {
        let mut users = self.users.write().await;
        let stored = users
            .values_mut()
            .find(|stored| stored.user.id() == user.id())
            .ok_or(TokenPersisterError::UserNotFound)?;

        stored.access_token = Some(token.clone());
        Ok(())
    }
}

impl Collaborator for HashMapUserStore {
    fn user_lookup(self: Arc<Self>) -> Option<Arc<dyn UserLookup>> {
        Some(self)
    }

    fn token_persister(self: Arc<Self>) -> Option<Arc<dyn TokenPersister>> {
        Some(self)
    }
}
