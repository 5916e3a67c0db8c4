use std::sync::Arc;

use redis::{Commands, Connection};
use tokio::sync::RwLock;
use warden_application::Collaborator;
use warden_core::{AccessToken, TokenPersister, TokenPersisterError, User, UserId};

/// Token persister that keeps the latest token per user in Redis, expiring
/// together with the token itself.
#[derive(Clone)]
pub struct RedisTokenStore {
    conn: Arc<RwLock<Connection>>,
    token_ttl: u64,
}

impl RedisTokenStore {
    pub fn new(conn: Arc<RwLock<Connection>>, token_ttl: u64) -> Self {
        Self { conn, token_ttl }
    }

    pub async fn access_token_for(
        &self,
        user_id: &UserId,
    ) -> Result<Option<String>, TokenPersisterError> {
        let key = get_key(user_id);
        let mut conn = self.conn.write().await;
        conn.get(&key)
            .map_err(|e| TokenPersisterError::DatabaseError(e.to_string()))
    }
}

#[async_trait::async_trait]
impl TokenPersister for RedisTokenStore {
    #[tracing::instrument(name = "Storing access token in Redis", skip_all)]
    async fn update(&self, user: &User, token: &AccessToken) -> Result<(), TokenPersisterError> {
        let key = get_key(user.id());

        let mut conn = self.conn.write().await;
        conn.set_ex(key, token.as_str(), self.token_ttl)
            .map_err(|e| TokenPersisterError::DatabaseError(e.to_string()))
    }
}

impl Collaborator for RedisTokenStore {
    fn token_persister(self: Arc<Self>) -> Option<Arc<dyn TokenPersister>> {
        Some(self)
    }
}

const ACCESS_TOKEN_KEY_PREFIX: &str = "access_token:";

fn get_key(user_id: &UserId) -> String {
    format!("{}{}", ACCESS_TOKEN_KEY_PREFIX, user_id)
}
