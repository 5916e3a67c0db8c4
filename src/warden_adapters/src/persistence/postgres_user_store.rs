use std::sync::Arc;

use secrecy::{ExposeSecret, Secret};
use sqlx::{Pool, Postgres};
use warden_application::Collaborator;
use warden_core::{
    AccessToken, TokenPersister, TokenPersisterError, User, UserId, UserLookup, UserLookupError,
};

/// User lookup and token persistence over the `users` table.
#[derive(Clone)]
pub struct PostgresUserStore {
    pool: sqlx::PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }

    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    pub async fn add_user(
        &self,
        email: &str,
        password_hash: Secret<String>,
    ) -> Result<User, sqlx::Error> {
        let user = User::new(UserId::generate(), password_hash);

        sqlx::query(
            r#"
                INSERT INTO users (id, email, password_hash)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(user.id().as_str())
        .bind(email)
        .bind(user.password_hash().expose_secret().as_str())
        .execute(&self.pool)
        .await?;

        Ok(user)
    }

    #[tracing::instrument(name = "Reading access token from PostgreSQL", skip_all)]
    pub async fn access_token_for(&self, user_id: &UserId) -> Result<Option<String>, sqlx::Error> {
        let row: Option<(Option<String>,)> =
            sqlx::query_as("SELECT access_token FROM users WHERE id = $1")
                .bind(user_id.as_str())
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.and_then(|(token,)| token))
    }
}

#[async_trait::async_trait]
impl UserLookup for PostgresUserStore {
    #[tracing::instrument(name = "Loading user from PostgreSQL", skip_all)]
    async fn load(&self, email: &str) -> Result<Option<User>, UserLookupError> {
        let row: Option<(String, String)> = sqlx::query_as(
            r#"
                SELECT id, password_hash
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserLookupError::DatabaseError(e.to_string()))?;

        Ok(row.map(|(id, password_hash)| User::new(UserId::new(id), Secret::from(password_hash))))
    }
}

#[async_trait::async_trait]
impl TokenPersister for PostgresUserStore {
    #[tracing::instrument(name = "Storing access token in PostgreSQL", skip_all)]
    async fn update(&self, user: &User, token: &AccessToken) -> Result<(), TokenPersisterError> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET access_token = $1
                WHERE id = $2
            "#,
        )
        .bind(token.as_str())
        .bind(user.id().as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| TokenPersisterError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TokenPersisterError::UserNotFound);
        }

        Ok(())
    }
}

impl Collaborator for PostgresUserStore {
    fn user_lookup(self: Arc<Self>) -> Option<Arc<dyn UserLookup>> {
        Some(self)
    }

    fn token_persister(self: Arc<Self>) -> Option<Arc<dyn TokenPersister>> {
        Some(self)
    }
}
