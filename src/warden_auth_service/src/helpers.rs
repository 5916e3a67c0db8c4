use std::sync::Arc;

use redis::{Client, RedisResult};
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};
use thiserror::Error;
use tokio::sync::RwLock;
use warden_adapters::{
    authentication::{Argon2CredentialVerifier, JwtConfig, JwtTokenIssuer},
    config::{AuthServiceSetting, PostgresSetting, RedisSetting, TokenStoreKind, UserStoreKind},
    handlers::LoginRouter,
    persistence::{HashMapUserStore, PostgresUserStore, RedisTokenStore},
    validation::RegexEmailValidator,
};
use warden_application::{AuthError, Collaborator, DependencyBundle, DynAuthUseCase};

/// Failures while wiring the service from its settings.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Missing `{0}` settings")]
    MissingSetting(&'static str),
    #[error("Postgres error: {0}")]
    Postgres(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
    #[error("Invalid authentication dependencies: {0}")]
    Dependencies(#[from] AuthError),
    #[error("Invalid email pattern: {0}")]
    EmailPattern(String),
}

/// Connect to Postgres and run all pending migrations
pub async fn configure_postgresql(setting: &PostgresSetting) -> Result<PgPool, SetupError> {
    let pg_pool = get_postgres_pool(setting.url.expose_secret()).await?;

    sqlx::migrate!("../../auth-service/migrations")
        .run(&pg_pool)
        .await?;

    Ok(pg_pool)
}

/// Open a Redis connection to the configured host
pub fn configure_redis(setting: &RedisSetting) -> Result<redis::Connection, SetupError> {
    Ok(get_redis_client(&setting.host_name)?.get_connection()?)
}

/// Create a PostgreSQL connection pool
pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(url).await
}

/// Create a Redis client
pub fn get_redis_client(redis_hostname: &str) -> RedisResult<Client> {
    let redis_url = format!("redis://{}/", redis_hostname);
    redis::Client::open(redis_url)
}

/// Build the collaborator bundle selected by the settings.
///
/// The user store serves as user lookup, and as token persister when
/// `token_store` is `users`.
#[tracing::instrument(name = "Build dependency bundle", skip_all)]
pub async fn dependency_bundle(
    settings: &AuthServiceSetting,
) -> Result<DependencyBundle, SetupError> {
    let user_store: Arc<dyn Collaborator> = match settings.auth.user_store {
        UserStoreKind::Memory => {
            tracing::warn!("Using the in-memory user store; it starts empty");
            Arc::new(HashMapUserStore::new())
        }
        UserStoreKind::Postgres => {
            let setting = settings
                .postgres
                .as_ref()
                .ok_or(SetupError::MissingSetting("postgres"))?;
            Arc::new(PostgresUserStore::new(configure_postgresql(setting).await?))
        }
    };

    let bundle = DependencyBundle::new()
        .with_user_lookup(user_store.clone())
        .with_credential_verifier(Arc::new(Argon2CredentialVerifier::new()))
        .with_token_issuer(Arc::new(JwtTokenIssuer::new(JwtConfig::from(
            &settings.auth.jwt,
        ))));

    let bundle = match settings.auth.token_store {
        TokenStoreKind::None => bundle,
        TokenStoreKind::Users => bundle.with_token_persister(user_store),
        TokenStoreKind::Redis => {
            let setting = settings
                .redis
                .as_ref()
                .ok_or(SetupError::MissingSetting("redis"))?;
            let conn = Arc::new(RwLock::new(configure_redis(setting)?));
            let ttl = settings.auth.jwt.time_to_live.max(0) as u64;
            bundle.with_token_persister(Arc::new(RedisTokenStore::new(conn, ttl)))
        }
    };

    Ok(bundle)
}

/// Resolve the bundle into a use case and put it behind a login handler.
pub fn login_router(
    bundle: DependencyBundle,
    validate_email: bool,
) -> Result<LoginRouter<DynAuthUseCase, RegexEmailValidator>, SetupError> {
    let use_case = DynAuthUseCase::try_from(bundle)?;
    let email_validator = if validate_email {
        Some(RegexEmailValidator::new().map_err(|e| SetupError::EmailPattern(e.to_string()))?)
    } else {
        None
    };

    Ok(LoginRouter::from_parts(Some(use_case), email_validator))
}
