mod auth_service;
mod helpers;
mod tracing;

pub use auth_service::AuthService;
pub use helpers::{
    SetupError, configure_postgresql, configure_redis, dependency_bundle, get_postgres_pool,
    get_redis_client, login_router,
};
