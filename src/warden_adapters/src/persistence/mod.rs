pub mod hashmap_user_store;
pub mod postgres_user_store;
pub mod redis_token_store;

pub use hashmap_user_store::{HashMapUserStore, HashMapUserStoreError};
pub use postgres_user_store::PostgresUserStore;
pub use redis_token_store::RedisTokenStore;
