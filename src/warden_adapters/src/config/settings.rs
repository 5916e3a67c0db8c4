use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{DEFAULT_CONFIG_DIR, DEFAULT_ENVIRONMENT, env};
use crate::authentication::JwtConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct AuthServiceSetting {
    pub application: ApplicationSetting,
    pub auth: AuthSetting,
    #[serde(default)]
    pub postgres: Option<PostgresSetting>,
    #[serde(default)]
    pub redis: Option<RedisSetting>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSetting {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSetting {
    pub jwt: JwtSetting,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
    #[serde(default)]
    pub user_store: UserStoreKind,
    #[serde(default)]
    pub token_store: TokenStoreKind,
    #[serde(default = "default_validate_email")]
    pub validate_email: bool,
}

fn default_validate_email() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSetting {
    pub secret: Secret<String>,
    pub time_to_live: i64,
}

impl From<&JwtSetting> for JwtConfig {
    fn from(setting: &JwtSetting) -> Self {
        JwtConfig {
            jwt_secret: setting.secret.clone(),
            token_ttl_in_seconds: setting.time_to_live,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSetting {
    pub url: Secret<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisSetting {
    pub host_name: String,
}

/// Where users are looked up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStoreKind {
    #[default]
    Memory,
    Postgres,
}

/// Where issued tokens are recorded. `users` writes them back into the
/// configured user store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenStoreKind {
    #[default]
    None,
    Users,
    Redis,
}

/// Origins allowed to call the service cross-origin.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AuthServiceSetting {
    /// Load settings from `.env`, the config directory and `WARDEN__*`
    /// environment variables, in increasing precedence.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config_dir = std::env::var(env::CONFIG_DIR_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));
        let environment = std::env::var(env::APP_ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_owned());

        Self::load_from(&config_dir, &environment)
    }

    pub fn load_from(config_dir: &Path, environment: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(config_dir.join("base")))
            .add_source(File::from(config_dir.join(environment)).required(false))
            .add_source(
                Environment::with_prefix(env::SETTINGS_ENV_PREFIX)
                    .prefix_separator(env::SETTINGS_ENV_SEPARATOR)
                    .separator(env::SETTINGS_ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("auth.allowed_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
