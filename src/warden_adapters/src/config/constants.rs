pub mod env {
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const CONFIG_DIR_ENV_VAR: &str = "WARDEN_CONFIG_DIR";
    /// Prefix of variables overriding file settings, e.g. `WARDEN__AUTH__JWT__SECRET`.
    pub const SETTINGS_ENV_PREFIX: &str = "WARDEN";
    pub const SETTINGS_ENV_SEPARATOR: &str = "__";
}

pub const DEFAULT_CONFIG_DIR: &str = "config";
pub const DEFAULT_ENVIRONMENT: &str = "local";

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const JWT_SECRET: &str = "test-secret";
    pub const JWT_TIME_TO_LIVE: i64 = 600;
}
