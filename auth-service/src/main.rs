use color_eyre::eyre::Result;
use tokio::net::TcpListener;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use warden::{AuthService, adapters::config::AuthServiceSetting, dependency_bundle, login_router};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let config = AuthServiceSetting::load()?;

    // Collaborators are picked from configuration and validated once here
    let bundle = dependency_bundle(&config).await?;
    let login = login_router(bundle, config.auth.validate_email)?;

    let allowed_origins =
        (!config.auth.allowed_origins.is_empty()).then(|| config.auth.allowed_origins.clone());

    let listener = TcpListener::bind(&config.application.address).await?;
    tracing::info!("Starting auth service...");

    AuthService::new(login)
        .run_standalone(listener, allowed_origins)
        .await?;

    Ok(())
}

fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
