use std::net::SocketAddr;

use tech_screen_backend::{
    config::{Config, LogFormat},
    database::pool::{create_pool, run_migrations},
    routes, AppState,
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);

    let pool = create_pool(&config).await?;
    run_migrations(&pool).await?;

    let addr: SocketAddr = config.server_address.parse()?;
    let app_state = AppState::new(config, pool);

    match app_state.config.webhook_url() {
        Some(target) => {
            info!("Checking Telegram webhook status...");
            if let Err(e) = app_state
                .telegram_service
                .ensure_webhook(&target, app_state.config.telegram_webhook_secret.as_deref())
                .await
            {
                tracing::warn!(error = %e, "could not register Telegram webhook");
            }
        }
        None => info!("PUBLIC_URL not set, leaving the Telegram webhook untouched"),
    }

    let app = routes::app(app_state);

    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
