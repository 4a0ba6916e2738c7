use std::env;

use turncal_engine::api::{AppState, create_router};
use turncal_engine::config::{ConfigLoader, PayConfig};
use turncal_engine::engine::PayEngine;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "turncal_engine=info".into()),
        )
        .init();

    let config = match env::var("TURNCAL_CONFIG_DIR") {
        Ok(dir) => {
            tracing::info!(config_dir = %dir, "Loading pay configuration");
            ConfigLoader::load(&dir)?.into_config()
        }
        Err(_) => PayConfig::standard(),
    };

    let state = AppState::new(PayEngine::new(config));
    let app = create_router(state);

    let addr = env::var("TURNCAL_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Shift book listening");

    axum::serve(listener, app).await?;
    Ok(())
}
