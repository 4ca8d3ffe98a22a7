use coastwatch::{AppConfig, AppState, web};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!("Beach Safety API starting with {:?}", config);

    let state = AppState::new(config)?;
    web::run(state).await
}
