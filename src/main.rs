use anyhow::Result;
use gymfinder::{create_router, utils, AppConfig, AppState};
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    utils::init_logging(&config)?;

    let address = config.server_address();
    let shared_state = Arc::new(AppState::new(config));
    let app = create_router(shared_state);

    let listener = TcpListener::bind(&address).await?;
    info!("GymFinder running on http://{}", address);
    axum::serve(listener, app).await?;

    Ok(())
}
