use std::error::Error;

use dotenvy::dotenv;
use log::info;

use speedlead::{create_router, AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    env_logger::init();

    let config = AppConfig::from_env()?;
    let addr = config.bind_address();

    let state = AppState::new(config)?;
    info!(
        "loaded {} leads, {} notifications, {} communications",
        state.data.leads.len(),
        state.data.notifications.len(),
        state.data.communications.len()
    );

    let app = create_router(state);

    info!("🚀 Speed-to-Lead dashboard listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
