#![forbid(unsafe_code)]
use anyhow::Result;
use nutri_booking::config::SiteConfig;
use nutri_booking::site::{self, SiteApp};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::filter::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = dotenvy::dotenv() {
        debug!("No .env loaded: {}", e);
    }

    let config = SiteConfig::from_env()?;
    let listen_addr = config.listen_addr();
    info!(
        "Booking hand-off to {}/{}",
        config.messaging_base_url, config.whatsapp_recipient
    );

    let app = site::router(Arc::new(SiteApp::new(config)));

    info!("Starting server on {}", listen_addr);
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
