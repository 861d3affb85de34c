use tokio::net::TcpListener;
use tracing::info;

use pets_core::{Pipeline, PipelineConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    info!("started logging");

    let config = PipelineConfig {
        default_address: std::env::var("PETS_DATA_ADDRESS").ok(),
        timeout: None,
    };
    let pipeline = Pipeline::new(config)?;

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "serving");
    pets_web::run(listener, pipeline).await?;
    Ok(())
}
