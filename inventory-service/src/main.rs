mod api;
mod inventory;

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "inventory-service")]
struct Args {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    #[arg(long, env = "PORT", default_value = "8000")]
    port: u16,

    /// Answer 404 when an order names an unknown SKU.
    #[arg(long, env = "REPORT_MISSING_SKU")]
    report_missing_sku: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let app_state = api::AppState {
        inventory: Arc::new(inventory::Inventory::new()),
        report_missing_sku: args.report_missing_sku,
    };

    let app = api::create_router(app_state);
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", args.host, args.port)).await?;

    info!("Inventory service started on {}:{}", args.host, args.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Inventory service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
