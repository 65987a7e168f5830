use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use surf_server::catalog::Catalog;
use surf_server::config::SurfConfig;
use surf_server::provider::ProviderClient;
use surf_server::report::SurfReports;
use surf_server::web::{AppState, create_router};

const DEFAULT_LOG_FILTER: &str = "surf_server=debug,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = SurfConfig::from_env()?;

    // Catalog problems are fatal at startup, never at first use
    let catalog = Catalog::builtin()?;
    info!(
        "Loaded {} regions and {} spots",
        catalog.region_keys().len(),
        catalog.spot_keys().len()
    );

    let client = ProviderClient::new(config.provider, Arc::new(catalog))?;
    let state = AppState::new(SurfReports::new(client), config.api_key);
    let app = create_router(state, &config.route_prefix);

    let addr = config.bind_addr;
    let prefix = &config.route_prefix;
    println!("Surf API listening on http://{addr}");
    println!();
    println!("API Endpoints (x-api-key required):");
    println!("  GET  {prefix}/rat         - Refresh provider login");
    println!("  GET  {prefix}/conditions  - Regional conditions (spot, days, now)");
    println!("  GET  {prefix}/buoy        - Latest buoy reading (spot)");
    println!("  GET  {prefix}/wind        - Wind forecast (spot, days <= 1)");
    println!("  GET  {prefix}/wave        - Wave forecast (spot, days, interval_hours)");
    println!("  GET  {prefix}/rating      - Surf rating forecast (spot, days, interval_hours)");
    println!("  GET  {prefix}/tide        - Tide predictions (spot, days)");
    println!("  GET  {prefix}/report      - Wave and wind report (spot, days)");
    println!("  GET  /health              - Health check");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
