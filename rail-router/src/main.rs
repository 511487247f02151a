use std::process::ExitCode;

use rail_router::config::ServerConfig;
use rail_router::network::NetworkSnapshot;
use rail_router::router::RouterConfig;
use rail_router::web::{AppState, create_router};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Load line data (fail fast if unavailable)
    let network = match NetworkSnapshot::load(&config.lines_path) {
        Ok(network) => network,
        Err(e) => {
            error!(error = %e, "Failed to load line data");
            return ExitCode::FAILURE;
        }
    };
    let graph = network.current().await;
    info!(
        stations = graph.station_names().len(),
        nodes = graph.len(),
        edges = graph.edge_count(),
        "Loaded rail network"
    );
    drop(graph);

    // Spawn background task to rebuild the graph from the line file
    if let Some(period) = config.refresh_interval {
        let network_refresh = network.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                if let Err(e) = network_refresh.refresh().await {
                    warn!(error = %e, "Failed to refresh line data, keeping previous graph");
                }
            }
        });
    }

    let state = AppState::new(network, RouterConfig::default());
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!(addr = %config.addr, "Rail router listening");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
