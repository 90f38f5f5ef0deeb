use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use navroute::offline::{OfflineRoutingBackend, StaticResponseEngine};
use navroute::routing::{RoutingMultiplexer, RoutingPreferences};
use navroute::valhalla::{ValhallaClient, ValhallaClientConfig};
use navroute::web::{AppState, create_router};

/// Default listen address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("navroute=info")),
        )
        .init();

    // Offline mode and the online endpoint come from the environment
    let preferences = RoutingPreferences::from_env();
    let api = preferences.valhalla_config();
    info!(
        base_url = %api.base_url,
        api_key = api.api_key.is_some(),
        offline = preferences.offline_mode(),
        "routing preferences loaded"
    );

    let online = ValhallaClient::new(ValhallaClientConfig::default(), preferences.clone())
        .expect("Failed to create routing client");

    // A canned response stands in for a local engine during development
    let offline = match std::env::var("NAVROUTE_OFFLINE_FIXTURE") {
        Ok(path) => {
            let engine =
                StaticResponseEngine::from_file(&path).expect("Failed to load offline fixture");
            info!(%path, "offline routing from fixture");
            OfflineRoutingBackend::with_engine(engine)
        }
        Err(_) => {
            warn!("no offline engine configured; offline routes will be empty");
            OfflineRoutingBackend::placeholder()
        }
    };

    let routing = RoutingMultiplexer::new(preferences, online, offline);
    let app = create_router(AppState::new(routing));

    let addr: SocketAddr = std::env::var("NAVROUTE_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .expect("Invalid NAVROUTE_ADDR");

    info!(%addr, "navroute listening");
    info!("  GET    /health               - Health check");
    info!("  POST   /routes               - Compute and store a route");
    info!("  GET    /routes/:id           - Fetch a stored route");
    info!("  DELETE /routes[/:id]         - Remove stored routes");
    info!("  PUT    /preferences/offline  - Toggle offline routing");
    info!("  *      /profiles/:mode       - Costing profile per mode");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
