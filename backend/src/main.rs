//! Marine Safety Dashboard - Backend Server
//!
//! Continuous risk evaluation for offshore work sites: factor scoring,
//! weighted aggregation per work type, 24-hour forecasts, and alerting
//! on risk level transitions.

use axum::{routing::get, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod routes;
mod services;
mod state;

pub use config::Config;

use shared::Site;
use state::DashboardState;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sites: Arc<Vec<Site>>,
    pub store: Arc<RwLock<DashboardState>>,
    pub rng: Arc<Mutex<StdRng>>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "msd_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Marine Safety Dashboard Server");
    tracing::info!("Environment: {}", config.environment);

    // Fixed seed gives reproducible readings for demos and tests
    let rng = match config.monitor.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let state = AppState {
        sites: Arc::new(services::scenario::demo_sites()),
        store: Arc::new(RwLock::new(DashboardState::new())),
        rng: Arc::new(Mutex::new(rng)),
        config: Arc::new(config.clone()),
    };

    // Evaluate all sites once before accepting traffic
    services::monitor::run_refresh_cycle(&state).await;
    tokio::spawn(services::monitor::run_scheduler(state.clone()));

    // Build application
    let app = create_app(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Marine Safety Dashboard API v1.0"
}
