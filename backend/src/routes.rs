//! Route definitions for the Marine Safety Dashboard

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/sites", site_routes())
        .nest("/alerts", alert_routes())
        .route("/dashboard", get(handlers::get_summary))
        .route("/refresh", post(handlers::refresh_now))
}

/// Work-site routes
fn site_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_sites))
        .route("/:site_id", get(handlers::get_site))
        .route("/:site_id/forecast", get(handlers::get_site_forecast))
}

/// Alert feed routes
fn alert_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_alerts))
        .route("/:alert_id/read", post(handlers::mark_alert_read))
        .route("/:alert_id/acknowledge", post(handlers::acknowledge_alert))
}
