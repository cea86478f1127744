//! Dashboard summary and manual refresh handlers

use axum::{extract::State, Json};
use shared::DashboardSummary;

use crate::services::monitor;
use crate::AppState;

/// Fleet-wide risk counts for the dashboard header
pub async fn get_summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    let store = state.store.read().await;
    Json(store.summary())
}

/// Run one evaluation cycle immediately instead of waiting for the timer
pub async fn refresh_now(State(state): State<AppState>) -> Json<DashboardSummary> {
    monitor::run_refresh_cycle(&state).await;
    let store = state.store.read().await;
    Json(store.summary())
}
