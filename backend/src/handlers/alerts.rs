//! Alert feed handlers

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::Alert;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::AppState;

#[derive(Serialize)]
pub struct AlertFeed {
    pub alerts: Vec<Alert>,
    pub unread_count: usize,
    pub active_count: usize,
}

#[derive(Deserialize)]
pub struct AcknowledgeRequest {
    pub acknowledged_by: String,
}

/// List the rolling alert log, newest first
pub async fn list_alerts(State(state): State<AppState>) -> Json<AlertFeed> {
    let store = state.store.read().await;
    Json(AlertFeed {
        alerts: store.alerts.entries().to_vec(),
        unread_count: store.alerts.unread_count(),
        active_count: store.alerts.active_count(),
    })
}

/// Mark one alert as read
pub async fn mark_alert_read(
    State(state): State<AppState>,
    Path(alert_id): Path<Uuid>,
) -> AppResult<Json<Alert>> {
    let mut store = state.store.write().await;
    let alert = store
        .alerts
        .mark_read(alert_id, Utc::now())
        .ok_or_else(|| AppError::NotFound("Alert".to_string()))?;
    Ok(Json(alert.clone()))
}

/// Acknowledge one alert, recording who acknowledged it
pub async fn acknowledge_alert(
    State(state): State<AppState>,
    Path(alert_id): Path<Uuid>,
    Json(request): Json<AcknowledgeRequest>,
) -> AppResult<Json<Alert>> {
    if request.acknowledged_by.trim().is_empty() {
        return Err(AppError::Validation {
            field: "acknowledged_by".to_string(),
            message: "Acknowledger name is required".to_string(),
        });
    }

    let mut store = state.store.write().await;
    let alert = store
        .alerts
        .acknowledge(alert_id, request.acknowledged_by.trim(), Utc::now())
        .ok_or_else(|| AppError::NotFound("Alert".to_string()))?;
    Ok(Json(alert.clone()))
}
