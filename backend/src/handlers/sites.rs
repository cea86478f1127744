//! Work-site handlers: live risk and forecasts

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use shared::{synthesize_forecast, ForecastPoint, SiteWithRisk};

use crate::error::{AppError, AppResult};
use crate::services::scenario;
use crate::AppState;

/// List all sites with their latest risk analysis
pub async fn list_sites(State(state): State<AppState>) -> Json<Vec<SiteWithRisk>> {
    let store = state.store.read().await;
    Json(store.sites_with_risk.clone())
}

/// Get one site with its latest risk analysis
pub async fn get_site(
    State(state): State<AppState>,
    Path(site_id): Path<String>,
) -> AppResult<Json<SiteWithRisk>> {
    let store = state.store.read().await;
    let site = store
        .site(&site_id)
        .ok_or_else(|| AppError::NotFound("Work site".to_string()))?;
    Ok(Json(site.clone()))
}

/// Synthesize the 24-hour risk forecast for one site
///
/// Fails with a not-found error when the site has no baseline scenario;
/// a forecast is never guessed from defaults.
pub async fn get_site_forecast(
    State(state): State<AppState>,
    Path(site_id): Path<String>,
) -> AppResult<Json<Vec<ForecastPoint>>> {
    let site = state
        .sites
        .iter()
        .find(|s| s.id == site_id)
        .ok_or_else(|| AppError::NotFound("Work site".to_string()))?;
    let scenario = scenario::scenario_for(&site.id)
        .ok_or_else(|| AppError::NotFound("Baseline conditions for site".to_string()))?;

    let mut rng = state.rng.lock().await;
    let forecast = synthesize_forecast(
        &site.id,
        &scenario.baseline,
        site.site_type,
        Utc::now(),
        &mut *rng,
    );
    Ok(Json(forecast))
}
