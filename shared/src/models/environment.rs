//! Environment reading models
//!
//! One `EnvironmentReading` is produced per site per refresh cycle. In
//! production this would come from weather/ocean telemetry; any source
//! works as long as it supplies these fields in the stated units.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Atmospheric conditions at a work site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherData {
    pub wind_speed_mps: f64,
    pub wind_direction_deg: f64,
    pub precipitation_mm: f64,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub visibility_km: f64,
}

/// Sea-state conditions at a work site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OceanData {
    pub wave_height_m: f64,
    pub wave_period_s: f64,
    pub tidal_current_knots: f64,
    pub water_temperature_celsius: f64,
}

/// A full environment snapshot for one site at one point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentReading {
    pub site_id: String,
    pub timestamp: DateTime<Utc>,
    pub weather: WeatherData,
    pub ocean: OceanData,
}
