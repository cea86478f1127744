//! Forecast models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RiskLevel;

/// Weather inputs used for one forecast point, rounded to one decimal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastWeather {
    pub wind_speed_mps: f64,
    pub wave_height_m: f64,
    pub precipitation_mm: f64,
}

/// One hourly projected risk evaluation within the 24-hour horizon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub timestamp: DateTime<Utc>,
    /// Hour of day, 0-23
    pub hour: u32,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub weather: ForecastWeather,
}
