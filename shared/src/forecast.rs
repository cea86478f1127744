//! 24-hour forecast synthesis
//!
//! Projects a site's baseline conditions forward one hour at a time,
//! applying a diurnal modulation curve plus bounded random jitter, and
//! re-runs the risk aggregator at every point. The jitter makes each
//! call stochastic; seed the rng for reproducible curves.

use std::f64::consts::PI;

use chrono::{DateTime, Duration, Timelike, Utc};
use rand::Rng;

use crate::models::{
    EnvironmentReading, ForecastPoint, ForecastWeather, OceanData, WeatherData, WorkSiteType,
};
use crate::scoring::analyze_risk;

/// Number of hourly points in a synthesized forecast
pub const FORECAST_HORIZON_HOURS: usize = 24;

/// Baseline weather and sea conditions a forecast projects from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineConditions {
    pub wind_speed_mps: f64,
    pub precipitation_mm: f64,
    pub visibility_km: f64,
    pub wave_height_m: f64,
    pub tidal_current_knots: f64,
}

/// Diurnal modulation applied to wind and wave baselines
///
/// Peaks at midday (factor 1.3) and bottoms out around midnight
/// (factor 0.7), modeling stronger daytime winds and calmer nights.
pub fn diurnal_multiplier(hour: u32) -> f64 {
    1.0 + 0.3 * ((hour as f64 - 6.0) * PI / 12.0).sin()
}

fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Synthesize 24 hourly forecast points starting from `start`
///
/// Wind and wave follow the diurnal curve with bounded jitter (plus or
/// minus 2 m/s and 0.25 m respectively); precipitation is scaled by a
/// uniform factor in [1.0, 1.5]; visibility and tidal current are held
/// at baseline. Each synthetic reading runs through the aggregator for
/// its score and level.
pub fn synthesize_forecast<R: Rng + ?Sized>(
    site_id: &str,
    baseline: &BaselineConditions,
    site_type: WorkSiteType,
    start: DateTime<Utc>,
    rng: &mut R,
) -> Vec<ForecastPoint> {
    let mut points = Vec::with_capacity(FORECAST_HORIZON_HOURS);

    for offset in 0..FORECAST_HORIZON_HOURS {
        let time = start + Duration::hours(offset as i64);
        let hour = time.hour();
        let multiplier = diurnal_multiplier(hour);

        let wind_speed =
            (baseline.wind_speed_mps * multiplier + rng.gen_range(-2.0..=2.0)).max(0.0);
        let wave_height =
            (baseline.wave_height_m * multiplier + rng.gen_range(-0.25..=0.25)).max(0.0);
        let precipitation = (baseline.precipitation_mm * rng.gen_range(1.0..=1.5)).max(0.0);

        let reading = EnvironmentReading {
            site_id: site_id.to_string(),
            timestamp: time,
            weather: WeatherData {
                wind_speed_mps: wind_speed,
                wind_direction_deg: 0.0,
                precipitation_mm: precipitation,
                temperature_celsius: 20.0,
                humidity_percent: 70.0,
                visibility_km: baseline.visibility_km,
            },
            ocean: OceanData {
                wave_height_m: wave_height,
                wave_period_s: 6.0,
                tidal_current_knots: baseline.tidal_current_knots,
                water_temperature_celsius: 20.0,
            },
        };

        let risk = analyze_risk(&reading, site_type, rng);

        points.push(ForecastPoint {
            timestamp: time,
            hour,
            risk_score: risk.overall_score,
            risk_level: risk.risk_level,
            weather: ForecastWeather {
                wind_speed_mps: round_1dp(wind_speed),
                wave_height_m: round_1dp(wave_height),
                precipitation_mm: round_1dp(precipitation),
            },
        });
    }

    points
}
