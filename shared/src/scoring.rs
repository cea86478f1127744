//! Risk scoring engine
//!
//! Five piecewise-linear factor scorers, the per-work-type weight
//! profiles, and the aggregator that combines them into a `RiskAnalysis`.
//! All scorers are total over the real line: negative inputs clamp to the
//! zero-score floor and every output is clamped to [0, 100].

use rand::Rng;

use crate::models::{
    EnvironmentReading, FactorResult, FactorThreshold, Recommendation, RiskAnalysis,
    RiskFactorKind, RiskFactors, RiskLevel, WorkSiteType,
};

/// Overall score at or below this is classified safe
pub const SAFE_SCORE_MAX: u8 = 40;
/// Overall score at or below this (and above safe) is classified caution
pub const CAUTION_SCORE_MAX: u8 = 70;

/// Display thresholds for wind speed (m/s)
pub const WIND_THRESHOLD: FactorThreshold = FactorThreshold {
    safe: 7.0,
    caution: 13.0,
    danger: 20.0,
};
/// Display thresholds for wave height (m)
pub const WAVE_THRESHOLD: FactorThreshold = FactorThreshold {
    safe: 0.5,
    caution: 1.5,
    danger: 2.5,
};
/// Display thresholds for precipitation (mm)
pub const PRECIPITATION_THRESHOLD: FactorThreshold = FactorThreshold {
    safe: 0.0,
    caution: 3.0,
    danger: 15.0,
};
/// Display thresholds for visibility (km); descending because lower is worse
pub const VISIBILITY_THRESHOLD: FactorThreshold = FactorThreshold {
    safe: 10.0,
    caution: 5.0,
    danger: 1.0,
};
/// Display thresholds for tidal current (knots)
pub const TIDAL_THRESHOLD: FactorThreshold = FactorThreshold {
    safe: 1.0,
    caution: 2.0,
    danger: 3.0,
};

/// Factor weights for one work-site type; the five weights sum to 1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightProfile {
    pub wind: f64,
    pub wave: f64,
    pub precipitation: f64,
    pub visibility: f64,
    pub tidal: f64,
}

impl WeightProfile {
    pub fn sum(&self) -> f64 {
        self.wind + self.wave + self.precipitation + self.visibility + self.tidal
    }
}

/// Weight profile for a work-site type
///
/// Total over the closed enum; level thresholds stay global, only the
/// weighting varies by type.
pub fn weight_profile(site_type: WorkSiteType) -> WeightProfile {
    match site_type {
        WorkSiteType::Barge => WeightProfile {
            wind: 0.35,
            wave: 0.35,
            precipitation: 0.15,
            visibility: 0.10,
            tidal: 0.05,
        },
        WorkSiteType::Diving => WeightProfile {
            wind: 0.10,
            wave: 0.30,
            precipitation: 0.10,
            visibility: 0.20,
            tidal: 0.30,
        },
        WorkSiteType::Lifting => WeightProfile {
            wind: 0.45,
            wave: 0.25,
            precipitation: 0.15,
            visibility: 0.15,
            tidal: 0.00,
        },
        WorkSiteType::General => WeightProfile {
            wind: 0.30,
            wave: 0.30,
            precipitation: 0.20,
            visibility: 0.10,
            tidal: 0.10,
        },
    }
}

/// Wind speed sub-score; segments at 7/13/20 m/s
pub fn wind_score(speed_mps: f64) -> f64 {
    let v = speed_mps.max(0.0);
    if v <= 7.0 {
        v / 7.0 * 30.0
    } else if v <= 13.0 {
        30.0 + (v - 7.0) / 6.0 * 30.0
    } else if v <= 20.0 {
        60.0 + (v - 13.0) / 7.0 * 20.0
    } else {
        (80.0 + (v - 20.0) / 10.0 * 20.0).min(100.0)
    }
}

/// Wave height sub-score; segments at 0.5/1.5/2.5 m
pub fn wave_score(height_m: f64) -> f64 {
    let v = height_m.max(0.0);
    if v <= 0.5 {
        v / 0.5 * 20.0
    } else if v <= 1.5 {
        20.0 + (v - 0.5) * 30.0
    } else if v <= 2.5 {
        50.0 + (v - 1.5) * 25.0
    } else {
        (75.0 + (v - 2.5) / 1.5 * 25.0).min(100.0)
    }
}

/// Precipitation sub-score; zero rain scores zero, segments at 3/15 mm
pub fn precipitation_score(rain_mm: f64) -> f64 {
    let v = rain_mm.max(0.0);
    if v == 0.0 {
        0.0
    } else if v <= 3.0 {
        10.0 + v / 3.0 * 30.0
    } else if v <= 15.0 {
        40.0 + (v - 3.0) / 12.0 * 30.0
    } else {
        (70.0 + (v - 15.0) / 15.0 * 30.0).min(100.0)
    }
}

/// Visibility sub-score; inverse scale, segments at 10/5/1 km
pub fn visibility_score(visibility_km: f64) -> f64 {
    let v = visibility_km.max(0.0);
    if v >= 10.0 {
        0.0
    } else if v >= 5.0 {
        (10.0 - v) / 5.0 * 30.0
    } else if v >= 1.0 {
        30.0 + (5.0 - v) / 4.0 * 40.0
    } else {
        (70.0 + (1.0 - v) * 30.0).min(100.0)
    }
}

/// Tidal current sub-score; segments at 1/2/3 knots
pub fn tidal_score(current_knots: f64) -> f64 {
    let v = current_knots.max(0.0);
    if v <= 1.0 {
        v * 20.0
    } else if v <= 2.0 {
        20.0 + (v - 1.0) * 30.0
    } else if v <= 3.0 {
        50.0 + (v - 2.0) * 30.0
    } else {
        (80.0 + (v - 3.0) / 2.0 * 20.0).min(100.0)
    }
}

/// Derive the discrete risk level from an overall score
pub fn classify_risk_level(overall_score: u8) -> RiskLevel {
    if overall_score <= SAFE_SCORE_MAX {
        RiskLevel::Safe
    } else if overall_score <= CAUTION_SCORE_MAX {
        RiskLevel::Caution
    } else {
        RiskLevel::Danger
    }
}

/// Work recommendation for a risk level
pub fn recommendation_for(level: RiskLevel) -> Recommendation {
    match level {
        RiskLevel::Safe => Recommendation::Proceed,
        RiskLevel::Caution => Recommendation::Caution,
        RiskLevel::Danger => Recommendation::Stop,
    }
}

/// The factor with the highest unweighted sub-score
///
/// Ties resolve to the earliest factor in wind, wave, precipitation,
/// visibility, tidal order.
pub fn dominant_risk_factor(reading: &EnvironmentReading) -> RiskFactorKind {
    let scored = [
        (RiskFactorKind::Wind, wind_score(reading.weather.wind_speed_mps)),
        (RiskFactorKind::Wave, wave_score(reading.ocean.wave_height_m)),
        (
            RiskFactorKind::Precipitation,
            precipitation_score(reading.weather.precipitation_mm),
        ),
        (
            RiskFactorKind::Visibility,
            visibility_score(reading.weather.visibility_km),
        ),
        (
            RiskFactorKind::Tidal,
            tidal_score(reading.ocean.tidal_current_knots),
        ),
    ];

    let mut dominant = scored[0];
    for candidate in &scored[1..] {
        if candidate.1 > dominant.1 {
            dominant = *candidate;
        }
    }
    dominant.0
}

/// Round a raw sub-score to the integer scale used for display
fn round_score(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}

/// Evaluate the full risk analysis for one reading and work-site type
///
/// Deterministic except for the decorative `ai_confidence` value, which
/// is drawn from the injected rng.
pub fn analyze_risk<R: Rng + ?Sized>(
    reading: &EnvironmentReading,
    site_type: WorkSiteType,
    rng: &mut R,
) -> RiskAnalysis {
    let weights = weight_profile(site_type);

    let wind = wind_score(reading.weather.wind_speed_mps);
    let wave = wave_score(reading.ocean.wave_height_m);
    let precipitation = precipitation_score(reading.weather.precipitation_mm);
    let visibility = visibility_score(reading.weather.visibility_km);
    let tidal = tidal_score(reading.ocean.tidal_current_knots);

    let overall = wind * weights.wind
        + wave * weights.wave
        + precipitation * weights.precipitation
        + visibility * weights.visibility
        + tidal * weights.tidal;
    let overall_score = round_score(overall);

    let risk_level = classify_risk_level(overall_score);
    let recommendation = recommendation_for(risk_level);

    let message = match risk_level {
        RiskLevel::Safe => {
            "Weather and sea conditions are favorable. Proceed with normal operations."
                .to_string()
        }
        RiskLevel::Caution => {
            "Some risk factors detected. Reinforce safety measures and keep monitoring conditions while working."
                .to_string()
        }
        RiskLevel::Danger => {
            let dominant = dominant_risk_factor(reading);
            format!(
                "Work risk is high due to {}. Stop work immediately and evacuate to a safe location.",
                dominant.label()
            )
        }
    };

    RiskAnalysis {
        site_id: reading.site_id.clone(),
        timestamp: reading.timestamp,
        overall_score,
        risk_level,
        recommendation,
        factors: RiskFactors {
            wind: FactorResult {
                score: round_score(wind),
                weight: weights.wind,
                value: reading.weather.wind_speed_mps,
                unit: "m/s".to_string(),
                threshold: WIND_THRESHOLD,
            },
            wave: FactorResult {
                score: round_score(wave),
                weight: weights.wave,
                value: reading.ocean.wave_height_m,
                unit: "m".to_string(),
                threshold: WAVE_THRESHOLD,
            },
            precipitation: FactorResult {
                score: round_score(precipitation),
                weight: weights.precipitation,
                value: reading.weather.precipitation_mm,
                unit: "mm".to_string(),
                threshold: PRECIPITATION_THRESHOLD,
            },
            visibility: FactorResult {
                score: round_score(visibility),
                weight: weights.visibility,
                value: reading.weather.visibility_km,
                unit: "km".to_string(),
                threshold: VISIBILITY_THRESHOLD,
            },
            tidal: FactorResult {
                score: round_score(tidal),
                weight: weights.tidal,
                value: reading.ocean.tidal_current_knots,
                unit: "knot".to_string(),
                threshold: TIDAL_THRESHOLD,
            },
        },
        ai_confidence: rng.gen_range(85.0..=98.0),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::models::{OceanData, WeatherData};

    fn reading(
        wind: f64,
        wave: f64,
        rain: f64,
        visibility: f64,
        tidal: f64,
    ) -> EnvironmentReading {
        EnvironmentReading {
            site_id: "site-001".to_string(),
            timestamp: Utc::now(),
            weather: WeatherData {
                wind_speed_mps: wind,
                wind_direction_deg: 0.0,
                precipitation_mm: rain,
                temperature_celsius: 20.0,
                humidity_percent: 70.0,
                visibility_km: visibility,
            },
            ocean: OceanData {
                wave_height_m: wave,
                wave_period_s: 6.0,
                tidal_current_knots: tidal,
                water_temperature_celsius: 20.0,
            },
        }
    }

    #[test]
    fn wind_segment_boundaries_are_continuous() {
        assert!((wind_score(7.0) - 30.0).abs() < 1e-9);
        assert!((wind_score(13.0) - 60.0).abs() < 1e-9);
        assert!((wind_score(20.0) - 80.0).abs() < 1e-9);
        assert_eq!(wind_score(30.0), 100.0);
    }

    #[test]
    fn wave_segment_boundaries_are_continuous() {
        assert!((wave_score(0.5) - 20.0).abs() < 1e-9);
        assert!((wave_score(1.5) - 50.0).abs() < 1e-9);
        assert!((wave_score(2.5) - 75.0).abs() < 1e-9);
        assert_eq!(wave_score(4.0), 100.0);
    }

    #[test]
    fn precipitation_zero_rain_scores_zero() {
        assert_eq!(precipitation_score(0.0), 0.0);
        // The caution ramp starts at 10, so any rain at all scores above it
        assert!(precipitation_score(0.01) > 10.0);
    }

    #[test]
    fn visibility_is_inverse() {
        assert_eq!(visibility_score(15.0), 0.0);
        assert_eq!(visibility_score(10.0), 0.0);
        assert!((visibility_score(5.0) - 30.0).abs() < 1e-9);
        assert!((visibility_score(1.0) - 70.0).abs() < 1e-9);
        assert_eq!(visibility_score(0.0), 100.0);
    }

    #[test]
    fn tidal_segment_boundaries_are_continuous() {
        assert!((tidal_score(1.0) - 20.0).abs() < 1e-9);
        assert!((tidal_score(2.0) - 50.0).abs() < 1e-9);
        assert!((tidal_score(3.0) - 80.0).abs() < 1e-9);
        assert_eq!(tidal_score(5.0), 100.0);
    }

    #[test]
    fn negative_inputs_clamp_to_floor() {
        assert_eq!(wind_score(-3.0), 0.0);
        assert_eq!(wave_score(-0.5), 0.0);
        assert_eq!(precipitation_score(-1.0), 0.0);
        assert_eq!(tidal_score(-2.0), 0.0);
        // Negative visibility behaves like zero visibility (worst case)
        assert_eq!(visibility_score(-1.0), 100.0);
    }

    #[test]
    fn weight_rows_sum_to_one() {
        for site_type in [
            WorkSiteType::Barge,
            WorkSiteType::Diving,
            WorkSiteType::Lifting,
            WorkSiteType::General,
        ] {
            let profile = weight_profile(site_type);
            assert!(
                (profile.sum() - 1.0).abs() < 0.001,
                "weights for {site_type:?} sum to {}",
                profile.sum()
            );
        }
    }

    #[test]
    fn lifting_has_zero_tidal_weight() {
        assert_eq!(weight_profile(WorkSiteType::Lifting).tidal, 0.0);
    }

    #[test]
    fn level_thresholds_partition_exactly() {
        assert_eq!(classify_risk_level(0), RiskLevel::Safe);
        assert_eq!(classify_risk_level(40), RiskLevel::Safe);
        assert_eq!(classify_risk_level(41), RiskLevel::Caution);
        assert_eq!(classify_risk_level(70), RiskLevel::Caution);
        assert_eq!(classify_risk_level(71), RiskLevel::Danger);
        assert_eq!(classify_risk_level(100), RiskLevel::Danger);
    }

    #[test]
    fn recommendation_matches_level() {
        assert_eq!(recommendation_for(RiskLevel::Safe), Recommendation::Proceed);
        assert_eq!(
            recommendation_for(RiskLevel::Caution),
            Recommendation::Caution
        );
        assert_eq!(recommendation_for(RiskLevel::Danger), Recommendation::Stop);
    }

    #[test]
    fn barge_reference_scenario_scores_caution() {
        // wind 16 m/s, wave 2.3 m, rain 2 mm, visibility 6 km, tidal 2.0 kn
        let reading = reading(16.0, 2.3, 2.0, 6.0, 2.0);
        let mut rng = StdRng::seed_from_u64(7);
        let analysis = analyze_risk(&reading, WorkSiteType::Barge, &mut rng);

        assert_eq!(analysis.factors.wind.score, 69);
        assert_eq!(analysis.factors.wave.score, 70);
        assert_eq!(analysis.factors.precipitation.score, 30);
        assert_eq!(analysis.factors.visibility.score, 24);
        assert_eq!(analysis.factors.tidal.score, 50);
        assert_eq!(analysis.overall_score, 58);
        assert_eq!(analysis.risk_level, RiskLevel::Caution);
        assert_eq!(analysis.recommendation, Recommendation::Caution);
    }

    #[test]
    fn tidal_weight_zero_excludes_tidal_from_overall() {
        // Extreme tidal current but calm everything else: lifting sites
        // still score the sub-score, yet the overall stays at zero.
        let reading = reading(0.0, 0.0, 0.0, 15.0, 6.0);
        let mut rng = StdRng::seed_from_u64(7);
        let analysis = analyze_risk(&reading, WorkSiteType::Lifting, &mut rng);

        assert_eq!(analysis.factors.tidal.score, 100);
        assert_eq!(analysis.overall_score, 0);
        assert_eq!(analysis.risk_level, RiskLevel::Safe);
    }

    #[test]
    fn danger_message_names_dominant_factor() {
        // Storm-force wind dominates every other factor
        let reading = reading(28.0, 2.6, 20.0, 0.5, 3.5);
        let mut rng = StdRng::seed_from_u64(7);
        let analysis = analyze_risk(&reading, WorkSiteType::General, &mut rng);

        assert_eq!(analysis.risk_level, RiskLevel::Danger);
        assert_eq!(analysis.recommendation, Recommendation::Stop);
        assert!(analysis.message.contains("strong wind"));
    }

    #[test]
    fn dominant_factor_tie_resolves_in_fixed_order() {
        // Wind and wave both score exactly 100
        let reading = reading(50.0, 10.0, 0.0, 15.0, 0.0);
        assert_eq!(dominant_risk_factor(&reading), RiskFactorKind::Wind);
    }

    #[test]
    fn ai_confidence_is_decorative_but_bounded() {
        let reading = reading(5.0, 0.3, 0.0, 15.0, 0.5);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let analysis = analyze_risk(&reading, WorkSiteType::General, &mut rng);
            assert!(analysis.ai_confidence >= 85.0 && analysis.ai_confidence <= 98.0);
        }
    }

    #[test]
    fn analysis_is_deterministic_apart_from_confidence() {
        let reading = reading(9.0, 1.2, 1.0, 8.0, 1.5);
        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(2);
        let a = analyze_risk(&reading, WorkSiteType::Diving, &mut rng_a);
        let b = analyze_risk(&reading, WorkSiteType::Diving, &mut rng_b);

        assert_eq!(a.overall_score, b.overall_score);
        assert_eq!(a.risk_level, b.risk_level);
        assert_eq!(a.recommendation, b.recommendation);
        assert_eq!(a.message, b.message);
    }
}
