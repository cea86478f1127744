//! Risk analysis models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discrete risk classification derived from the overall score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Safe,
    Caution,
    Danger,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Safe => write!(f, "Safe"),
            RiskLevel::Caution => write!(f, "Caution"),
            RiskLevel::Danger => write!(f, "Danger"),
        }
    }
}

/// Work guidance, one-to-one with the risk level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Proceed,
    Caution,
    Stop,
}

/// The five environmental factors that feed the risk score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactorKind {
    Wind,
    Wave,
    Precipitation,
    Visibility,
    Tidal,
}

impl RiskFactorKind {
    /// Human-readable label used when naming the dominant risk driver
    pub fn label(&self) -> &'static str {
        match self {
            RiskFactorKind::Wind => "strong wind",
            RiskFactorKind::Wave => "high waves",
            RiskFactorKind::Precipitation => "heavy rainfall",
            RiskFactorKind::Visibility => "low visibility",
            RiskFactorKind::Tidal => "strong tidal current",
        }
    }
}

/// Display boundaries for one factor's safe/caution/danger bands
///
/// These are fixed per factor and independent of site type. For
/// visibility the values descend because lower visibility is worse.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FactorThreshold {
    pub safe: f64,
    pub caution: f64,
    pub danger: f64,
}

/// One factor's contribution to a risk analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorResult {
    /// Sub-score rounded to the nearest integer, 0-100
    pub score: u8,
    /// Weight applied for the site's work type
    pub weight: f64,
    /// Raw measured value
    pub value: f64,
    pub unit: String,
    pub threshold: FactorThreshold,
}

/// Sub-scores for all five factors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactors {
    pub wind: FactorResult,
    pub wave: FactorResult,
    pub precipitation: FactorResult,
    pub visibility: FactorResult,
    pub tidal: FactorResult,
}

/// Full risk evaluation for one site and one environment reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAnalysis {
    pub site_id: String,
    pub timestamp: DateTime<Utc>,
    pub overall_score: u8,
    pub risk_level: RiskLevel,
    pub recommendation: Recommendation,
    pub factors: RiskFactors,
    /// Presentational confidence value in [85, 98]. Randomly generated,
    /// not derived from any model; callers must not treat it as a real
    /// uncertainty measure.
    pub ai_confidence: f64,
    pub message: String,
}
