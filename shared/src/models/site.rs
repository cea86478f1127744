//! Work site models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{EnvironmentReading, RiskAnalysis};

/// Type of maritime work performed at a site
///
/// The site type selects the factor-weighting profile used when
/// aggregating risk; it is fixed when the site is created.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkSiteType {
    Barge,
    Diving,
    Lifting,
    General,
}

impl std::fmt::Display for WorkSiteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkSiteType::Barge => write!(f, "Barge Work"),
            WorkSiteType::Diving => write!(f, "Diving Work"),
            WorkSiteType::Lifting => write!(f, "Heavy Lifting"),
            WorkSiteType::General => write!(f, "General Work"),
        }
    }
}

/// Operational status of a work site
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SiteStatus {
    Active,
    Paused,
    Completed,
}

/// Korean coastal region a site belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    WestSea,
    SouthSea,
    EastSea,
}

/// Geographic location of a work site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub region: Region,
}

/// Site manager contact details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteManager {
    pub name: String,
    pub phone: String,
}

/// A registered maritime work site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub id: String,
    pub name: String,
    pub site_type: WorkSiteType,
    pub location: SiteLocation,
    pub manager: SiteManager,
    pub status: SiteStatus,
    pub created_at: NaiveDate,
}

/// A site together with its latest environment reading and risk analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteWithRisk {
    #[serde(flatten)]
    pub site: Site,
    pub environment: EnvironmentReading,
    pub risk: RiskAnalysis,
}
