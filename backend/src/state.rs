//! In-memory dashboard state
//!
//! Holds the latest per-site risk snapshot and the rolling alert log.
//! The snapshot is replaced wholesale on every refresh cycle; the alert
//! differ always compares against a complete previous set.

use chrono::{DateTime, Utc};
use shared::{AlertLog, DashboardSummary, RiskLevel, SiteWithRisk};

/// Mutable dashboard state behind the application lock
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Current cycle's snapshot; empty until the first refresh
    pub sites_with_risk: Vec<SiteWithRisk>,
    pub alerts: AlertLog,
    pub last_updated: Option<DateTime<Utc>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True before the first refresh cycle has run
    pub fn is_first_cycle(&self) -> bool {
        self.sites_with_risk.is_empty()
    }

    pub fn site(&self, site_id: &str) -> Option<&SiteWithRisk> {
        self.sites_with_risk.iter().find(|s| s.site.id == site_id)
    }

    fn count_level(&self, level: RiskLevel) -> usize {
        self.sites_with_risk
            .iter()
            .filter(|s| s.risk.risk_level == level)
            .count()
    }

    /// Fleet-wide counts for the dashboard header
    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary {
            total_sites: self.sites_with_risk.len(),
            safe_sites: self.count_level(RiskLevel::Safe),
            caution_sites: self.count_level(RiskLevel::Caution),
            danger_sites: self.count_level(RiskLevel::Danger),
            active_alerts: self.alerts.active_count(),
            last_updated: self.last_updated.unwrap_or_else(Utc::now),
        }
    }
}
