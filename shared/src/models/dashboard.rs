//! Dashboard summary model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fleet-wide counts shown on the dashboard header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_sites: usize,
    pub safe_sites: usize,
    pub caution_sites: usize,
    pub danger_sites: usize,
    /// Alerts not yet acknowledged
    pub active_alerts: usize,
    pub last_updated: DateTime<Utc>,
}
