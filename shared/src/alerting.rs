//! Risk-level diffing and the rolling alert log
//!
//! The differ is a pure function over two per-site snapshots; the caller
//! owns the previous-cycle snapshot and replaces it in a single
//! assignment after each refresh so a diff never sees a partially
//! updated set.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{Alert, AlertSeverity, AlertType, RiskLevel, SiteWithRisk};

/// Maximum number of alerts retained, newest first
pub const ALERT_LOG_CAP: usize = 50;

/// Severity of a level-change alert, driven by the new level
pub fn severity_for_level(level: RiskLevel) -> AlertSeverity {
    match level {
        RiskLevel::Danger => AlertSeverity::Critical,
        RiskLevel::Caution => AlertSeverity::Warning,
        RiskLevel::Safe => AlertSeverity::Info,
    }
}

fn title_for_level(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Danger => "Risk level raised",
        RiskLevel::Caution => "Changed to caution level",
        RiskLevel::Safe => "Returned to safe status",
    }
}

/// Emit one level-change alert per site whose risk level moved between
/// the previous and current cycle
///
/// Sites without a previous entry produce nothing, so the very first
/// cycle is silent. Score movement within the same band is not an event.
pub fn diff_level_changes(
    previous: &[SiteWithRisk],
    current: &[SiteWithRisk],
    now: DateTime<Utc>,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for site in current {
        let Some(prev) = previous.iter().find(|p| p.site.id == site.site.id) else {
            continue;
        };
        if prev.risk.risk_level == site.risk.risk_level {
            continue;
        }

        let level = site.risk.risk_level;
        alerts.push(Alert {
            id: Uuid::new_v4(),
            site_id: site.site.id.clone(),
            site_name: site.site.name.clone(),
            alert_type: AlertType::LevelChange,
            severity: severity_for_level(level),
            title: title_for_level(level).to_string(),
            message: site.risk.message.clone(),
            previous_level: Some(prev.risk.risk_level),
            current_level: Some(level),
            created_at: now,
            read_at: None,
            acknowledged_at: None,
            acknowledged_by: None,
        });
    }

    alerts
}

/// Rolling alert log capped at [`ALERT_LOG_CAP`] entries
///
/// New alerts are prepended; once the cap is exceeded the oldest entries
/// are dropped. Read/acknowledge stamps are added once and never removed.
#[derive(Debug, Clone, Default)]
pub struct AlertLog {
    entries: Vec<Alert>,
}

impl AlertLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Alert] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepend one alert, dropping the oldest past the cap
    pub fn push(&mut self, alert: Alert) {
        self.entries.insert(0, alert);
        self.entries.truncate(ALERT_LOG_CAP);
    }

    /// Prepend a batch, newest-emitted first
    pub fn push_all(&mut self, alerts: Vec<Alert>) {
        for alert in alerts.into_iter().rev() {
            self.push(alert);
        }
    }

    /// Alerts not yet marked read
    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|a| !a.is_read()).count()
    }

    /// Alerts not yet acknowledged
    pub fn active_count(&self) -> usize {
        self.entries.iter().filter(|a| !a.is_acknowledged()).count()
    }

    /// Stamp `read_at` if unset; returns `None` for an unknown id
    pub fn mark_read(&mut self, alert_id: Uuid, now: DateTime<Utc>) -> Option<&Alert> {
        let alert = self.entries.iter_mut().find(|a| a.id == alert_id)?;
        alert.read_at.get_or_insert(now);
        Some(alert)
    }

    /// Stamp `acknowledged_at` and record who acknowledged; also stamps
    /// `read_at` if it was unset
    pub fn acknowledge(
        &mut self,
        alert_id: Uuid,
        acknowledged_by: &str,
        now: DateTime<Utc>,
    ) -> Option<&Alert> {
        let alert = self.entries.iter_mut().find(|a| a.id == alert_id)?;
        alert.read_at.get_or_insert(now);
        alert.acknowledged_at.get_or_insert(now);
        if alert.acknowledged_by.is_none() {
            alert.acknowledged_by = Some(acknowledged_by.to_string());
        }
        Some(alert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::models::{
        EnvironmentReading, OceanData, Region, Site, SiteLocation, SiteManager, SiteStatus,
        WeatherData, WorkSiteType,
    };
    use crate::scoring::analyze_risk;

    fn snapshot(site_id: &str, wind_speed: f64, wave_height: f64, rain: f64, visibility: f64) -> SiteWithRisk {
        let site = Site {
            id: site_id.to_string(),
            name: format!("Test site {site_id}"),
            site_type: WorkSiteType::Lifting,
            location: SiteLocation {
                latitude: 35.0,
                longitude: 129.0,
                address: "Test address".to_string(),
                region: Region::SouthSea,
            },
            manager: SiteManager {
                name: "Tester".to_string(),
                phone: "010-0000-0000".to_string(),
            },
            status: SiteStatus::Active,
            created_at: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        };
        let reading = EnvironmentReading {
            site_id: site_id.to_string(),
            timestamp: Utc::now(),
            weather: WeatherData {
                wind_speed_mps: wind_speed,
                wind_direction_deg: 0.0,
                precipitation_mm: rain,
                temperature_celsius: 20.0,
                humidity_percent: 70.0,
                visibility_km: visibility,
            },
            ocean: OceanData {
                wave_height_m: wave_height,
                wave_period_s: 6.0,
                tidal_current_knots: 0.3,
                water_temperature_celsius: 20.0,
            },
        };
        let mut rng = StdRng::seed_from_u64(0);
        let risk = analyze_risk(&reading, site.site_type, &mut rng);
        SiteWithRisk {
            site,
            environment: reading,
            risk,
        }
    }

    fn calm(site_id: &str) -> SiteWithRisk {
        snapshot(site_id, 2.0, 0.2, 0.0, 15.0)
    }

    fn storm(site_id: &str) -> SiteWithRisk {
        snapshot(site_id, 30.0, 5.0, 20.0, 0.2)
    }

    #[test]
    fn level_change_emits_one_alert() {
        let previous = vec![calm("site-a")];
        let current = vec![storm("site-a")];
        assert_eq!(previous[0].risk.risk_level, RiskLevel::Safe);
        assert_eq!(current[0].risk.risk_level, RiskLevel::Danger);

        let alerts = diff_level_changes(&previous, &current, Utc::now());
        assert_eq!(alerts.len(), 1);
        let alert = &alerts[0];
        assert_eq!(alert.severity, AlertSeverity::Critical);
        assert_eq!(alert.previous_level, Some(RiskLevel::Safe));
        assert_eq!(alert.current_level, Some(RiskLevel::Danger));
        assert_eq!(alert.alert_type, AlertType::LevelChange);
    }

    #[test]
    fn unchanged_levels_emit_nothing() {
        // Scores move within their bands but no level crosses a boundary
        let previous = vec![calm("site-a"), storm("site-b")];
        let current = vec![
            snapshot("site-a", 3.0, 0.3, 0.0, 14.0),
            snapshot("site-b", 28.0, 4.5, 18.0, 0.3),
        ];
        assert_eq!(previous[0].risk.risk_level, current[0].risk.risk_level);
        assert_eq!(previous[1].risk.risk_level, current[1].risk.risk_level);

        let alerts = diff_level_changes(&previous, &current, Utc::now());
        assert!(alerts.is_empty());
    }

    #[test]
    fn first_cycle_with_no_previous_is_silent() {
        let current = vec![storm("site-a")];
        let alerts = diff_level_changes(&[], &current, Utc::now());
        assert!(alerts.is_empty());
    }

    #[test]
    fn recovery_to_safe_is_info() {
        let previous = vec![storm("site-a")];
        let current = vec![calm("site-a")];

        let alerts = diff_level_changes(&previous, &current, Utc::now());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Info);
        assert_eq!(alerts[0].title, "Returned to safe status");
    }

    fn bare_alert(n: usize) -> Alert {
        Alert {
            id: Uuid::new_v4(),
            site_id: format!("site-{n:03}"),
            site_name: format!("Site {n}"),
            alert_type: AlertType::System,
            severity: AlertSeverity::Info,
            title: "System notice".to_string(),
            message: format!("notice {n}"),
            previous_level: None,
            current_level: None,
            created_at: Utc::now(),
            read_at: None,
            acknowledged_at: None,
            acknowledged_by: None,
        }
    }

    #[test]
    fn log_never_exceeds_cap() {
        let mut log = AlertLog::new();
        for n in 0..200 {
            log.push(bare_alert(n));
        }
        assert_eq!(log.len(), ALERT_LOG_CAP);
        // Newest first
        assert_eq!(log.entries()[0].message, "notice 199");
    }

    #[test]
    fn mark_read_stamps_once() {
        let mut log = AlertLog::new();
        let alert = bare_alert(1);
        let id = alert.id;
        log.push(alert);

        let first = Utc::now();
        log.mark_read(id, first);
        let stamped = log.entries()[0].read_at;
        assert_eq!(stamped, Some(first));

        // A second read does not move the timestamp
        log.mark_read(id, first + chrono::Duration::minutes(5));
        assert_eq!(log.entries()[0].read_at, stamped);
    }

    #[test]
    fn acknowledge_records_identity_and_read() {
        let mut log = AlertLog::new();
        let alert = bare_alert(2);
        let id = alert.id;
        log.push(alert);

        let now = Utc::now();
        let acked = log.acknowledge(id, "supervisor-kim", now).unwrap();
        assert_eq!(acked.acknowledged_by.as_deref(), Some("supervisor-kim"));
        assert_eq!(acked.acknowledged_at, Some(now));
        assert_eq!(acked.read_at, Some(now));
        assert_eq!(log.active_count(), 0);
    }

    #[test]
    fn unknown_id_returns_none() {
        let mut log = AlertLog::new();
        log.push(bare_alert(3));
        assert!(log.mark_read(Uuid::new_v4(), Utc::now()).is_none());
        assert!(log.acknowledge(Uuid::new_v4(), "x", Utc::now()).is_none());
    }
}
