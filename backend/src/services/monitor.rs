//! Refresh orchestration
//!
//! Re-evaluates every site on a fixed interval: draw a fresh reading,
//! run the aggregator, diff risk levels against the previous cycle, and
//! swap the snapshot in a single assignment. The engine itself stays
//! stateless; this module owns the one-step-back state it needs.

use chrono::Utc;
use shared::{analyze_risk, diff_level_changes, SiteWithRisk};

use crate::services::scenario;
use crate::AppState;

/// Run one full evaluation cycle over all sites
pub async fn run_refresh_cycle(state: &AppState) {
    let now = Utc::now();

    let fresh: Vec<SiteWithRisk> = {
        let mut rng = state.rng.lock().await;
        state
            .sites
            .iter()
            .filter_map(|site| {
                let Some(scenario) = scenario::scenario_for(&site.id) else {
                    // A cataloged site with no baseline cannot be scored;
                    // leave it off the dashboard rather than guess defaults
                    tracing::warn!(site = %site.id, "no baseline scenario, skipping this cycle");
                    return None;
                };
                let reading = scenario::generate_reading(&site.id, &scenario, now, &mut *rng);
                let risk = analyze_risk(&reading, site.site_type, &mut *rng);
                Some(SiteWithRisk {
                    site: site.clone(),
                    environment: reading,
                    risk,
                })
            })
            .collect()
    };

    let mut store = state.store.write().await;

    if store.is_first_cycle() {
        // No previous snapshot to diff against; install the demo alerts
        store.alerts.push_all(scenario::seed_alerts(now));
        tracing::info!(sites = fresh.len(), "initial evaluation cycle complete");
    } else {
        let changes = diff_level_changes(&store.sites_with_risk, &fresh, now);
        for alert in &changes {
            tracing::info!(
                site = %alert.site_id,
                severity = ?alert.severity,
                previous = ?alert.previous_level,
                current = ?alert.current_level,
                "risk level changed"
            );
        }
        store.alerts.push_all(changes);
        tracing::debug!(sites = fresh.len(), "evaluation cycle complete");
    }

    // Single assignment: the differ never sees a partially updated set
    store.sites_with_risk = fresh;
    store.last_updated = Some(now);
}

/// Periodic scheduler; runs until the server shuts down
pub async fn run_scheduler(state: AppState) {
    let period = std::time::Duration::from_secs(state.config.monitor.refresh_interval_secs);
    let mut interval = tokio::time::interval(period);
    // The immediate first tick would duplicate the startup cycle
    interval.tick().await;

    loop {
        interval.tick().await;
        run_refresh_cycle(&state).await;
    }
}
