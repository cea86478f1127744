//! Demo site catalog and synthetic environment generation
//!
//! Stands in for real weather/ocean telemetry: each demo site carries a
//! baseline scenario, and every refresh cycle draws a fresh reading with
//! bounded random variation around that baseline. Swapping this module
//! for a real feed only requires constructing the same
//! `EnvironmentReading` fields in the same units.

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use shared::{
    Alert, AlertSeverity, AlertType, BaselineConditions, EnvironmentReading, OceanData, Region,
    RiskLevel, Site, SiteLocation, SiteManager, SiteStatus, WeatherData, WorkSiteType,
};
use uuid::Uuid;

/// Baseline conditions plus how much readings may vary around them
#[derive(Debug, Clone, Copy)]
pub struct SiteScenario {
    pub baseline: BaselineConditions,
    /// Relative variation applied to each baseline value per reading
    pub variance: f64,
}

fn site(
    id: &str,
    name: &str,
    site_type: WorkSiteType,
    latitude: f64,
    longitude: f64,
    address: &str,
    region: Region,
    manager: &str,
    phone: &str,
    created: (i32, u32, u32),
) -> Site {
    Site {
        id: id.to_string(),
        name: name.to_string(),
        site_type,
        location: SiteLocation {
            latitude,
            longitude,
            address: address.to_string(),
            region,
        },
        manager: SiteManager {
            name: manager.to_string(),
            phone: phone.to_string(),
        },
        status: SiteStatus::Active,
        created_at: NaiveDate::from_ymd_opt(created.0, created.1, created.2)
            .unwrap_or_default(),
    }
}

/// The ten demo work sites monitored by the dashboard
pub fn demo_sites() -> Vec<Site> {
    vec![
        site(
            "site-001",
            "Incheon Port Pier 2 Expansion",
            WorkSiteType::Barge,
            37.4563,
            126.6052,
            "Hang-dong, Jung-gu, Incheon",
            Region::WestSea,
            "Kim Cheol-su",
            "010-1234-5678",
            (2024, 3, 15),
        ),
        site(
            "site-002",
            "Busan Yeongdo Breakwater Repair",
            WorkSiteType::Diving,
            35.0911,
            129.0689,
            "Dongsam-dong, Yeongdo-gu, Busan",
            Region::SouthSea,
            "Lee Young-hee",
            "010-2345-6789",
            (2024, 4, 1),
        ),
        site(
            "site-003",
            "Yeosu Subsea Cable Installation",
            WorkSiteType::Lifting,
            34.7604,
            127.6622,
            "Dolsan-eup, Yeosu, South Jeolla",
            Region::SouthSea,
            "Park Min-su",
            "010-3456-7890",
            (2024, 5, 10),
        ),
        site(
            "site-004",
            "Pohang New Port Dredging",
            WorkSiteType::Barge,
            36.0190,
            129.3650,
            "Guryongpo-eup, Nam-gu, Pohang",
            Region::EastSea,
            "Choi Dong-hyun",
            "010-4567-8901",
            (2024, 2, 20),
        ),
        site(
            "site-005",
            "Jeju Seogwipo Harbor Maintenance",
            WorkSiteType::Diving,
            33.2411,
            126.5597,
            "Seogwi-dong, Seogwipo, Jeju",
            Region::SouthSea,
            "Jung Su-yeon",
            "010-5678-9012",
            (2024, 6, 1),
        ),
        site(
            "site-006",
            "Ulsan Onsan Port Breakwater",
            WorkSiteType::Barge,
            35.4264,
            129.3553,
            "Onsan-eup, Ulju-gun, Ulsan",
            Region::EastSea,
            "Kang Ji-hoon",
            "010-6789-0123",
            (2024, 4, 15),
        ),
        site(
            "site-007",
            "Mokpo Sea Bridge Foundation Work",
            WorkSiteType::Barge,
            34.7936,
            126.3819,
            "Dal-dong, Mokpo, South Jeolla",
            Region::WestSea,
            "Yoon Seo-jun",
            "010-7890-1234",
            (2024, 3, 1),
        ),
        site(
            "site-008",
            "Gangneung Jumunjin Harbor Dredging",
            WorkSiteType::Barge,
            37.8947,
            128.8306,
            "Jumunjin-eup, Gangneung, Gangwon",
            Region::EastSea,
            "Im Ha-eun",
            "010-8901-2345",
            (2024, 5, 20),
        ),
        site(
            "site-009",
            "Tongyeong Undersea Tunnel Inspection",
            WorkSiteType::Diving,
            34.8544,
            128.4331,
            "Dang-dong, Tongyeong, South Gyeongsang",
            Region::SouthSea,
            "Cho Hyun-woo",
            "010-9012-3456",
            (2024, 6, 10),
        ),
        site(
            "site-010",
            "Gunsan Saemangeum Revetment Work",
            WorkSiteType::Barge,
            35.9678,
            126.7136,
            "Bieungdo-dong, Gunsan, North Jeolla",
            Region::WestSea,
            "Han Ye-jin",
            "010-0123-4567",
            (2024, 4, 25),
        ),
    ]
}

/// Baseline scenario for a demo site, if one exists
///
/// Forecast synthesis requires a baseline; callers must treat a missing
/// scenario as an error rather than guessing defaults.
pub fn scenario_for(site_id: &str) -> Option<SiteScenario> {
    let (wind, rain, visibility, wave, tidal, variance) = match site_id {
        // Incheon: calm
        "site-001" => (5.0, 0.0, 15.0, 0.3, 0.5, 0.2),
        // Busan Yeongdo: caution
        "site-002" => (9.0, 0.0, 10.0, 1.2, 1.5, 0.3),
        // Yeosu: calm
        "site-003" => (6.0, 0.0, 12.0, 0.5, 0.8, 0.2),
        // Pohang: rough
        "site-004" => (16.0, 2.0, 6.0, 2.3, 2.0, 0.25),
        // Jeju Seogwipo: calm
        "site-005" => (4.0, 0.0, 18.0, 0.4, 0.6, 0.2),
        // Ulsan Onsan: caution
        "site-006" => (10.0, 1.0, 8.0, 1.0, 1.2, 0.3),
        // Mokpo: calm
        "site-007" => (5.0, 0.0, 14.0, 0.4, 0.7, 0.2),
        // Gangneung Jumunjin: calm
        "site-008" => (6.0, 0.0, 16.0, 0.6, 0.4, 0.2),
        // Tongyeong: caution
        "site-009" => (8.0, 0.0, 9.0, 0.9, 1.8, 0.3),
        // Gunsan Saemangeum: calm
        "site-010" => (5.0, 0.0, 13.0, 0.3, 0.5, 0.2),
        _ => return None,
    };

    Some(SiteScenario {
        baseline: BaselineConditions {
            wind_speed_mps: wind,
            precipitation_mm: rain,
            visibility_km: visibility,
            wave_height_m: wave,
            tidal_current_knots: tidal,
        },
        variance,
    })
}

/// Uniform variation of `base` by up to `variance` in either direction
fn vary<R: Rng + ?Sized>(rng: &mut R, base: f64, variance: f64) -> f64 {
    base + (rng.gen::<f64>() - 0.5) * 2.0 * variance
}

/// Draw a fresh environment reading around a site's baseline
pub fn generate_reading<R: Rng + ?Sized>(
    site_id: &str,
    scenario: &SiteScenario,
    now: DateTime<Utc>,
    rng: &mut R,
) -> EnvironmentReading {
    let b = scenario.baseline;
    let v = scenario.variance;

    EnvironmentReading {
        site_id: site_id.to_string(),
        timestamp: now,
        weather: WeatherData {
            wind_speed_mps: vary(rng, b.wind_speed_mps, b.wind_speed_mps * v).max(0.0),
            wind_direction_deg: rng.gen_range(0.0..360.0),
            // Dry baselines still get occasional drizzle from the 1mm floor
            precipitation_mm: vary(rng, b.precipitation_mm, (b.precipitation_mm * v).max(1.0))
                .max(0.0),
            temperature_celsius: rng.gen_range(15.0..25.0),
            humidity_percent: rng.gen_range(60.0..80.0),
            visibility_km: vary(rng, b.visibility_km, b.visibility_km * v).max(1.0),
        },
        ocean: OceanData {
            wave_height_m: vary(rng, b.wave_height_m, b.wave_height_m * v).max(0.0),
            wave_period_s: rng.gen_range(4.0..10.0),
            tidal_current_knots: vary(rng, b.tidal_current_knots, b.tidal_current_knots * v)
                .max(0.0),
            water_temperature_celsius: rng.gen_range(18.0..24.0),
        },
    }
}

fn seed_alert(
    site_id: &str,
    site_name: &str,
    alert_type: AlertType,
    severity: AlertSeverity,
    title: &str,
    message: &str,
    levels: Option<(RiskLevel, RiskLevel)>,
    created_at: DateTime<Utc>,
    read_at: Option<DateTime<Utc>>,
) -> Alert {
    Alert {
        id: Uuid::new_v4(),
        site_id: site_id.to_string(),
        site_name: site_name.to_string(),
        alert_type,
        severity,
        title: title.to_string(),
        message: message.to_string(),
        previous_level: levels.map(|(p, _)| p),
        current_level: levels.map(|(_, c)| c),
        created_at,
        read_at,
        acknowledged_at: None,
        acknowledged_by: None,
    }
}

/// Fixed demo alerts installed on the first refresh cycle only
pub fn seed_alerts(now: DateTime<Utc>) -> Vec<Alert> {
    let minutes_ago = |m: i64| now - chrono::Duration::minutes(m);

    vec![
        seed_alert(
            "site-004",
            "Pohang New Port Dredging",
            AlertType::LevelChange,
            AlertSeverity::Critical,
            "Risk level raised",
            "Wind 16 m/s and waves of 2.3 m put conditions at danger level. Stop work immediately.",
            Some((RiskLevel::Caution, RiskLevel::Danger)),
            minutes_ago(5),
            None,
        ),
        seed_alert(
            "site-002",
            "Busan Yeongdo Breakwater Repair",
            AlertType::Threshold,
            AlertSeverity::Warning,
            "Wave height at caution level",
            "Current wave height of 1.2 m calls for caution during diving work.",
            None,
            minutes_ago(15),
            None,
        ),
        seed_alert(
            "site-006",
            "Ulsan Onsan Port Breakwater",
            AlertType::Forecast,
            AlertSeverity::Warning,
            "Deteriorating weather forecast",
            "Wind speed is projected to rise above 12 m/s around 15:00.",
            None,
            minutes_ago(30),
            None,
        ),
        seed_alert(
            "site-009",
            "Tongyeong Undersea Tunnel Inspection",
            AlertType::Threshold,
            AlertSeverity::Warning,
            "Tidal current caution",
            "Tidal current of 1.8 knots calls for caution during diving work.",
            None,
            minutes_ago(45),
            None,
        ),
        seed_alert(
            "site-001",
            "Incheon Port Pier 2 Expansion",
            AlertType::LevelChange,
            AlertSeverity::Info,
            "Safe status maintained",
            "All conditions are favorable. Proceed with work safely.",
            Some((RiskLevel::Safe, RiskLevel::Safe)),
            minutes_ago(60),
            Some(minutes_ago(55)),
        ),
    ]
}
