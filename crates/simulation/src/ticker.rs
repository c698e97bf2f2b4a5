//! Tick mutation rules

use chrono::{Local, NaiveTime};
use rand::Rng;
use tracing::debug;

use store::{Alert, AlertPriority, AlertStatus, CameraStatus, DashboardStore, Detection, DetectionKind};

use crate::{SimulationConfig, SimulationError};

// Clamp bounds applied after every perturbation
const CPU_USAGE_BOUNDS: (f64, f64) = (20.0, 80.0);
const MEMORY_USAGE_BOUNDS: (f64, f64) = (30.0, 90.0);
const NETWORK_LATENCY_BOUNDS: (f64, f64) = (5.0, 50.0);

// Synthesized detection confidence, inclusive
const DETECTION_CONFIDENCE_MIN: u8 = 80;
const DETECTION_CONFIDENCE_MAX: u8 = 100;

// Synthesized alert confidence, inclusive
const ALERT_CONFIDENCE_MIN: u8 = 70;
const ALERT_CONFIDENCE_MAX: u8 = 99;

/// Alert templates the ticker draws from: (type, message)
const ALERT_CATALOG: &[(&str, &str)] = &[
    ("Person Detected", "Unauthorized person detected in restricted area"),
    ("Suspicious Activity", "Unusual movement pattern detected"),
    ("Restricted Area Breach", "Person entered restricted zone"),
    ("Camera Fault", "Camera connection unstable"),
    ("Motion Detected", "Motion detected in monitored zone"),
];

const PRIORITIES: [AlertPriority; 3] = [
    AlertPriority::High,
    AlertPriority::Medium,
    AlertPriority::Low,
];

/// Outcome of a single tick, for consumers that surface notifications or
/// record performance history
#[derive(Debug, Clone)]
pub struct TickReport {
    /// Wall-clock stamp applied to every camera this tick
    pub timestamp: String,
    /// Cameras that received a fresh detection
    pub detections_injected: usize,
    /// Alert synthesized this tick, if any
    pub new_alert: Option<Alert>,
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub network_latency_ms: f64,
}

/// Advances simulated state, one tick at a time
///
/// The ticker owns its random source; supply a seeded [`rand::rngs::StdRng`]
/// to reproduce a run exactly.
pub struct Ticker<R: Rng> {
    config: SimulationConfig,
    rng: R,
}

impl<R: Rng> Ticker<R> {
    pub fn new(config: SimulationConfig, rng: R) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// Run one tick against the current wall clock
    pub fn tick(&mut self, store: &mut DashboardStore) -> TickReport {
        self.tick_at(store, Local::now().time())
    }

    /// Run one tick with an explicit clock reading
    pub fn tick_at(&mut self, store: &mut DashboardStore, now: NaiveTime) -> TickReport {
        let stamp = now.format("%H:%M:%S").to_string();

        for camera in &mut store.cameras {
            camera.timestamp = stamp.clone();
            camera.detections.clear();
        }

        self.perturb_stats(store);

        let detections_injected = if self.rng.gen_bool(self.config.detection_round_probability) {
            self.run_detection_round(store, &stamp)
        } else {
            0
        };

        let new_alert = if self.rng.gen_bool(self.config.alert_probability) {
            self.spawn_alert(store, &stamp)
        } else {
            None
        };

        refresh_counts(store);

        debug!(
            %stamp,
            detections_injected,
            new_alert = new_alert.is_some(),
            "tick applied"
        );

        TickReport {
            timestamp: stamp,
            detections_injected,
            new_alert,
            cpu_usage: store.system_stats.cpu_usage,
            memory_usage: store.system_stats.memory_usage,
            network_latency_ms: store.system_stats.network_latency_ms,
        }
    }

    fn perturb_stats(&mut self, store: &mut DashboardStore) {
        let stats = &mut store.system_stats;
        stats.cpu_usage = clamp(
            stats.cpu_usage + self.rng.gen_range(-5.0..=5.0),
            CPU_USAGE_BOUNDS,
        );
        stats.memory_usage = clamp(
            stats.memory_usage + self.rng.gen_range(-2.5..=2.5),
            MEMORY_USAGE_BOUNDS,
        );
        stats.network_latency_ms = clamp(
            stats.network_latency_ms + self.rng.gen_range(-2.5..=2.5),
            NETWORK_LATENCY_BOUNDS,
        );
        stats.people_detected = apply_delta(stats.people_detected, self.rng.gen_range(-2..=3));
        stats.bags_detected = apply_delta(stats.bags_detected, self.rng.gen_range(-1..=2));
    }

    fn run_detection_round(&mut self, store: &mut DashboardStore, stamp: &str) -> usize {
        let mut injected = 0;
        for camera in store
            .cameras
            .iter_mut()
            .filter(|c| c.is_enabled() && c.status == CameraStatus::Live)
        {
            if self.rng.gen_bool(self.config.camera_detection_probability) {
                camera.detections = vec![self.random_detection(stamp)];
                camera.last_activity = "Just now".to_string();
                injected += 1;
            }
        }
        injected
    }

    fn random_detection(&mut self, stamp: &str) -> Detection {
        let kind = DetectionKind::ALL[self.rng.gen_range(0..DetectionKind::ALL.len())];
        Detection {
            kind,
            confidence: self
                .rng
                .gen_range(DETECTION_CONFIDENCE_MIN..=DETECTION_CONFIDENCE_MAX),
            // Box placement within the 640x480 preview frame
            x: self.rng.gen_range(50..250),
            y: self.rng.gen_range(50..200),
            width: self.rng.gen_range(80..140),
            height: self.rng.gen_range(100..180),
            timestamp: stamp.to_string(),
        }
    }

    fn spawn_alert(&mut self, store: &mut DashboardStore, stamp: &str) -> Option<Alert> {
        if store.cameras.is_empty() {
            return None;
        }
        let (location, camera_id) = {
            let camera = &store.cameras[self.rng.gen_range(0..store.cameras.len())];
            (camera.location.clone(), camera.id.clone())
        };
        let (alert_type, message) = ALERT_CATALOG[self.rng.gen_range(0..ALERT_CATALOG.len())];

        let alert = Alert {
            id: store.next_alert_id(),
            alert_type: alert_type.to_string(),
            message: message.to_string(),
            location,
            camera_id: Some(camera_id),
            timestamp: stamp.to_string(),
            confidence: self.rng.gen_range(ALERT_CONFIDENCE_MIN..=ALERT_CONFIDENCE_MAX),
            status: AlertStatus::Active,
            priority: PRIORITIES[self.rng.gen_range(0..PRIORITIES.len())],
            assigned_to: None,
        };
        store.push_alert(alert.clone());
        Some(alert)
    }
}

fn clamp(value: f64, (lo, hi): (f64, f64)) -> f64 {
    value.clamp(lo, hi)
}

/// Shift a counter by a signed delta, flooring at zero
fn apply_delta(value: u32, delta: i32) -> u32 {
    value.saturating_add_signed(delta)
}

/// Recompute the aggregate counters from the collections so
/// online + warning + offline always equals total
fn refresh_counts(store: &mut DashboardStore) {
    let mut online = 0;
    let mut warning = 0;
    let mut offline = 0;
    for camera in &store.cameras {
        match camera.display_status() {
            CameraStatus::Live => online += 1,
            CameraStatus::Warning => warning += 1,
            CameraStatus::Offline => offline += 1,
        }
    }
    let active_alerts = store.active_alert_count() as u32;

    let stats = &mut store.system_stats;
    stats.total_cameras = store.cameras.len() as u32;
    stats.online_cameras = online;
    stats.warning_cameras = warning;
    stats.offline_cameras = offline;
    stats.alerts_count = active_alerts;
}
