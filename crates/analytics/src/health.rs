//! Camera health scoring and fleet summary

use serde::Serialize;

use store::{Camera, CameraStatus};

/// Fixed score for a camera in the warning state
pub const WARNING_HEALTH_SCORE: f64 = 60.0;

/// Derived 0-100 health score for a camera
///
/// Disabled and offline cameras score 0, warning cameras score the fixed
/// constant, healthy cameras score their uptime capped at 100.
pub fn health_score(camera: &Camera) -> f64 {
    if !camera.is_enabled() {
        return 0.0;
    }
    match camera.display_status() {
        CameraStatus::Offline => 0.0,
        CameraStatus::Warning => WARNING_HEALTH_SCORE,
        CameraStatus::Live => camera.uptime.min(100.0),
    }
}

/// Header cards of the camera-health tab
#[derive(Debug, Clone, Serialize)]
pub struct FleetSummary {
    /// Enabled cameras currently live
    pub online: usize,
    /// Enabled cameras in the warning state
    pub warning: usize,
    /// Manually disabled cameras
    pub disabled: usize,
    /// Cameras backed by a recorded or embedded video feed
    pub video_feeds: usize,
    /// Cameras backed by a local capture device
    pub webcams: usize,
    /// Rounded mean health score across enabled cameras; 0 for an empty fleet
    pub average_health: f64,
}

impl FleetSummary {
    pub fn compute(cameras: &[Camera]) -> Self {
        let enabled: Vec<&Camera> = cameras.iter().filter(|c| c.is_enabled()).collect();

        let average_health = if enabled.is_empty() {
            0.0
        } else {
            let sum: f64 = enabled.iter().map(|c| health_score(c)).sum();
            (sum / enabled.len() as f64).round()
        };

        Self {
            online: enabled
                .iter()
                .filter(|c| c.display_status() == CameraStatus::Live)
                .count(),
            warning: enabled
                .iter()
                .filter(|c| c.display_status() == CameraStatus::Warning)
                .count(),
            disabled: cameras.len() - enabled.len(),
            video_feeds: cameras.iter().filter(|c| c.has_video_feed()).count(),
            webcams: cameras.iter().filter(|c| c.is_webcam()).count(),
            average_health,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{seed, DashboardStore};

    #[test]
    fn disabled_camera_scores_zero_whatever_its_stored_state() {
        let mut camera = seed::cameras().remove(0);
        camera.uptime = 99.8;
        camera.is_enabled = Some(false);
        assert_eq!(health_score(&camera), 0.0);
    }

    #[test]
    fn score_follows_status_then_uptime() {
        let cameras = seed::cameras();
        let by_id = |id: &str| cameras.iter().find(|c| c.id == id).unwrap();

        assert_eq!(health_score(by_id("CAM_MAIN_01")), 99.8);
        assert_eq!(health_score(by_id("CAM_LAB_04")), WARNING_HEALTH_SCORE);
        assert_eq!(health_score(by_id("CAM_LIB_07")), 0.0);
    }

    #[test]
    fn uptime_is_capped_at_one_hundred() {
        let mut camera = seed::cameras().remove(0);
        camera.uptime = 104.2;
        assert_eq!(health_score(&camera), 100.0);
    }

    #[test]
    fn fleet_summary_counts_the_seed_fleet() {
        let store = DashboardStore::new();
        let summary = FleetSummary::compute(&store.cameras);

        assert_eq!(summary.online, 6);
        assert_eq!(summary.warning, 1);
        assert_eq!(summary.disabled, 0);
        assert_eq!(summary.webcams, 1);
        assert_eq!(summary.video_feeds, 0);
        // (99.8 + 98.5 + 99.2 + 60 + 97.8 + 99.1 + 0 + 98.7) / 8
        assert_eq!(summary.average_health, 82.0);
    }

    #[test]
    fn disabling_the_fleet_zeroes_the_summary() {
        let mut store = DashboardStore::new();
        store.toggle_all(false);
        let summary = FleetSummary::compute(&store.cameras);

        assert_eq!(summary.online, 0);
        assert_eq!(summary.warning, 0);
        assert_eq!(summary.disabled, store.cameras.len());
        assert_eq!(summary.average_health, 0.0);
    }
}
