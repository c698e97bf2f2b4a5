//! State store implementation

use serde::Serialize;
use tracing::{debug, info};

use crate::seed;
use crate::types::{Alert, AlertPriority, AlertStatus, Camera, CameraStatus, SystemStats};

/// Most recent alerts retained; older entries are dropped
pub const ALERT_HISTORY_LIMIT: usize = 10;

/// Team an escalated alert is handed to
pub const ESCALATION_TEAM: &str = "Security Response Team";

/// Read-only view of the store at a point in time
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub system_stats: SystemStats,
    pub alerts: Vec<Alert>,
    pub cameras: Vec<Camera>,
    pub is_connected: bool,
}

/// Single source of truth for dashboard state
///
/// All mutation goes through the ticker or the named user operations; both
/// run to completion while holding the outer lock, so no further
/// coordination is needed here. Operations over unknown identifiers are
/// silent no-ops reported through the `bool` return, never faults.
#[derive(Debug)]
pub struct DashboardStore {
    pub system_stats: SystemStats,
    pub alerts: Vec<Alert>,
    pub cameras: Vec<Camera>,
    pub is_connected: bool,
    next_alert_seq: u64,
}

impl DashboardStore {
    /// Create a store populated with the fixed seed data
    pub fn new() -> Self {
        let alerts = seed::alerts();
        let cameras = seed::cameras();
        info!(
            cameras = cameras.len(),
            alerts = alerts.len(),
            "dashboard store initialized"
        );
        Self {
            system_stats: seed::system_stats(),
            next_alert_seq: alerts.len() as u64 + 1,
            alerts,
            cameras,
            is_connected: true,
        }
    }

    /// Clone the current collections into a read-only view
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            system_stats: self.system_stats.clone(),
            alerts: self.alerts.clone(),
            cameras: self.cameras.clone(),
            is_connected: self.is_connected,
        }
    }

    pub fn camera(&self, camera_id: &str) -> Option<&Camera> {
        self.cameras.iter().find(|c| c.id == camera_id)
    }

    pub fn alert(&self, alert_id: &str) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.id == alert_id)
    }

    /// Mark an alert acknowledged. Idempotent; returns whether the id matched.
    pub fn acknowledge_alert(&mut self, alert_id: &str) -> bool {
        match self.alerts.iter_mut().find(|a| a.id == alert_id) {
            Some(alert) => {
                alert.status = AlertStatus::Acknowledged;
                info!(alert_id, "alert acknowledged");
                true
            }
            None => {
                debug!(alert_id, "acknowledge ignored, unknown alert");
                false
            }
        }
    }

    /// Raise an alert to high priority and hand it to the response team.
    /// Returns whether the id matched.
    pub fn escalate_alert(&mut self, alert_id: &str) -> bool {
        match self.alerts.iter_mut().find(|a| a.id == alert_id) {
            Some(alert) => {
                alert.priority = AlertPriority::High;
                alert.assigned_to = Some(ESCALATION_TEAM.to_string());
                info!(alert_id, "alert escalated");
                true
            }
            None => {
                debug!(alert_id, "escalate ignored, unknown alert");
                false
            }
        }
    }

    /// Set the manual on/off override for a camera. Disabling also forces the
    /// stored status to offline, so a later re-enable does not bring back the
    /// pre-disable status. Returns whether the id matched.
    pub fn toggle_camera(&mut self, camera_id: &str, enabled: bool) -> bool {
        match self.cameras.iter_mut().find(|c| c.id == camera_id) {
            Some(camera) => {
                camera.is_enabled = Some(enabled);
                if !enabled {
                    camera.status = CameraStatus::Offline;
                }
                info!(camera_id, enabled, "camera toggled");
                true
            }
            None => {
                debug!(camera_id, "toggle ignored, unknown camera");
                false
            }
        }
    }

    /// Apply the on/off override to every camera; returns how many changed.
    pub fn toggle_all(&mut self, enabled: bool) -> usize {
        let ids: Vec<String> = self.cameras.iter().map(|c| c.id.clone()).collect();
        ids.iter()
            .filter(|id| self.toggle_camera(id, enabled))
            .count()
    }

    /// Next alert identifier in the `ALT_NNN` sequence
    pub fn next_alert_id(&mut self) -> String {
        let id = format!("ALT_{:03}", self.next_alert_seq);
        self.next_alert_seq += 1;
        id
    }

    /// Prepend an alert and drop history beyond [`ALERT_HISTORY_LIMIT`]
    pub fn push_alert(&mut self, alert: Alert) {
        self.alerts.insert(0, alert);
        self.alerts.truncate(ALERT_HISTORY_LIMIT);
    }

    pub fn active_alert_count(&self) -> usize {
        self.alerts.iter().filter(|a| a.is_active()).count()
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AlertPriority, AlertStatus, CameraStatus};

    fn test_alert(id: &str) -> Alert {
        Alert {
            id: id.to_string(),
            alert_type: "Motion Detected".to_string(),
            message: "Motion detected in monitored zone".to_string(),
            location: "Gymnasium".to_string(),
            camera_id: Some("CAM_GYM_08".to_string()),
            timestamp: "12:00:00".to_string(),
            confidence: 80,
            status: AlertStatus::Active,
            priority: AlertPriority::Low,
            assigned_to: None,
        }
    }

    #[test]
    fn acknowledge_updates_only_the_matching_alert() {
        let mut store = DashboardStore::new();
        assert!(store.acknowledge_alert("ALT_001"));

        assert_eq!(
            store.alert("ALT_001").unwrap().status,
            AlertStatus::Acknowledged
        );
        for id in ["ALT_002", "ALT_003", "ALT_004"] {
            assert_eq!(store.alert(id).unwrap().status, AlertStatus::Active);
        }
    }

    #[test]
    fn acknowledge_is_idempotent() {
        let mut store = DashboardStore::new();
        assert!(store.acknowledge_alert("ALT_002"));
        let once = store.snapshot();

        assert!(store.acknowledge_alert("ALT_002"));
        let twice = store.snapshot();

        assert_eq!(
            serde_json::to_value(&once.alerts).unwrap(),
            serde_json::to_value(&twice.alerts).unwrap()
        );
    }

    #[test]
    fn unknown_ids_are_silent_no_ops() {
        let mut store = DashboardStore::new();
        let before = serde_json::to_value(store.snapshot()).unwrap();

        assert!(!store.acknowledge_alert("ALT_999"));
        assert!(!store.escalate_alert("ALT_999"));
        assert!(!store.toggle_camera("CAM_NOWHERE_99", false));

        let after = serde_json::to_value(store.snapshot()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn escalate_forces_high_priority_and_assignment() {
        let mut store = DashboardStore::new();
        assert_eq!(
            store.alert("ALT_004").unwrap().priority,
            AlertPriority::Medium
        );

        assert!(store.escalate_alert("ALT_004"));
        let alert = store.alert("ALT_004").unwrap();
        assert_eq!(alert.priority, AlertPriority::High);
        assert_eq!(alert.assigned_to.as_deref(), Some(ESCALATION_TEAM));

        // Escalating an already-high alert keeps it high
        assert!(store.escalate_alert("ALT_001"));
        assert_eq!(store.alert("ALT_001").unwrap().priority, AlertPriority::High);
    }

    #[test]
    fn disabling_offline_camera_keeps_it_offline() {
        let mut store = DashboardStore::new();
        let library = store.camera("CAM_LIB_07").unwrap();
        assert_eq!(library.status, CameraStatus::Offline);
        assert_eq!(library.is_enabled, None);

        assert!(store.toggle_camera("CAM_LIB_07", false));
        let library = store.camera("CAM_LIB_07").unwrap();
        assert_eq!(library.is_enabled, Some(false));
        assert_eq!(library.display_status(), CameraStatus::Offline);
    }

    #[test]
    fn reenabling_does_not_restore_previous_status() {
        let mut store = DashboardStore::new();
        assert_eq!(store.camera("CAM_MAIN_01").unwrap().status, CameraStatus::Live);

        store.toggle_camera("CAM_MAIN_01", false);
        store.toggle_camera("CAM_MAIN_01", true);

        let cam = store.camera("CAM_MAIN_01").unwrap();
        assert_eq!(cam.is_enabled, Some(true));
        assert_eq!(cam.display_status(), CameraStatus::Offline);
    }

    #[test]
    fn toggle_all_covers_the_fleet() {
        let mut store = DashboardStore::new();
        let count = store.toggle_all(false);
        assert_eq!(count, store.cameras.len());
        assert!(store
            .cameras
            .iter()
            .all(|c| c.display_status() == CameraStatus::Offline));
    }

    #[test]
    fn alert_history_never_exceeds_the_cap() {
        let mut store = DashboardStore::new();
        for _ in 0..25 {
            let id = store.next_alert_id();
            store.push_alert(test_alert(&id));
        }
        assert_eq!(store.alerts.len(), ALERT_HISTORY_LIMIT);
        // Newest first
        assert_eq!(store.alerts[0].id, "ALT_029");
    }

    #[test]
    fn alert_ids_are_monotonic_and_unique() {
        let mut store = DashboardStore::new();
        assert_eq!(store.next_alert_id(), "ALT_005");
        assert_eq!(store.next_alert_id(), "ALT_006");
    }

    #[test]
    fn snapshot_is_detached_from_later_mutation() {
        let mut store = DashboardStore::new();
        let snap = store.snapshot();
        store.acknowledge_alert("ALT_001");
        assert_eq!(snap.alerts[0].status, AlertStatus::Active);
        assert!(snap.is_connected);
    }
}
