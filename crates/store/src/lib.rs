//! Dashboard State Store
//!
//! Single source of truth for the monitoring dashboard: system statistics,
//! the alert list, the camera fleet, and the connection flag. Consumers read
//! snapshots and mutate state only through the named operations.

pub mod seed;
mod store;
mod types;

pub use store::{DashboardStore, Snapshot, ALERT_HISTORY_LIMIT, ESCALATION_TEAM};
pub use types::{
    Alert, AlertPriority, AlertStatus, Camera, CameraStatus, Detection, DetectionKind,
    MediaSource, SystemStats, VideoKind,
};
