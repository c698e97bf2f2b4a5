//! Fixed seed data loaded at store initialization
//!
//! The simulated site is a campus installation of eight cameras. Seed values
//! stay constant so freshly constructed stores are identical; everything that
//! changes afterwards goes through the ticker or a user operation.

use crate::types::{
    Alert, AlertPriority, AlertStatus, Camera, CameraStatus, Detection, DetectionKind,
    MediaSource, SystemStats,
};

const SEED_CAMERA_TIMESTAMP: &str = "22:20:16";
const SEED_ALERT_TIMESTAMP: &str = "18:35:44";

/// Initial aggregate counters
pub fn system_stats() -> SystemStats {
    SystemStats {
        total_cameras: 8,
        online_cameras: 6,
        warning_cameras: 1,
        offline_cameras: 1,
        people_detected: 47,
        bags_detected: 12,
        alerts_count: 4,
        system_health: 99.2,
        cpu_usage: 45.0,
        memory_usage: 67.0,
        network_latency_ms: 12.0,
        uptime_label: "99.8%".to_string(),
    }
}

/// The four alerts present when the dashboard opens
pub fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "ALT_001".to_string(),
            alert_type: "Person Detected".to_string(),
            message: "Unauthorized person detected in restricted area".to_string(),
            location: "Main Entrance".to_string(),
            camera_id: Some("CAM_MAIN_01".to_string()),
            timestamp: SEED_ALERT_TIMESTAMP.to_string(),
            confidence: 96,
            status: AlertStatus::Active,
            priority: AlertPriority::High,
            assigned_to: None,
        },
        Alert {
            id: "ALT_002".to_string(),
            alert_type: "Suspicious Activity".to_string(),
            message: "Unusual movement pattern detected".to_string(),
            location: "Main Hallway".to_string(),
            camera_id: Some("CAM_HALL_03".to_string()),
            timestamp: SEED_ALERT_TIMESTAMP.to_string(),
            confidence: 87,
            status: AlertStatus::Active,
            priority: AlertPriority::High,
            assigned_to: None,
        },
        Alert {
            id: "ALT_003".to_string(),
            alert_type: "Restricted Area Breach".to_string(),
            message: "Person entered restricted zone".to_string(),
            location: "Parking Lot".to_string(),
            camera_id: Some("CAM_PARK_05".to_string()),
            timestamp: SEED_ALERT_TIMESTAMP.to_string(),
            confidence: 92,
            status: AlertStatus::Active,
            priority: AlertPriority::High,
            assigned_to: None,
        },
        Alert {
            id: "ALT_004".to_string(),
            alert_type: "Camera Fault".to_string(),
            message: "Camera connection unstable".to_string(),
            location: "Library".to_string(),
            camera_id: Some("CAM_LIB_07".to_string()),
            timestamp: SEED_ALERT_TIMESTAMP.to_string(),
            confidence: 78,
            status: AlertStatus::Active,
            priority: AlertPriority::Medium,
            assigned_to: None,
        },
    ]
}

fn placeholder(label: &str) -> Option<MediaSource> {
    Some(MediaSource::Image {
        url: format!("/placeholder.svg?height=300&width=400&text={label}"),
    })
}

/// The eight-camera fleet
pub fn cameras() -> Vec<Camera> {
    vec![
        Camera {
            id: "CAM_MAIN_01".to_string(),
            location: "Main Entrance".to_string(),
            status: CameraStatus::Live,
            timestamp: SEED_CAMERA_TIMESTAMP.to_string(),
            media: Some(MediaSource::Webcam),
            detections: Vec::new(),
            fps: 30,
            resolution: "1080p".to_string(),
            last_activity: "2s ago".to_string(),
            temperature: 42,
            uptime: 99.8,
            is_enabled: None,
        },
        Camera {
            id: "CAM_LOBBY_02".to_string(),
            location: "Reception Lobby".to_string(),
            status: CameraStatus::Live,
            timestamp: SEED_CAMERA_TIMESTAMP.to_string(),
            media: placeholder("Reception+Lobby"),
            detections: Vec::new(),
            fps: 25,
            resolution: "720p".to_string(),
            last_activity: "1s ago".to_string(),
            temperature: 38,
            uptime: 98.5,
            is_enabled: None,
        },
        Camera {
            id: "CAM_HALL_03".to_string(),
            location: "Main Hallway".to_string(),
            status: CameraStatus::Live,
            timestamp: SEED_CAMERA_TIMESTAMP.to_string(),
            media: placeholder("Main+Hallway"),
            detections: vec![Detection {
                kind: DetectionKind::Person,
                confidence: 94,
                x: 150,
                y: 100,
                width: 80,
                height: 120,
                timestamp: SEED_CAMERA_TIMESTAMP.to_string(),
            }],
            fps: 30,
            resolution: "1080p".to_string(),
            last_activity: "3s ago".to_string(),
            temperature: 41,
            uptime: 99.2,
            is_enabled: None,
        },
        Camera {
            id: "CAM_LAB_04".to_string(),
            location: "Computer Lab".to_string(),
            status: CameraStatus::Warning,
            timestamp: SEED_CAMERA_TIMESTAMP.to_string(),
            media: placeholder("Computer+Lab"),
            detections: Vec::new(),
            fps: 20,
            resolution: "720p".to_string(),
            last_activity: "5s ago".to_string(),
            temperature: 45,
            uptime: 95.3,
            is_enabled: None,
        },
        Camera {
            id: "CAM_PARK_05".to_string(),
            location: "Parking Lot".to_string(),
            status: CameraStatus::Live,
            timestamp: SEED_CAMERA_TIMESTAMP.to_string(),
            media: placeholder("Parking+Lot"),
            detections: vec![Detection {
                kind: DetectionKind::Person,
                confidence: 89,
                x: 200,
                y: 150,
                width: 70,
                height: 110,
                timestamp: SEED_CAMERA_TIMESTAMP.to_string(),
            }],
            fps: 25,
            resolution: "1080p".to_string(),
            last_activity: "2s ago".to_string(),
            temperature: 39,
            uptime: 97.8,
            is_enabled: None,
        },
        Camera {
            id: "CAM_CAFE_06".to_string(),
            location: "Cafeteria".to_string(),
            status: CameraStatus::Live,
            timestamp: SEED_CAMERA_TIMESTAMP.to_string(),
            media: placeholder("Cafeteria"),
            detections: Vec::new(),
            fps: 30,
            resolution: "720p".to_string(),
            last_activity: "1s ago".to_string(),
            temperature: 43,
            uptime: 99.1,
            is_enabled: None,
        },
        Camera {
            id: "CAM_LIB_07".to_string(),
            location: "Library".to_string(),
            status: CameraStatus::Offline,
            timestamp: SEED_CAMERA_TIMESTAMP.to_string(),
            media: placeholder("Library"),
            detections: Vec::new(),
            fps: 0,
            resolution: "N/A".to_string(),
            last_activity: "5m ago".to_string(),
            temperature: 0,
            uptime: 0.0,
            is_enabled: None,
        },
        Camera {
            id: "CAM_GYM_08".to_string(),
            location: "Gymnasium".to_string(),
            status: CameraStatus::Live,
            timestamp: SEED_CAMERA_TIMESTAMP.to_string(),
            media: placeholder("Gymnasium"),
            detections: Vec::new(),
            fps: 25,
            resolution: "1080p".to_string(),
            last_activity: "4s ago".to_string(),
            temperature: 40,
            uptime: 98.7,
            is_enabled: None,
        },
    ]
}
