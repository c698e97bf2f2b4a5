//! Domain types shared across the dashboard

use serde::{Deserialize, Serialize};

/// Camera operational status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraStatus {
    Live,
    Warning,
    Offline,
}

/// Video feed kind for cameras backed by a recorded or embedded stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    Mp4,
    Iframe,
}

/// Media backing a camera feed
///
/// Locators are opaque strings resolved by the consuming frontend; the core
/// never fetches or validates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum MediaSource {
    /// Still image placeholder
    Image { url: String },
    /// Recorded or embedded video feed
    Video { url: String, kind: VideoKind },
    /// Local capture device
    Webcam,
}

/// Simulated recognition result kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectionKind {
    Person,
    Vehicle,
    Bag,
    Face,
}

impl DetectionKind {
    /// All kinds, in display order
    pub const ALL: [DetectionKind; 4] = [
        DetectionKind::Person,
        DetectionKind::Vehicle,
        DetectionKind::Bag,
        DetectionKind::Face,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionKind::Person => "Person",
            DetectionKind::Vehicle => "Vehicle",
            DetectionKind::Bag => "Bag",
            DetectionKind::Face => "Face",
        }
    }
}

/// A single recognition result attached to a camera for one tick
///
/// Bounding box coordinates are source-frame pixels. Detections are replaced
/// wholesale every tick, never accumulated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub kind: DetectionKind,
    /// Confidence percentage (0-100)
    pub confidence: u8,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub timestamp: String,
}

/// A monitored camera
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// Unique camera identifier (e.g. `CAM_MAIN_01`)
    pub id: String,
    pub location: String,
    pub status: CameraStatus,
    /// Last refresh time, HH:MM:SS 24-hour
    pub timestamp: String,
    pub media: Option<MediaSource>,
    pub detections: Vec<Detection>,
    pub fps: u32,
    pub resolution: String,
    pub last_activity: String,
    /// Housing temperature in °C
    pub temperature: i32,
    /// Uptime percentage
    pub uptime: f64,
    /// Manual on/off override; absent means enabled
    #[serde(default)]
    pub is_enabled: Option<bool>,
}

impl Camera {
    /// Whether the camera is enabled; an unset override counts as enabled.
    pub fn is_enabled(&self) -> bool {
        self.is_enabled != Some(false)
    }

    /// Status as presented to consumers: a disabled camera always displays
    /// offline, whatever its stored status.
    pub fn display_status(&self) -> CameraStatus {
        if self.is_enabled() {
            self.status
        } else {
            CameraStatus::Offline
        }
    }

    pub fn has_video_feed(&self) -> bool {
        matches!(self.media, Some(MediaSource::Video { .. }))
    }

    pub fn is_webcam(&self) -> bool {
        matches!(self.media, Some(MediaSource::Webcam))
    }
}

/// Alert priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    High,
    Medium,
    Low,
}

impl AlertPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertPriority::High => "high",
            AlertPriority::Medium => "medium",
            AlertPriority::Low => "low",
        }
    }
}

/// Alert lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Acknowledged,
}

/// A security alert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Unique, monotonically assigned identifier (e.g. `ALT_001`)
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub message: String,
    pub location: String,
    /// Association with the originating camera, not ownership
    #[serde(default)]
    pub camera_id: Option<String>,
    pub timestamp: String,
    /// Confidence percentage (0-100)
    pub confidence: u8,
    pub status: AlertStatus,
    pub priority: AlertPriority,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

impl Alert {
    pub fn is_active(&self) -> bool {
        self.status == AlertStatus::Active
    }
}

/// Aggregate system counters shown in the dashboard header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStats {
    pub total_cameras: u32,
    pub online_cameras: u32,
    pub warning_cameras: u32,
    pub offline_cameras: u32,
    pub people_detected: u32,
    pub bags_detected: u32,
    pub alerts_count: u32,
    /// Overall system health percentage
    pub system_health: f64,
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub network_latency_ms: f64,
    pub uptime_label: String,
}
