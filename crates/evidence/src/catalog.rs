//! Seeded evidence catalog

use serde::Serialize;
use tracing::info;

/// Evidence media kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceKind {
    Video,
}

/// A recorded evidence clip
#[derive(Debug, Clone, Serialize)]
pub struct EvidenceClip {
    /// Unique clip identifier (e.g. `EV_001`)
    pub id: String,
    pub title: String,
    /// Camera the clip was recorded from
    pub camera_id: String,
    /// Recording time, `YYYY-MM-DD HH:MM:SS`
    pub recorded_at: String,
    /// Clip length, `HH:MM:SS`
    pub duration: String,
    pub size_bytes: u64,
    pub kind: EvidenceKind,
    pub thumbnail: String,
}

impl EvidenceClip {
    /// Size formatted the way the gallery displays it
    pub fn size_label(&self) -> String {
        format!("{:.1} MB", self.size_bytes as f64 / 1_000_000.0)
    }
}

/// Everything needed to download the whole catalog at once
#[derive(Debug, Clone, Serialize)]
pub struct BulkManifest {
    pub clip_ids: Vec<String>,
    pub total_size_bytes: u64,
}

/// The evidence clip catalog
#[derive(Debug, Clone)]
pub struct EvidenceBank {
    clips: Vec<EvidenceClip>,
}

impl EvidenceBank {
    /// Catalog seeded with the recorded incident clips
    pub fn seeded() -> Self {
        let bank = Self {
            clips: seed_clips(),
        };
        info!(clips = bank.clips.len(), "evidence bank initialized");
        bank
    }

    pub fn clips(&self) -> &[EvidenceClip] {
        &self.clips
    }

    pub fn find(&self, clip_id: &str) -> Option<&EvidenceClip> {
        self.clips.iter().find(|c| c.id == clip_id)
    }

    /// Clips recorded by one camera, newest first (seed order)
    pub fn for_camera(&self, camera_id: &str) -> Vec<&EvidenceClip> {
        self.clips
            .iter()
            .filter(|c| c.camera_id == camera_id)
            .collect()
    }

    pub fn total_size_bytes(&self) -> u64 {
        self.clips.iter().map(|c| c.size_bytes).sum()
    }

    /// Manifest covering every clip in the catalog
    pub fn bulk_manifest(&self) -> BulkManifest {
        BulkManifest {
            clip_ids: self.clips.iter().map(|c| c.id.clone()).collect(),
            total_size_bytes: self.total_size_bytes(),
        }
    }
}

fn clip(
    id: &str,
    title: &str,
    camera_id: &str,
    recorded_at: &str,
    duration: &str,
    size_bytes: u64,
    thumbnail: &str,
) -> EvidenceClip {
    EvidenceClip {
        id: id.to_string(),
        title: title.to_string(),
        camera_id: camera_id.to_string(),
        recorded_at: recorded_at.to_string(),
        duration: duration.to_string(),
        size_bytes,
        kind: EvidenceKind::Video,
        thumbnail: thumbnail.to_string(),
    }
}

fn seed_clips() -> Vec<EvidenceClip> {
    vec![
        clip(
            "EV_001",
            "Person Detection - Main Entrance",
            "CAM_MAIN_01",
            "2024-01-27 18:35:44",
            "00:02:15",
            45_200_000,
            "/evidence/thumbs/ev_001.jpeg",
        ),
        clip(
            "EV_002",
            "Suspicious Activity - Hallway",
            "CAM_HALL_03",
            "2024-01-27 17:22:10",
            "00:01:45",
            32_800_000,
            "/evidence/thumbs/ev_002.jpeg",
        ),
        clip(
            "EV_003",
            "Restricted Area Breach",
            "CAM_PARK_05",
            "2024-01-27 16:15:33",
            "00:03:20",
            67_100_000,
            "/evidence/thumbs/ev_003.jpeg",
        ),
        clip(
            "EV_004",
            "Motion Alert - Cafeteria",
            "CAM_CAFE_06",
            "2024-01-27 15:45:12",
            "00:01:30",
            28_500_000,
            "/evidence/thumbs/ev_004.jpeg",
        ),
        clip(
            "EV_005",
            "Face Detection - Lobby",
            "CAM_LOBBY_02",
            "2024-01-27 14:30:55",
            "00:02:45",
            52_300_000,
            "/evidence/thumbs/ev_005.jpeg",
        ),
        clip(
            "EV_006",
            "Vehicle Detection - Parking",
            "CAM_PARK_05",
            "2024-01-27 13:20:18",
            "00:04:10",
            89_700_000,
            "/evidence/thumbs/ev_006.jpeg",
        ),
    ]
}
