//! Evidence Routes

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::AppState;
use evidence::{BulkManifest, EvidenceClip};

/// Query parameters for the evidence endpoint
#[derive(Debug, Deserialize)]
pub struct EvidenceQuery {
    /// Restrict to clips recorded by one camera
    pub camera_id: Option<String>,
}

/// Response for the evidence endpoint
#[derive(Debug, Serialize)]
pub struct EvidenceResponse {
    pub data: Vec<EvidenceClip>,
    pub count: usize,
    pub total_size_bytes: u64,
}

/// List evidence clips
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EvidenceQuery>,
) -> Json<EvidenceResponse> {
    let data: Vec<EvidenceClip> = match &params.camera_id {
        Some(camera_id) => state
            .evidence
            .for_camera(camera_id)
            .into_iter()
            .cloned()
            .collect(),
        None => state.evidence.clips().to_vec(),
    };
    let total_size_bytes = data.iter().map(|c| c.size_bytes).sum();

    Json(EvidenceResponse {
        count: data.len(),
        total_size_bytes,
        data,
    })
}

/// Manifest for downloading the whole catalog
pub async fn manifest(State(state): State<Arc<AppState>>) -> Json<BulkManifest> {
    Json(state.evidence.bulk_manifest())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_covers_the_catalog() {
        let state = Arc::new(AppState::new());
        let Json(response) = list(State(state), Query(EvidenceQuery { camera_id: None })).await;
        assert_eq!(response.count, 6);
        assert_eq!(
            response.total_size_bytes,
            response.data.iter().map(|c| c.size_bytes).sum::<u64>()
        );
    }

    #[tokio::test]
    async fn camera_filter_narrows_the_list() {
        let state = Arc::new(AppState::new());
        let Json(response) = list(
            State(state),
            Query(EvidenceQuery {
                camera_id: Some("CAM_PARK_05".to_string()),
            }),
        )
        .await;
        assert_eq!(response.count, 2);
    }

    #[tokio::test]
    async fn manifest_total_matches_catalog() {
        let state = Arc::new(AppState::new());
        let Json(manifest) = manifest(State(state.clone())).await;
        assert_eq!(manifest.clip_ids.len(), 6);
        assert_eq!(manifest.total_size_bytes, state.evidence.total_size_bytes());
    }
}
