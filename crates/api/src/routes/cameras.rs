//! Camera Routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::AppState;
use analytics::{health_score, FleetSummary};
use store::{Camera, CameraStatus};

/// Camera enriched with its derived display fields
#[derive(Debug, Serialize)]
pub struct CameraView {
    #[serde(flatten)]
    pub camera: Camera,
    pub display_status: CameraStatus,
    pub health_score: f64,
}

impl From<Camera> for CameraView {
    fn from(camera: Camera) -> Self {
        Self {
            display_status: camera.display_status(),
            health_score: health_score(&camera),
            camera,
        }
    }
}

/// Response for the camera list endpoint
#[derive(Debug, Serialize)]
pub struct CameraResponse {
    pub data: Vec<CameraView>,
    pub summary: FleetSummary,
}

/// Body for the power endpoints
#[derive(Debug, Deserialize)]
pub struct PowerRequest {
    pub enabled: bool,
}

/// Response for the fleet-wide power endpoint
#[derive(Debug, Serialize)]
pub struct PowerAllResponse {
    pub changed: usize,
}

/// List the camera fleet with derived status and health
pub async fn list(State(state): State<Arc<AppState>>) -> Json<CameraResponse> {
    let store = state.store.read().await;
    let summary = FleetSummary::compute(&store.cameras);
    let data = store.cameras.iter().cloned().map(CameraView::from).collect();

    Json(CameraResponse { data, summary })
}

/// Set the manual on/off override for one camera
pub async fn set_power(
    State(state): State<Arc<AppState>>,
    Path(camera_id): Path<String>,
    Json(request): Json<PowerRequest>,
) -> Response {
    let mut store = state.store.write().await;
    if store.toggle_camera(&camera_id, request.enabled) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "unknown camera", "camera_id": camera_id })),
        )
            .into_response()
    }
}

/// Set the manual on/off override for every camera
pub async fn set_power_all(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PowerRequest>,
) -> Json<PowerAllResponse> {
    let mut store = state.store.write().await;
    let changed = store.toggle_all(request.enabled);
    Json(PowerAllResponse { changed })
}
