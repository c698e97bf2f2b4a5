//! Alert Routes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::AppState;
use store::{Alert, AlertStatus};

/// Query parameters for the alerts endpoint
#[derive(Debug, Deserialize)]
pub struct AlertQuery {
    /// Free-text filter matched against message or location
    pub q: Option<String>,
    /// Filter by lifecycle status
    pub status: Option<AlertStatus>,
    /// Maximum number of records
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    50
}

/// Response for the alerts endpoint
#[derive(Debug, Serialize)]
pub struct AlertResponse {
    pub data: Vec<Alert>,
    pub count: usize,
    pub active_count: usize,
}

/// Get alerts, newest first
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AlertQuery>,
) -> Json<AlertResponse> {
    let store = state.store.read().await;

    let query = params.q.unwrap_or_default();
    let data: Vec<Alert> = alerting::search(&store.alerts, &query)
        .into_iter()
        .filter(|a| params.status.map_or(true, |s| a.status == s))
        .take(params.limit)
        .cloned()
        .collect();

    let active_count = data.iter().filter(|a| a.is_active()).count();

    Json(AlertResponse {
        count: data.len(),
        active_count,
        data,
    })
}

/// Mark an alert acknowledged
pub async fn acknowledge(
    State(state): State<Arc<AppState>>,
    Path(alert_id): Path<String>,
) -> Response {
    let mut store = state.store.write().await;
    if store.acknowledge_alert(&alert_id) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        alert_not_found(alert_id)
    }
}

/// Escalate an alert to the response team
pub async fn escalate(
    State(state): State<Arc<AppState>>,
    Path(alert_id): Path<String>,
) -> Response {
    let mut store = state.store.write().await;
    if store.escalate_alert(&alert_id) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        alert_not_found(alert_id)
    }
}

fn alert_not_found(alert_id: String) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "unknown alert", "alert_id": alert_id })),
    )
        .into_response()
}
