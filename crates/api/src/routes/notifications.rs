//! Notification Routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::AppState;
use alerting::Notification;

/// Response for the notifications endpoint
#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub data: Vec<Notification>,
    pub unread_count: usize,
}

/// List notifications, newest first
pub async fn list(State(state): State<Arc<AppState>>) -> Json<NotificationResponse> {
    let notifications = state.notifications.read().await;
    Json(NotificationResponse {
        data: notifications.entries().to_vec(),
        unread_count: notifications.unread_count(),
    })
}

/// Mark a notification read
pub async fn mark_read(State(state): State<Arc<AppState>>, Path(id): Path<Uuid>) -> Response {
    let mut notifications = state.notifications.write().await;
    if notifications.mark_read(id) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        notification_not_found(id)
    }
}

/// Dismiss a notification
pub async fn dismiss(State(state): State<Arc<AppState>>, Path(id): Path<Uuid>) -> Response {
    let mut notifications = state.notifications.write().await;
    if notifications.dismiss(id) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        notification_not_found(id)
    }
}

fn notification_not_found(id: Uuid) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "unknown notification", "id": id })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alerting::NotificationKind;

    #[tokio::test]
    async fn read_and_dismiss_round_trip() {
        let state = Arc::new(AppState::new());
        let id = {
            let mut notifications = state.notifications.write().await;
            notifications.push(NotificationKind::Info, "System Update", "camera back online")
        };

        let Json(before) = list(State(state.clone())).await;
        assert_eq!(before.unread_count, 1);

        let response = mark_read(State(state.clone()), Path(id)).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let Json(after) = list(State(state.clone())).await;
        assert_eq!(after.unread_count, 0);

        let response = dismiss(State(state.clone()), Path(id)).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let Json(emptied) = list(State(state)).await;
        assert!(emptied.data.is_empty());
    }

    #[tokio::test]
    async fn unknown_notification_maps_to_not_found() {
        let state = Arc::new(AppState::new());
        let response = mark_read(State(state), Path(Uuid::new_v4())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
