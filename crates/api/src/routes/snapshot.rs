//! Snapshot Route

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::AppState;
use store::Snapshot;

/// Full read-only view of the store
pub async fn get_snapshot(State(state): State<Arc<AppState>>) -> Json<Snapshot> {
    let store = state.store.read().await;
    Json(store.snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn snapshot_reflects_seeded_state() {
        let state = Arc::new(AppState::new());
        let Json(snapshot) = get_snapshot(State(state)).await;

        assert_eq!(snapshot.cameras.len(), 8);
        assert_eq!(snapshot.alerts.len(), 4);
        assert!(snapshot.is_connected);
    }
}
