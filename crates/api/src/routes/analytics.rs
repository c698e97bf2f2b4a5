//! Analytics Routes

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;
use analytics::{
    detection_mix, hourly_activity, AlertAggregates, DetectionShare, FleetSummary,
    HourlyActivity, PerformanceSample,
};

/// Everything the analytics tab renders in one payload
#[derive(Debug, Serialize)]
pub struct AnalyticsSummary {
    pub fleet: FleetSummary,
    pub alerts: AlertAggregates,
    pub total_detections: u32,
    pub detection_mix: Vec<DetectionShare>,
    pub hourly_activity: Vec<HourlyActivity>,
    pub performance: Vec<PerformanceSample>,
}

/// Get the analytics summary
pub async fn summary(State(state): State<Arc<AppState>>) -> Json<AnalyticsSummary> {
    let store = state.store.read().await;
    let performance = state.performance.read().await;

    Json(AnalyticsSummary {
        fleet: FleetSummary::compute(&store.cameras),
        alerts: AlertAggregates::compute(&store.alerts),
        total_detections: store.system_stats.people_detected + store.system_stats.bags_detected,
        detection_mix: detection_mix(),
        hourly_activity: hourly_activity(),
        performance: performance.samples(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn summary_aggregates_the_seeded_store() {
        let state = Arc::new(AppState::new());
        let Json(summary) = summary(State(state)).await;

        assert_eq!(summary.fleet.online, 6);
        assert_eq!(summary.alerts.active, 4);
        assert_eq!(summary.total_detections, 59);
        assert_eq!(summary.detection_mix.len(), 4);
        assert_eq!(summary.hourly_activity.len(), 6);
        assert!(summary.performance.is_empty());
    }
}
