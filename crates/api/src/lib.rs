//! Monitoring Dashboard API Server
//!
//! REST API exposing the state store, derived analytics, and the evidence
//! catalog to the dashboard frontend. The simulation runner is the only
//! background writer; handlers take the store lock for short synchronous
//! sections.

use axum::{
    extract::State,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, RwLock};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod routes;
mod settings;

pub use settings::Settings;

use alerting::NotificationCenter;
use analytics::PerformanceWindow;
use evidence::EvidenceBank;
use simulation::TickReport;
use store::DashboardStore;

/// Application state shared across handlers and the simulation runner
pub struct AppState {
    /// The dashboard state store
    pub store: Arc<RwLock<DashboardStore>>,
    /// Toast-equivalent notification surface
    pub notifications: Arc<RwLock<NotificationCenter>>,
    /// Sliding performance history fed by tick reports
    pub performance: Arc<RwLock<PerformanceWindow>>,
    /// Evidence clip catalog
    pub evidence: EvidenceBank,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state with seeded collections
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(DashboardStore::new())),
            notifications: Arc::new(RwLock::new(NotificationCenter::new())),
            performance: Arc::new(RwLock::new(PerformanceWindow::new())),
            evidence: EvidenceBank::seeded(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: ComponentStatus,
}

/// Component status
#[derive(Debug, Serialize)]
pub struct ComponentStatus {
    pub store: ComponentHealth,
    pub evidence: ComponentHealth,
    pub notifications: ComponentHealth,
}

/// Individual component health
#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    pub status: String,
    pub records: usize,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/snapshot", get(routes::snapshot::get_snapshot))
        .route("/api/v1/cameras", get(routes::cameras::list))
        .route("/api/v1/cameras/power", post(routes::cameras::set_power_all))
        .route("/api/v1/cameras/:id/power", post(routes::cameras::set_power))
        .route("/api/v1/alerts", get(routes::alerts::list))
        .route(
            "/api/v1/alerts/:id/acknowledge",
            post(routes::alerts::acknowledge),
        )
        .route("/api/v1/alerts/:id/escalate", post(routes::alerts::escalate))
        .route("/api/v1/analytics/summary", get(routes::analytics::summary))
        .route("/api/v1/evidence", get(routes::evidence::list))
        .route("/api/v1/evidence/manifest", get(routes::evidence::manifest))
        .route("/api/v1/notifications", get(routes::notifications::list))
        .route(
            "/api/v1/notifications/:id/read",
            post(routes::notifications::mark_read),
        )
        .route(
            "/api/v1/notifications/:id",
            delete(routes::notifications::dismiss),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let store = state.store.read().await;
    let notifications = state.notifications.read().await;

    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        components: ComponentStatus {
            store: ComponentHealth {
                status: if store.is_connected { "ok" } else { "degraded" }.to_string(),
                records: store.cameras.len() + store.alerts.len(),
            },
            evidence: ComponentHealth {
                status: "ok".to_string(),
                records: state.evidence.clips().len(),
            },
            notifications: ComponentHealth {
                status: "ok".to_string(),
                records: notifications.len(),
            },
        },
    };

    Json(response)
}

/// Forward tick reports into the notification surface and the performance
/// window. Ends when the report channel closes (runner shut down).
pub fn spawn_event_pump(
    state: Arc<AppState>,
    mut reports: mpsc::Receiver<TickReport>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(report) = reports.recv().await {
            {
                let mut performance = state.performance.write().await;
                performance.record(
                    report.timestamp.clone(),
                    report.cpu_usage,
                    report.memory_usage,
                    report.network_latency_ms,
                );
            }
            if let Some(alert) = &report.new_alert {
                let mut notifications = state.notifications.write().await;
                notifications.push_alert(alert);
            }
        }
        info!("event pump drained");
    })
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
