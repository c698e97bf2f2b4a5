//! Analytics & Health
//!
//! Display-only derived metrics: per-camera health scores, fleet summaries,
//! alert aggregates, detection-mix and hourly series, and the sliding window
//! of performance samples. Everything here is recomputed on read; nothing is
//! stored back into the state store.

mod health;
mod trends;
mod window;

pub use health::{health_score, FleetSummary, WARNING_HEALTH_SCORE};
pub use trends::{
    detection_mix, hourly_activity, AlertAggregates, DetectionShare, HourlyActivity,
    PerformanceSample, PerformanceWindow, PERFORMANCE_WINDOW_CAPACITY,
};
pub use window::SlidingWindow;
