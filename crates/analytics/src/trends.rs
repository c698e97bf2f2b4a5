//! Trend series and alert aggregates for the analytics tab

use serde::Serialize;

use store::Alert;

use crate::window::SlidingWindow;

/// Performance samples retained (~2 minutes at the default cadence)
pub const PERFORMANCE_WINDOW_CAPACITY: usize = 60;

/// Share of total detections attributed to one kind
#[derive(Debug, Clone, Serialize)]
pub struct DetectionShare {
    pub name: &'static str,
    pub percent: u32,
}

/// Detection mix across the deployment, in display order
pub fn detection_mix() -> Vec<DetectionShare> {
    vec![
        DetectionShare { name: "Person", percent: 65 },
        DetectionShare { name: "Vehicle", percent: 20 },
        DetectionShare { name: "Bag", percent: 10 },
        DetectionShare { name: "Face", percent: 5 },
    ]
}

/// One bucket of the hourly activity chart
#[derive(Debug, Clone, Serialize)]
pub struct HourlyActivity {
    pub hour: &'static str,
    pub detections: u32,
    pub alerts: u32,
}

/// Detections and alerts per four-hour bucket over the last day
pub fn hourly_activity() -> Vec<HourlyActivity> {
    vec![
        HourlyActivity { hour: "00:00", detections: 12, alerts: 2 },
        HourlyActivity { hour: "04:00", detections: 8, alerts: 1 },
        HourlyActivity { hour: "08:00", detections: 45, alerts: 5 },
        HourlyActivity { hour: "12:00", detections: 67, alerts: 8 },
        HourlyActivity { hour: "16:00", detections: 89, alerts: 12 },
        HourlyActivity { hour: "20:00", detections: 34, alerts: 4 },
    ]
}

/// Aggregates over the current alert list
#[derive(Debug, Clone, Serialize)]
pub struct AlertAggregates {
    pub active: usize,
    pub acknowledged: usize,
    /// Mean confidence across all alerts; 0 when the list is empty
    pub mean_confidence: f64,
}

impl AlertAggregates {
    pub fn compute(alerts: &[Alert]) -> Self {
        let active = alerts.iter().filter(|a| a.is_active()).count();
        let mean_confidence = if alerts.is_empty() {
            0.0
        } else {
            alerts.iter().map(|a| f64::from(a.confidence)).sum::<f64>() / alerts.len() as f64
        };
        Self {
            active,
            acknowledged: alerts.len() - active,
            mean_confidence,
        }
    }
}

/// One point of the performance chart
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceSample {
    /// HH:MM:SS stamp of the tick that produced the sample
    pub time: String,
    pub cpu: f64,
    pub memory: f64,
    pub network: f64,
}

/// Sliding history of per-tick performance samples
#[derive(Debug)]
pub struct PerformanceWindow {
    window: SlidingWindow<PerformanceSample>,
}

impl PerformanceWindow {
    pub fn new() -> Self {
        Self::with_capacity(PERFORMANCE_WINDOW_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            window: SlidingWindow::new(capacity),
        }
    }

    pub fn record(&mut self, time: impl Into<String>, cpu: f64, memory: f64, network: f64) {
        self.window.push(PerformanceSample {
            time: time.into(),
            cpu,
            memory,
            network,
        });
    }

    /// Samples oldest-first, the order the chart draws them
    pub fn samples(&self) -> Vec<PerformanceSample> {
        self.window.iter().cloned().collect()
    }

    pub fn latest(&self) -> Option<&PerformanceSample> {
        self.window.back()
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

impl Default for PerformanceWindow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{seed, DashboardStore};

    #[test]
    fn detection_mix_sums_to_one_hundred() {
        let total: u32 = detection_mix().iter().map(|s| s.percent).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn aggregates_follow_acknowledgement() {
        let mut store = DashboardStore::new();
        store.acknowledge_alert("ALT_001");

        let aggregates = AlertAggregates::compute(&store.alerts);
        assert_eq!(aggregates.active, 3);
        assert_eq!(aggregates.acknowledged, 1);
        // (96 + 87 + 92 + 78) / 4
        assert_eq!(aggregates.mean_confidence, 88.25);
    }

    #[test]
    fn aggregates_over_empty_list_are_zero() {
        let aggregates = AlertAggregates::compute(&[]);
        assert_eq!(aggregates.active, 0);
        assert_eq!(aggregates.acknowledged, 0);
        assert_eq!(aggregates.mean_confidence, 0.0);
    }

    #[test]
    fn performance_window_is_bounded() {
        let mut window = PerformanceWindow::with_capacity(4);
        for i in 0..10 {
            window.record(format!("12:00:{i:02}"), 45.0, 67.0, 12.0);
        }
        assert_eq!(window.len(), 4);
        assert_eq!(window.samples()[0].time, "12:00:06");
        assert_eq!(window.latest().unwrap().time, "12:00:09");
    }

    #[test]
    fn seed_alert_mean_matches_hand_computation() {
        let aggregates = AlertAggregates::compute(&seed::alerts());
        assert_eq!(aggregates.active, 4);
        assert_eq!(aggregates.mean_confidence, 88.25);
    }
}
