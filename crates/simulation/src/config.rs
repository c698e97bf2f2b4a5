//! Simulation configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::SimulationError;

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Tick cadence in milliseconds (default: 2000)
    pub tick_interval_ms: u64,
    /// Chance per tick that a detection round runs at all
    pub detection_round_probability: f64,
    /// Chance per live camera, within a round, of receiving a detection
    pub camera_detection_probability: f64,
    /// Chance per tick of synthesizing a new alert
    pub alert_probability: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 2000,
            detection_round_probability: 0.3,
            camera_detection_probability: 0.2,
            alert_probability: 0.05,
        }
    }
}

impl SimulationConfig {
    /// Fast-cadence config for demos and soak tests
    pub fn accelerated() -> Self {
        Self {
            tick_interval_ms: 250,
            detection_round_probability: 0.6,
            camera_detection_probability: 0.4,
            alert_probability: 0.2,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Reject intervals and probabilities the ticker cannot run with
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.tick_interval_ms == 0 {
            return Err(SimulationError::ZeroInterval);
        }
        for (name, value) in [
            ("detection_round_probability", self.detection_round_probability),
            ("camera_detection_probability", self.camera_detection_probability),
            ("alert_probability", self.alert_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimulationError::InvalidProbability { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
        assert!(SimulationConfig::accelerated().validate().is_ok());
    }

    #[test]
    fn zero_interval_is_rejected() {
        let config = SimulationConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimulationError::ZeroInterval)
        ));
    }

    #[test]
    fn out_of_range_probability_is_rejected() {
        let config = SimulationConfig {
            alert_probability: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimulationError::InvalidProbability { name: "alert_probability", .. })
        ));
    }
}
