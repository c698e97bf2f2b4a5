//! Server settings

use serde::Deserialize;

use simulation::SimulationConfig;

/// Server configuration, loadable from the environment
///
/// Every field has a default; `SENTRYVIEW_`-prefixed environment variables
/// override them (e.g. `SENTRYVIEW_BIND_ADDR`, `SENTRYVIEW_RNG_SEED`).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Socket address the API server binds to
    pub bind_addr: String,
    /// Simulation tick cadence in milliseconds
    pub tick_interval_ms: u64,
    /// Fixed random seed for reproducible runs; entropy when absent
    pub rng_seed: Option<u64>,
}

impl Settings {
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("bind_addr", "0.0.0.0:8080")?
            .set_default("tick_interval_ms", 2000i64)?
            .add_source(config::Environment::with_prefix("SENTRYVIEW"))
            .build()?
            .try_deserialize()
    }

    /// Simulation config with the configured cadence
    pub fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            tick_interval_ms: self.tick_interval_ms,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        let settings = Settings::load().unwrap();
        assert_eq!(settings.bind_addr, "0.0.0.0:8080");
        assert_eq!(settings.tick_interval_ms, 2000);
        assert_eq!(settings.rng_seed, None);
    }

    #[test]
    fn simulation_config_carries_the_cadence() {
        let settings = Settings {
            bind_addr: "127.0.0.1:9000".to_string(),
            tick_interval_ms: 500,
            rng_seed: Some(7),
        };
        let config = settings.simulation_config();
        assert_eq!(config.tick_interval_ms, 500);
        assert!(config.validate().is_ok());
    }
}
