//! Simulation Ticker
//!
//! Advances the simulated world on a fixed cadence: refreshes camera
//! timestamps, perturbs system statistics within bounds, injects detections
//! into live cameras, and occasionally synthesizes a new alert. The tick is a
//! pure synchronous state transition; randomness comes through an injected
//! [`rand::Rng`] so deterministic seeds reproduce whole runs.

pub mod config;
mod runner;
mod ticker;

pub use config::SimulationConfig;
pub use runner::{spawn, SimulationHandle};
pub use ticker::{TickReport, Ticker};

use thiserror::Error;

/// Simulation error types
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("tick interval must be non-zero")]
    ZeroInterval,

    #[error("probability out of range: {name} = {value}")]
    InvalidProbability { name: &'static str, value: f64 },
}
