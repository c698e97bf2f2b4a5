//! Async runner owning the tick timer
//!
//! The timer is a scoped resource: [`spawn`] acquires it and the returned
//! handle releases it, so a torn-down consumer never leaves an orphaned
//! ticker mutating state nobody observes.

use std::sync::Arc;

use rand::Rng;
use tokio::sync::{mpsc, watch, RwLock};
use tokio::time::MissedTickBehavior;
use tracing::info;

use store::DashboardStore;

use crate::{SimulationConfig, SimulationError, TickReport, Ticker};

/// Handle to a running simulation task
pub struct SimulationHandle {
    shutdown: watch::Sender<bool>,
    task: tokio::task::JoinHandle<u64>,
}

impl SimulationHandle {
    /// Stop the ticker and wait for the task to drain; returns the number of
    /// ticks completed.
    pub async fn shutdown(self) -> u64 {
        let _ = self.shutdown.send(true);
        self.task.await.unwrap_or(0)
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Start the simulation loop against a shared store
///
/// The runner is the sole writer apart from user-operation handlers; each
/// tick takes the write lock for one synchronous transition. Tick reports go
/// out over `events` best-effort; a full or closed channel never stalls the
/// loop.
pub fn spawn<R>(
    store: Arc<RwLock<DashboardStore>>,
    config: SimulationConfig,
    rng: R,
    events: mpsc::Sender<TickReport>,
) -> Result<SimulationHandle, SimulationError>
where
    R: Rng + Send + 'static,
{
    let mut ticker = Ticker::new(config.clone(), rng)?;
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(config.tick_interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(interval_ms = config.tick_interval_ms, "simulation started");

        let mut ticks = 0u64;
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let report = {
                        let mut store = store.write().await;
                        ticker.tick(&mut store)
                    };
                    ticks += 1;
                    let _ = events.try_send(report);
                }
                _ = shutdown_rx.changed() => break,
            }
        }

        info!(ticks, "simulation stopped");
        ticks
    });

    Ok(SimulationHandle {
        shutdown: shutdown_tx,
        task,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn fast_config() -> SimulationConfig {
        SimulationConfig {
            tick_interval_ms: 10,
            ..SimulationConfig::accelerated()
        }
    }

    #[tokio::test]
    async fn runner_ticks_and_shuts_down_cleanly() {
        let store = Arc::new(RwLock::new(DashboardStore::new()));
        let (events, mut reports) = mpsc::channel(32);

        let handle = spawn(
            store.clone(),
            fast_config(),
            StdRng::seed_from_u64(1),
            events,
        )
        .unwrap();

        let report = reports.recv().await.expect("at least one tick report");
        assert_eq!(report.timestamp.len(), "HH:MM:SS".len());

        let ticks = handle.shutdown().await;
        assert!(ticks >= 1);

        // No writer remains after shutdown
        let stamp = store.read().await.cameras[0].timestamp.clone();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(store.read().await.cameras[0].timestamp, stamp);
    }

    #[tokio::test]
    async fn invalid_config_is_rejected_before_spawning() {
        let store = Arc::new(RwLock::new(DashboardStore::new()));
        let (events, _reports) = mpsc::channel(1);
        let config = SimulationConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };

        let result = spawn(store, config, StdRng::seed_from_u64(0), events);
        assert!(matches!(result, Err(SimulationError::ZeroInterval)));
    }

    #[tokio::test]
    async fn full_event_channel_does_not_stall_the_loop() {
        let store = Arc::new(RwLock::new(DashboardStore::new()));
        let (events, reports) = mpsc::channel(1);
        // Receiver never drains
        std::mem::forget(reports);

        let handle = spawn(store, fast_config(), StdRng::seed_from_u64(2), events).unwrap();
        tokio::time::sleep(Duration::from_millis(80)).await;

        let ticks = handle.shutdown().await;
        assert!(ticks > 1);
    }
}
