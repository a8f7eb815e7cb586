//! Periodic telemetry refresh.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::cache::TelemetryCache;
use crate::channel::CommandChannel;
use crate::error::BridgeError;

/// Periodic telemetry refresh driver.
///
/// Every `period` one refresh is started without waiting for earlier ones
/// to finish, so slow replies may overlap; whichever completes last
/// provides the snapshot. The first refresh fires one period after
/// spawning. Stopping (or dropping) the poller also cancels refreshes
/// still in flight.
#[derive(Debug)]
pub struct Poller {
    handle: JoinHandle<()>,
    period: Duration,
}

impl Poller {
    /// Start polling on the current tokio runtime.
    ///
    /// A zero `period` is rejected with [`BridgeError::Config`].
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn spawn(
        cache: Arc<TelemetryCache>,
        channel: Arc<dyn CommandChannel>,
        period: Duration,
    ) -> Result<Self, BridgeError> {
        if period.is_zero() {
            return Err(BridgeError::Config(
                "telemetry refresh period must be non-zero".to_string(),
            ));
        }

        let handle = tokio::spawn(run(cache, channel, period));
        tracing::info!(period_ms = period.as_millis() as u64, "telemetry poller started");
        Ok(Self { handle, period })
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Cancel the periodic refresh.
    pub fn stop(&self) {
        if !self.handle.is_finished() {
            self.handle.abort();
            tracing::info!("telemetry poller stopped");
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn run(cache: Arc<TelemetryCache>, channel: Arc<dyn CommandChannel>, period: Duration) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut in_flight = JoinSet::new();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let cache = Arc::clone(&cache);
                let channel = Arc::clone(&channel);
                in_flight.spawn(async move {
                    if let Err(e) = cache.refresh(channel.as_ref()).await {
                        tracing::debug!(error = %e, "telemetry refresh abandoned");
                    }
                });
            }
            // Reap finished refreshes
            Some(_) = in_flight.join_next() => {}
        }
    }
}
