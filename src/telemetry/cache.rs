//! Current telemetry snapshot and refresh bookkeeping.

use std::sync::atomic::{AtomicU64, Ordering};

use tello_blocks_core::{TelemetryField, TelemetrySnapshot};
use tokio::sync::watch;

use super::parse::parse_state;
use crate::channel::CommandChannel;
use crate::error::BridgeError;

/// Counters describing how refreshes have gone so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshStats {
    /// Refreshes that installed a new snapshot.
    pub completed: u64,
    /// Refreshes abandoned on a transport or parse error.
    pub failed: u64,
}

/// Holder of the current telemetry snapshot.
///
/// The snapshot lives in a `watch` cell, so a refresh replaces it with a
/// single store and readers only ever see a whole record. Reads never
/// wait on I/O. A failed refresh leaves the previous snapshot in place.
pub struct TelemetryCache {
    current: watch::Sender<Option<TelemetrySnapshot>>,
    completed: AtomicU64,
    failed: AtomicU64,
}

impl TelemetryCache {
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        Self {
            current,
            completed: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    /// Value of `field` in the current snapshot.
    ///
    /// `None` before the first successful refresh, or when the last record
    /// did not carry the field.
    pub fn read(&self, field: TelemetryField) -> Option<f64> {
        self.current
            .borrow()
            .as_ref()
            .and_then(|snapshot| snapshot.get(field))
    }

    /// Copy of the current snapshot.
    pub fn snapshot(&self) -> Option<TelemetrySnapshot> {
        *self.current.borrow()
    }

    pub fn has_snapshot(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Receiver notified on every installed snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Option<TelemetrySnapshot>> {
        self.current.subscribe()
    }

    /// Replace the current snapshot.
    pub fn install(&self, snapshot: TelemetrySnapshot) {
        if self.current.send_replace(Some(snapshot)).is_none() {
            tracing::info!("first telemetry snapshot received");
        }
    }

    /// Query the vehicle once and install the parsed record.
    ///
    /// On error the current snapshot is left untouched and the error is
    /// returned to the caller (the poller only logs it).
    pub async fn refresh(&self, channel: &dyn CommandChannel) -> Result<(), BridgeError> {
        match fetch(channel).await {
            Ok(snapshot) => {
                self.install(snapshot);
                self.completed.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
            Err(e) => {
                self.failed.fetch_add(1, Ordering::Relaxed);
                Err(e)
            }
        }
    }

    pub fn stats(&self) -> RefreshStats {
        RefreshStats {
            completed: self.completed.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TelemetryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryCache")
            .field("snapshot", &self.snapshot())
            .field("stats", &self.stats())
            .finish()
    }
}

async fn fetch(channel: &dyn CommandChannel) -> Result<TelemetrySnapshot, BridgeError> {
    let payload = channel.query_state().await?;
    parse_state(&payload)
}
