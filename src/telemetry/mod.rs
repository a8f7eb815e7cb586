//! Telemetry cache and polling
//!
//! - [`parse`]: state record parsing (JSON object or native state line)
//! - [`cache`]: the single current snapshot with non-blocking reads
//! - [`poller`]: periodic refresh driver

pub mod cache;
pub mod parse;
pub mod poller;

pub use cache::{RefreshStats, TelemetryCache};
pub use parse::parse_state;
pub use poller::Poller;
