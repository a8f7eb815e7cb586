//! tello_blocks - Tello quadcopter bridge for block-based programming hosts
//!
//! Exposes the vehicle as a set of blocks: command blocks that encode and
//! send one protocol line each, and reporter blocks that read from a
//! telemetry cache refreshed in the background.
//!
//! The pure pieces (locales, message table, command encoding, telemetry
//! field model) live in `tello_blocks_core`; this crate adds the async
//! runtime side:
//!
//! - [`channel`]: transport abstraction supplied by the embedder
//! - [`telemetry`]: state parsing, snapshot cache and poller
//! - [`extension`]: the host-facing facade and block metadata
//! - [`config`], [`error`]: configuration and error types

pub mod channel;
pub mod config;
pub mod error;
pub mod extension;
pub mod telemetry;

pub use channel::{CommandChannel, MockChannel};
pub use config::BridgeConfig;
pub use error::{BridgeError, ChannelError};
pub use extension::{BlockArgs, BlockOutput, BridgeState, ExtensionInfo, TelloExtension};
pub use telemetry::{parse_state, Poller, RefreshStats, TelemetryCache};

pub use tello_blocks_core::{
    encode, validate, Action, Argument, FlipDirection, Locale, TelemetryField, TelemetrySnapshot,
    ValidationError,
};
