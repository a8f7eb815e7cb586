//! tello_blocks_core - Pure logic for the Tello block bridge
//!
//! This crate contains the platform-agnostic part of the bridge: the
//! locale set and its message table, the command encoder and the
//! telemetry field set. Nothing here performs I/O or awaits anything,
//! so every item can be tested on host without a runtime.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives
//! - **no_std + alloc**: Command lines are the only heap allocation
//! - **Static tables**: Command specs and messages are process-wide constants
//!
//! # Modules
//!
//! - [`locale`]: Supported display locales and per-locale text
//! - [`messages`]: Localized text for every command, flip label and telemetry field
//! - [`command`]: Actions, command specs, encoder and optional argument validation
//! - [`telemetry`]: Telemetry fields and the snapshot value type

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod command;
pub mod locale;
pub mod messages;
pub mod telemetry;

pub use command::{
    encode, validate, Action, Argument, CommandSpec, DefaultValue, FlipDirection, ParameterKind,
    ValidationError, COMMAND_SPECS,
};
pub use locale::{Locale, LocalizedText};
pub use telemetry::{TelemetryField, TelemetrySnapshot};
