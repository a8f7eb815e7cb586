//! Block extension facade
//!
//! [`TelloExtension`] is what the host registers: it owns the command
//! channel handle, the telemetry cache and the poller feeding it, and
//! exposes one entry point per block opcode through [`dispatch`].
//!
//! [`dispatch`]: TelloExtension::dispatch

pub mod args;
pub mod metadata;

use std::sync::Arc;

use tello_blocks_core::{encode, validate, Action, Argument, Locale, TelemetryField};

use crate::channel::CommandChannel;
use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::telemetry::{Poller, RefreshStats, TelemetryCache};

pub use args::BlockArgs;
pub use metadata::{build_info, ExtensionInfo};

/// Lifecycle of the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    /// Polling, but no state record has been received yet.
    Uninitialized,
    /// At least one refresh succeeded.
    Running,
}

/// Result of invoking a block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlockOutput {
    /// A command block was handled.
    Done,
    /// A reporter block's value; `None` when the field is absent.
    Value(Option<f64>),
}

/// The Tello block extension.
///
/// Construction starts the telemetry poller on the current tokio runtime;
/// dropping the extension stops it.
pub struct TelloExtension {
    channel: Arc<dyn CommandChannel>,
    cache: Arc<TelemetryCache>,
    poller: Poller,
    config: BridgeConfig,
}

impl TelloExtension {
    /// Create the extension and start polling.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn new(channel: Arc<dyn CommandChannel>, config: BridgeConfig) -> Result<Self, BridgeError> {
        config.validate()?;

        let cache = Arc::new(TelemetryCache::new());
        let poller = Poller::spawn(
            Arc::clone(&cache),
            Arc::clone(&channel),
            config.refresh_period(),
        )?;

        Ok(Self {
            channel,
            cache,
            poller,
            config,
        })
    }

    pub fn state(&self) -> BridgeState {
        if self.cache.has_snapshot() {
            BridgeState::Running
        } else {
            BridgeState::Uninitialized
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Display locale. A supported configured locale takes precedence
    /// over the host's; an unsupported one is ignored.
    pub fn resolve_locale(&self, host_locale: &str) -> Locale {
        self.config
            .locale
            .as_deref()
            .and_then(Locale::from_tag)
            .unwrap_or_else(|| Locale::resolve(host_locale))
    }

    /// Block descriptor for the host's locale.
    pub fn get_info(&self, host_locale: &str) -> ExtensionInfo {
        build_info(self.resolve_locale(host_locale), &self.config)
    }

    /// Encode and send one command.
    ///
    /// Send failures are logged and swallowed; the block still completes.
    /// Only argument validation, when enabled, can fail.
    pub fn command(&self, action: Action, argument: &Argument<'_>) -> Result<(), BridgeError> {
        if self.config.validate_arguments {
            validate(action, argument).map_err(|reason| BridgeError::InvalidArgument {
                opcode: action.opcode(),
                reason,
            })?;
        }

        let line = encode(action, argument);
        tracing::debug!(command = %line, "sending command");

        if let Err(e) = self.channel.send(&line) {
            tracing::warn!(command = %line, error = %e, "command send failed");
        }
        Ok(())
    }

    /// Latest cached value of `field`. Never waits on the vehicle.
    pub fn report(&self, field: TelemetryField) -> Option<f64> {
        self.cache.read(field)
    }

    /// Invoke the block named `opcode` with host arguments.
    pub fn dispatch(&self, opcode: &str, args: &BlockArgs) -> Result<BlockOutput, BridgeError> {
        if let Some(action) = Action::from_opcode(opcode) {
            let argument = args::argument_for(action.spec().parameter, args);
            self.command(action, &argument)?;
            return Ok(BlockOutput::Done);
        }

        if let Some(field) = TelemetryField::from_opcode(opcode) {
            return Ok(BlockOutput::Value(self.report(field)));
        }

        Err(BridgeError::UnknownOpcode(opcode.to_string()))
    }

    pub fn cache(&self) -> &TelemetryCache {
        &self.cache
    }

    pub fn refresh_stats(&self) -> RefreshStats {
        self.cache.stats()
    }

    pub fn is_polling(&self) -> bool {
        self.poller.is_running()
    }

    /// Stop the telemetry poller. Cached values stay readable.
    pub fn stop(&self) {
        self.poller.stop();
    }
}

impl std::fmt::Debug for TelloExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelloExtension")
            .field("state", &self.state())
            .field("poller", &self.poller)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::MockChannel;
    use serde_json::json;
    use tello_blocks_core::{FlipDirection, TelemetrySnapshot};

    fn extension(config: BridgeConfig) -> (Arc<MockChannel>, TelloExtension) {
        let channel = Arc::new(MockChannel::new());
        let ext = TelloExtension::new(channel.clone(), config).unwrap();
        (channel, ext)
    }

    fn args(value: serde_json::Value) -> BlockArgs {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_command_sends_encoded_line() {
        let (channel, ext) = extension(BridgeConfig::default());

        ext.command(Action::Takeoff, &Argument::None).unwrap();
        ext.command(Action::Up, &Argument::Number(50.0)).unwrap();
        ext.command(Action::Flip, &Argument::Direction(FlipDirection::Left))
            .unwrap();

        assert_eq!(channel.sent(), vec!["takeoff", "up 50", "flip l"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_range_forwarded_by_default() {
        let (channel, ext) = extension(BridgeConfig::default());

        ext.command(Action::Forward, &Argument::Number(1000.0)).unwrap();
        assert_eq!(channel.sent(), vec!["forward 1000"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_validation_rejects_when_enabled() {
        let (channel, ext) = extension(BridgeConfig {
            validate_arguments: true,
            ..Default::default()
        });

        let err = ext
            .command(Action::Forward, &Argument::Number(1000.0))
            .unwrap_err();
        assert!(matches!(
            err,
            BridgeError::InvalidArgument {
                opcode: "forward",
                ..
            }
        ));
        assert!(channel.sent().is_empty());

        ext.command(Action::Forward, &Argument::Number(100.0)).unwrap();
        assert_eq!(channel.sent(), vec!["forward 100"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_failure_is_swallowed() {
        let (channel, ext) = extension(BridgeConfig::default());
        channel.set_reject_sends(true);

        assert!(ext.command(Action::Land, &Argument::None).is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispatch_routes_by_opcode() {
        let (channel, ext) = extension(BridgeConfig::default());
        ext.cache().install(Default::default());

        assert_eq!(
            ext.dispatch("cw", &args(json!({"X": "45"}))).unwrap(),
            BlockOutput::Done
        );
        assert_eq!(
            ext.dispatch("flip", &args(json!({"DIRECTION": "b"}))).unwrap(),
            BlockOutput::Done
        );
        assert_eq!(
            ext.dispatch("bat", &BlockArgs::new()).unwrap(),
            BlockOutput::Value(None)
        );
        assert!(matches!(
            ext.dispatch("hover", &BlockArgs::new()),
            Err(BridgeError::UnknownOpcode(op)) if op == "hover"
        ));

        assert_eq!(channel.sent(), vec!["cw 45", "flip b"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_state_follows_first_snapshot() {
        let (_channel, ext) = extension(BridgeConfig::default());
        assert_eq!(ext.state(), BridgeState::Uninitialized);

        ext.cache().install(TelemetrySnapshot::default());
        assert_eq!(ext.state(), BridgeState::Running);
    }

    #[tokio::test(start_paused = true)]
    async fn test_configured_locale_wins() {
        let (_channel, ext) = extension(BridgeConfig::default());
        assert_eq!(ext.resolve_locale("ja"), Locale::Ja);
        assert_eq!(ext.resolve_locale("fr"), Locale::En);

        let (_channel, ext) = extension(BridgeConfig {
            locale: Some("zh-cn".to_string()),
            ..Default::default()
        });
        assert_eq!(ext.resolve_locale("ja"), Locale::ZhCn);
        assert_eq!(ext.get_info("ja").block("takeoff").unwrap().text, "起飞");
    }

    #[tokio::test(start_paused = true)]
    async fn test_unsupported_configured_locale_defers_to_host() {
        let (_channel, ext) = extension(BridgeConfig {
            locale: Some("fr".to_string()),
            ..Default::default()
        });
        assert_eq!(ext.resolve_locale("ja"), Locale::Ja);
        assert_eq!(ext.resolve_locale("ja-Hira"), Locale::JaHira);
        assert_eq!(ext.resolve_locale("de"), Locale::En);
        assert_eq!(ext.get_info("ja").block("land").unwrap().text, "着陸する");
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_period_rejected() {
        let channel = Arc::new(MockChannel::new());
        let err = TelloExtension::new(
            channel,
            BridgeConfig {
                refresh_period_ms: 0,
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, BridgeError::Config(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_keeps_cached_values() {
        let (_channel, ext) = extension(BridgeConfig::default());
        ext.cache()
            .install(TelemetrySnapshot::default().with(TelemetryField::Bat, 80.0));
        ext.stop();
        tokio::task::yield_now().await;

        assert_eq!(ext.report(TelemetryField::Bat), Some(80.0));
    }
}
