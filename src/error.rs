use tello_blocks_core::ValidationError;

/// Errors reported by a [`CommandChannel`](crate::channel::CommandChannel).
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("Channel not connected")]
    NotConnected,

    #[error("Timeout waiting for {0}")]
    Timeout(&'static str),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur at the bridge surface.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error(transparent)]
    Channel(#[from] ChannelError),

    #[error("Malformed telemetry record: {0}")]
    Parse(String),

    #[error("Unknown opcode: {0}")]
    UnknownOpcode(String),

    #[error("Invalid argument for {opcode}: {reason}")]
    InvalidArgument {
        opcode: &'static str,
        reason: ValidationError,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}
