//! Command Channel abstraction
//!
//! The transport that talks to the vehicle is supplied by the embedder.
//! The bridge only needs two operations from it: a fire-and-forget send
//! of a command line and a request/response state query.

pub mod mock;

use async_trait::async_trait;

pub use mock::MockChannel;

use crate::error::ChannelError;

/// Transport to the vehicle.
///
/// Implementations must be `Send + Sync` so one channel can be shared
/// between the extension and the telemetry poller as
/// `Arc<dyn CommandChannel>`.
#[async_trait]
pub trait CommandChannel: Send + Sync {
    /// Queue a command line for the vehicle.
    ///
    /// Must not block on the network. An `Ok` only means the line was
    /// accepted by the transport; the vehicle's acknowledgement, if any,
    /// is not observed.
    fn send(&self, command_line: &str) -> Result<(), ChannelError>;

    /// Ask the vehicle for its current state record.
    ///
    /// Returns the serialized record as received. Any timeout policy
    /// belongs to the implementation.
    async fn query_state(&self) -> Result<String, ChannelError>;
}
