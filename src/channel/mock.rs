//! Scripted channel for tests and host-side demos.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::CommandChannel;
use crate::error::ChannelError;

/// One scripted reply to [`CommandChannel::query_state`].
#[derive(Debug, Clone)]
enum Reply {
    State { payload: String, delay: Duration },
    Failure { message: String, delay: Duration },
}

/// In-memory [`CommandChannel`] with scripted state replies.
///
/// Sent command lines are recorded in order. Each `query_state` call
/// consumes the next queued reply after sleeping for its delay; once the
/// queue is empty every query times out.
#[derive(Debug, Default)]
pub struct MockChannel {
    sent: Mutex<Vec<String>>,
    replies: Mutex<VecDeque<Reply>>,
    queries: Mutex<u64>,
    reject_sends: Mutex<bool>,
}

impl MockChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a state payload returned immediately.
    pub fn push_state(&self, payload: impl Into<String>) {
        self.push_state_after(payload, Duration::ZERO);
    }

    /// Queue a state payload returned after `delay`.
    pub fn push_state_after(&self, payload: impl Into<String>, delay: Duration) {
        self.replies.lock().unwrap().push_back(Reply::State {
            payload: payload.into(),
            delay,
        });
    }

    /// Queue a transport failure returned immediately.
    pub fn push_failure(&self, message: impl Into<String>) {
        self.push_failure_after(message, Duration::ZERO);
    }

    /// Queue a transport failure returned after `delay`.
    pub fn push_failure_after(&self, message: impl Into<String>, delay: Duration) {
        self.replies.lock().unwrap().push_back(Reply::Failure {
            message: message.into(),
            delay,
        });
    }

    /// Make subsequent sends fail with [`ChannelError::NotConnected`].
    pub fn set_reject_sends(&self, reject: bool) {
        *self.reject_sends.lock().unwrap() = reject;
    }

    /// Command lines sent so far, oldest first.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of state queries received so far.
    pub fn query_count(&self) -> u64 {
        *self.queries.lock().unwrap()
    }

    /// Number of scripted replies not consumed yet.
    pub fn pending_replies(&self) -> usize {
        self.replies.lock().unwrap().len()
    }
}

#[async_trait]
impl CommandChannel for MockChannel {
    fn send(&self, command_line: &str) -> Result<(), ChannelError> {
        if *self.reject_sends.lock().unwrap() {
            return Err(ChannelError::NotConnected);
        }
        self.sent.lock().unwrap().push(command_line.to_string());
        Ok(())
    }

    async fn query_state(&self) -> Result<String, ChannelError> {
        *self.queries.lock().unwrap() += 1;
        let reply = self.replies.lock().unwrap().pop_front();

        match reply {
            Some(Reply::State { payload, delay }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(payload)
            }
            Some(Reply::Failure { message, delay }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Err(ChannelError::Transport(message))
            }
            None => Err(ChannelError::Timeout("state response")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_sent_lines_in_order() {
        let channel = MockChannel::new();
        channel.send("takeoff").unwrap();
        channel.send("up 50").unwrap();
        assert_eq!(channel.sent(), vec!["takeoff", "up 50"]);
    }

    #[test]
    fn test_rejected_sends_are_not_recorded() {
        let channel = MockChannel::new();
        channel.set_reject_sends(true);
        assert!(matches!(channel.send("land"), Err(ChannelError::NotConnected)));
        assert!(channel.sent().is_empty());
    }

    #[tokio::test]
    async fn test_replies_are_served_in_order() {
        let channel = MockChannel::new();
        channel.push_state("{\"bat\": 80}");
        channel.push_failure("link down");

        assert_eq!(channel.query_state().await.unwrap(), "{\"bat\": 80}");
        match channel.query_state().await {
            Err(ChannelError::Transport(msg)) => assert_eq!(msg, "link down"),
            other => panic!("Expected Transport error, got: {other:?}"),
        }
        assert!(matches!(
            channel.query_state().await,
            Err(ChannelError::Timeout(_))
        ));
        assert_eq!(channel.query_count(), 3);
        assert_eq!(channel.pending_replies(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delayed_reply() {
        let channel = MockChannel::new();
        channel.push_state_after("{}", Duration::from_millis(300));

        let start = tokio::time::Instant::now();
        channel.query_state().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(300));
    }
}
