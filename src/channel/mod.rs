//! Pub/sub channel shared by the devices and the display.
//!
//! The display only needs three things from a transport: connection
//! signals, inbound JSON payloads for its topic, and a way to publish one.
//! [`JsonLinesChannel`] provides them over any async byte stream, one JSON
//! document per line.

mod json_lines;

pub use json_lines::JsonLinesChannel;

use async_trait::async_trait;

/// Something that happened on the channel
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelSignal {
    Connected,
    Disconnected,
    /// Payload of a message on our topic
    Message(serde_json::Value),
}

/// Channel errors
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("Channel I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A subscribed topic on the pub/sub channel.
#[async_trait]
pub trait Channel: Send {
    /// Topic name
    fn name(&self) -> &str;

    /// Publish a payload on the topic.
    async fn publish(&mut self, payload: &serde_json::Value) -> Result<(), ChannelError>;

    /// Wait for the next signal. `None` once the channel is finished.
    async fn next_signal(&mut self) -> Option<ChannelSignal>;
}
