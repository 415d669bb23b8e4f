//! Line-delimited JSON channel.
//!
//! Inbound lines may be a bare payload (`{"device_id": 1, "music_id": 21}`)
//! or an envelope naming the topic (`{"channel": "...", "data": {...}}`).
//! Envelopes for other topics are skipped. Outbound messages are always
//! written as envelopes.

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines};

use super::{Channel, ChannelError, ChannelSignal};

pub struct JsonLinesChannel<R, W> {
    name: String,
    lines: Lines<R>,
    writer: W,
    connected: bool,
    closed: bool,
}

impl<R, W> JsonLinesChannel<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(name: impl Into<String>, reader: R, writer: W) -> Self {
        Self {
            name: name.into(),
            lines: reader.lines(),
            writer,
            connected: false,
            closed: false,
        }
    }

    /// Extract our payload from one line, or `None` to skip it.
    fn payload(&self, line: &str) -> Option<Value> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(target: "channel", "Skipping unparseable line: {}", e);
                return None;
            }
        };

        match (value.get("channel"), value.get("data")) {
            (Some(channel), Some(data)) => {
                if channel.as_str() == Some(self.name.as_str()) {
                    Some(data.clone())
                } else {
                    tracing::debug!(target: "channel", "Skipping message for {}", channel);
                    None
                }
            }
            _ => Some(value),
        }
    }
}

impl JsonLinesChannel<BufReader<tokio::io::Stdin>, tokio::io::Stderr> {
    /// Reads stdin, publishes on stderr. Stdout belongs to the display.
    pub fn terminal(name: impl Into<String>) -> Self {
        Self::new(name, BufReader::new(tokio::io::stdin()), tokio::io::stderr())
    }
}

impl JsonLinesChannel<BufReader<tokio::fs::File>, tokio::io::Stderr> {
    /// Replay a recorded session from a file, publishing on stderr.
    pub async fn replay(name: impl Into<String>, path: &std::path::Path) -> std::io::Result<Self> {
        let file = tokio::fs::File::open(path).await?;
        Ok(Self::new(name, BufReader::new(file), tokio::io::stderr()))
    }
}

#[async_trait]
impl<R, W> Channel for JsonLinesChannel<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn publish(&mut self, payload: &Value) -> Result<(), ChannelError> {
        let envelope = json!({ "channel": self.name, "data": payload });
        let mut line = serde_json::to_vec(&envelope)?;
        line.push(b'\n');

        self.writer.write_all(&line).await?;
        self.writer.flush().await?;
        Ok(())
    }

    async fn next_signal(&mut self) -> Option<ChannelSignal> {
        if !self.connected {
            self.connected = true;
            return Some(ChannelSignal::Connected);
        }
        if self.closed {
            return None;
        }

        loop {
            match self.lines.next_line().await {
                Ok(Some(line)) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if let Some(payload) = self.payload(line) {
                        return Some(ChannelSignal::Message(payload));
                    }
                }
                Ok(None) => {
                    self.closed = true;
                    return Some(ChannelSignal::Disconnected);
                }
                Err(e) => {
                    tracing::warn!(target: "channel", "Channel read failed: {}", e);
                    self.closed = true;
                    return Some(ChannelSignal::Disconnected);
                }
            }
        }
    }
}
