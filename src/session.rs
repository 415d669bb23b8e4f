//! Display session - connects a channel to the router.
//!
//! On startup the idle screen is shown and every device is asked to report
//! in (`{"ping_all": 1}`). Inbound messages are decoded into
//! [`PlaybackEvent`]s and handed to the router in arrival order. The session
//! ends when the channel disconnects.

use serde_json::{Value, json};
use tokio::sync::mpsc;

use crate::channel::{Channel, ChannelSignal};
use crate::error::{Result, ResultExt};
use crate::router::{PlaybackEvent, Router};

/// Capacity of the channel -> router queue
const EVENT_BUFFER: usize = 64;

/// Decode one channel payload.
pub fn parse_event(payload: Value) -> serde_json::Result<PlaybackEvent> {
    serde_json::from_value(payload)
}

/// Run until the channel disconnects and all started pipelines finish.
pub async fn run<C: Channel>(channel: &mut C, router: Router) -> Result<()> {
    router.start();
    channel
        .publish(&json!({ "ping_all": 1 }))
        .await
        .with_context(format!("pinging devices on {}", channel.name()))?;

    let (tx, rx) = mpsc::channel(EVENT_BUFFER);

    let reader = async move {
        while let Some(signal) = channel.next_signal().await {
            match signal {
                ChannelSignal::Connected => {
                    tracing::info!(target: "channel", "Connected to {}", channel.name());
                }
                ChannelSignal::Disconnected => {
                    tracing::warn!(target: "channel", "Disconnected from {}", channel.name());
                    break;
                }
                ChannelSignal::Message(payload) => match parse_event(payload) {
                    Ok(event) => {
                        if tx.send(event).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(target: "channel", "Ignoring invalid event: {}", e);
                    }
                },
            }
        }
        // Dropping `tx` here lets the router drain and return.
    };

    tokio::join!(reader, router.run(rx));
    Ok(())
}
