//! Event router - filters channel events and dispatches the work they trigger.
//!
//! Each event goes through [`state::transition`] synchronously, in arrival
//! order. Song resolution then runs as a spawned task so new events keep
//! flowing while catalogs are queried.
//!
//! # Usage
//!
//! ```ignore
//! let router = Router::new(pipeline, config.channel.primary_device_id);
//! router.start();
//! router.run(events).await;
//! ```

mod pipeline;
mod state;

pub use pipeline::{Pipeline, ResolveError};
pub use state::{
    Dispatch, MusicAction, PlayState, PlaybackEvent, RejectReason, RouterState, Transition,
    transition,
};

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Owns the router state and the pipeline it feeds.
pub struct Router {
    state: RouterState,
    primary_device_id: i64,
    pipeline: Arc<Pipeline>,
}

impl Router {
    pub fn new(pipeline: Pipeline, primary_device_id: i64) -> Self {
        Self {
            state: RouterState::default(),
            primary_device_id,
            pipeline: Arc::new(pipeline),
        }
    }

    pub fn state(&self) -> RouterState {
        self.state
    }

    /// Show the initial (idle) screen.
    pub fn start(&self) {
        self.pipeline.sink().present_offline();
    }

    /// Apply one event. Returns the spawned pipeline task, if any.
    pub fn handle(&mut self, event: &PlaybackEvent) -> Option<JoinHandle<()>> {
        let (next, result) = transition(self.state, event, self.primary_device_id);
        self.state = next;

        let dispatch = match result {
            Transition::Rejected(RejectReason::MissingDevice) => {
                tracing::error!(
                    target: "router",
                    "No device assigned to message {:?}. Ignoring message",
                    event
                );
                return None;
            }
            Transition::Accepted(dispatch) => dispatch,
        };

        if dispatch.is_empty() {
            tracing::trace!(target: "router", "Nothing to do for {:?}", event);
        }

        let mut task = None;
        match dispatch.music {
            Some(MusicAction::Resolve {
                music_id,
                generation,
            }) => {
                tracing::info!(target: "router", "Music ID updating to {}", music_id);
                self.pipeline.mark_latest(generation);

                let pipeline = Arc::clone(&self.pipeline);
                task = Some(tokio::spawn(async move {
                    pipeline.run(music_id, generation).await;
                }));
            }
            Some(MusicAction::Offline { generation }) => {
                tracing::info!(target: "router", "Primary device reports no music");
                self.pipeline.mark_latest(generation);
                self.pipeline.sink().present_offline();
            }
            None => {}
        }

        if let Some((device_id, current_state)) = dispatch.device_state {
            tracing::debug!(
                target: "router",
                "Updating device {} state to {}",
                device_id,
                current_state
            );
            self.pipeline
                .sink()
                .present_device_state(device_id, current_state);
        }

        task
    }

    /// Consume events until the sender side closes.
    ///
    /// Pipelines still in flight are awaited before returning.
    pub async fn run(mut self, mut events: mpsc::Receiver<PlaybackEvent>) {
        let mut in_flight = Vec::new();

        while let Some(event) = events.recv().await {
            in_flight.retain(|task: &JoinHandle<()>| !task.is_finished());
            if let Some(task) = self.handle(&event) {
                in_flight.push(task);
            }
        }

        tracing::info!(
            target: "router",
            "Event stream closed, waiting for {} pipelines",
            in_flight.len()
        );
        for task in in_flight {
            if let Err(e) = task.await {
                tracing::error!(target: "router", "Pipeline task failed: {}", e);
            }
        }
    }
}
