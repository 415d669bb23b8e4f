//! Terminal presentation sink.

use parking_lot::Mutex;

use super::{DeviceState, PresentationSink, Screen};
use crate::catalog::MergedMetadata;
use crate::lookup::VibeRecord;

/// Keeps a [`Screen`] and prints it to stdout after every change.
#[derive(Default)]
pub struct ConsoleSink {
    screen: Mutex<Screen>,
    /// Print the scrolling banner under the panel
    show_banner: bool,
}

impl ConsoleSink {
    pub fn new(show_banner: bool) -> Self {
        Self {
            screen: Mutex::new(Screen::default()),
            show_banner,
        }
    }

    /// Copy of what's currently on screen
    pub fn snapshot(&self) -> Screen {
        self.screen.lock().clone()
    }

    fn update(&self, change: impl FnOnce(&mut Screen)) {
        let mut screen = self.screen.lock();
        change(&mut screen);

        println!("----------------------------------------");
        print!("{}", screen.render());
        if self.show_banner {
            println!("{}", screen.banner());
        }
    }
}

impl PresentationSink for ConsoleSink {
    fn present_metadata(&self, metadata: &MergedMetadata) {
        self.update(|screen| screen.show_metadata(metadata));
    }

    fn present_offline(&self) {
        self.update(Screen::show_offline);
    }

    fn present_error(&self) {
        self.update(Screen::show_error);
    }

    fn present_vibe(&self, vibe: &VibeRecord) {
        self.update(|screen| screen.show_vibe(vibe));
    }

    fn present_device_state(&self, device_id: i64, state: i64) {
        tracing::info!(target: "router", "Device: {} | State: {}", device_id, state);
        self.update(|screen| screen.show_device_state(device_id, DeviceState::from(state)));
    }
}
