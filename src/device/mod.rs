//! Key-event sink
//!
//! Everything the dispatcher writes goes through `EventSink`:
//! - `UinputDevice`: the real virtual keyboard
//! - test doubles recording events in memory

mod ioctl;
pub mod uinput;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::input::{InputEvent, KeyCode};

pub use uinput::UinputDevice;

/// Event sink failures
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("device write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("short write to device: {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },

    #[error("device closed")]
    Closed,
}

/// Destination for raw key events
///
/// Only `write_event` is required; the key helpers emit the standard
/// press/sync/release/sync shapes on top of it.
pub trait EventSink {
    fn write_event(&mut self, event: &InputEvent) -> Result<(), SinkError>;

    /// Press and release one key (4 events)
    fn send_key(&mut self, code: KeyCode) -> Result<(), SinkError> {
        self.write_event(&InputEvent::key(code, true))?;
        self.write_event(&InputEvent::sync())?;
        self.write_event(&InputEvent::key(code, false))?;
        self.write_event(&InputEvent::sync())
    }

    /// Hold `modifier` around one key press (8 events)
    fn send_key_with_modifier(&mut self, modifier: KeyCode, code: KeyCode) -> Result<(), SinkError> {
        self.write_event(&InputEvent::key(modifier, true))?;
        self.write_event(&InputEvent::sync())?;
        self.send_key(code)?;
        self.write_event(&InputEvent::key(modifier, false))?;
        self.write_event(&InputEvent::sync())
    }
}

/// Sink shared by concurrent requests; lock once per character sequence
pub type SharedSink = Arc<Mutex<dyn EventSink + Send>>;

/// Wrap a sink for sharing between requests
pub fn shared<S: EventSink + Send + 'static>(sink: S) -> SharedSink {
    Arc::new(Mutex::new(sink))
}
