//! In-memory sinks for tests

use std::sync::{Arc, Mutex};

use super::{EventSink, SinkError};
use crate::input::{InputEvent, KeyCode};

pub type EventLog = Arc<Mutex<Vec<InputEvent>>>;

/// Records every event; optionally fails once `fail_after` events are stored
pub struct RecordingSink {
    log: EventLog,
    fail_after: Option<usize>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
            fail_after: None,
        }
    }

    pub fn failing_after(count: usize) -> Self {
        Self {
            fail_after: Some(count),
            ..Self::new()
        }
    }

    /// Log shared with the sink, readable after the sink moves into a `SharedSink`
    pub fn handle(&self) -> EventLog {
        Arc::clone(&self.log)
    }

    pub fn events(&self) -> Vec<InputEvent> {
        self.log.lock().unwrap().clone()
    }

    pub fn transitions(&self) -> Vec<(KeyCode, bool)> {
        transitions(&self.events())
    }
}

impl EventSink for RecordingSink {
    fn write_event(&mut self, event: &InputEvent) -> Result<(), SinkError> {
        let mut log = self.log.lock().unwrap();
        if self.fail_after.is_some_and(|limit| log.len() >= limit) {
            return Err(SinkError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "recording sink failure",
            )));
        }
        log.push(*event);
        Ok(())
    }
}

/// Key transitions (code, pressed) with syncs dropped
pub fn transitions(events: &[InputEvent]) -> Vec<(KeyCode, bool)> {
    events
        .iter()
        .filter(|e| !e.is_sync())
        .map(|e| (e.code, e.is_press()))
        .collect()
}
