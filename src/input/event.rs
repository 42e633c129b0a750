//! Raw input events
//!
//! `struct input_event` as written to /dev/uinput.

use std::time::{SystemTime, UNIX_EPOCH};

use super::keycodes::KeyCode;

/// Synchronization event type
pub const EV_SYN: u16 = 0x00;
/// Key/button event type
pub const EV_KEY: u16 = 0x01;

/// Marks the end of an event batch
pub const SYN_REPORT: u16 = 0;

/// Key value: released
pub const KEY_RELEASE: i32 = 0;
/// Key value: pressed
pub const KEY_PRESS: i32 = 1;

/// One input event (type, code, value) with its timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    /// Seconds since epoch
    pub sec: i64,
    /// Microseconds within the second
    pub usec: i64,
    pub kind: u16,
    pub code: u16,
    pub value: i32,
}

impl InputEvent {
    /// Create an event stamped with the current time
    pub fn new(kind: u16, code: u16, value: i32) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self {
            sec: now.as_secs() as i64,
            usec: now.subsec_micros() as i64,
            kind,
            code,
            value,
        }
    }

    /// Key press or release
    pub fn key(code: KeyCode, pressed: bool) -> Self {
        Self::new(EV_KEY, code, if pressed { KEY_PRESS } else { KEY_RELEASE })
    }

    /// SYN_REPORT
    pub fn sync() -> Self {
        Self::new(EV_SYN, SYN_REPORT, 0)
    }

    pub fn is_sync(&self) -> bool {
        self.kind == EV_SYN && self.code == SYN_REPORT
    }

    pub fn is_press(&self) -> bool {
        self.kind == EV_KEY && self.value == KEY_PRESS
    }

    pub fn is_release(&self) -> bool {
        self.kind == EV_KEY && self.value == KEY_RELEASE
    }

    /// Serialize to the kernel's native `struct input_event` layout
    ///
    /// The timeval fields follow the platform's `time_t`/`suseconds_t` width,
    /// so the buffer is 24 bytes on 64-bit targets and 16 bytes on 32-bit ones.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(std::mem::size_of::<libc::input_event>());
        buf.extend_from_slice(&(self.sec as libc::time_t).to_ne_bytes());
        buf.extend_from_slice(&(self.usec as libc::suseconds_t).to_ne_bytes());
        buf.extend_from_slice(&self.kind.to_ne_bytes());
        buf.extend_from_slice(&self.code.to_ne_bytes());
        buf.extend_from_slice(&self.value.to_ne_bytes());
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_event_values() {
        let press = InputEvent::key(30, true);
        assert_eq!(press.kind, EV_KEY);
        assert_eq!(press.code, 30);
        assert!(press.is_press());

        let release = InputEvent::key(30, false);
        assert!(release.is_release());
        assert!(!release.is_sync());

        assert!(InputEvent::sync().is_sync());
    }

    #[test]
    fn test_wire_size_matches_kernel_struct() {
        let bytes = InputEvent::key(30, true).to_bytes();
        assert_eq!(bytes.len(), std::mem::size_of::<libc::input_event>());
    }

    #[test]
    fn test_wire_tail_layout() {
        let bytes = InputEvent::key(0x1e, true).to_bytes();
        let n = bytes.len();
        assert_eq!(&bytes[n - 8..n - 6], &EV_KEY.to_ne_bytes());
        assert_eq!(&bytes[n - 6..n - 4], &0x1eu16.to_ne_bytes());
        assert_eq!(&bytes[n - 4..], &KEY_PRESS.to_ne_bytes());
    }
}
