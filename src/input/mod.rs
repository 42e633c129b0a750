//! Key-event primitives
//!
//! Physical vocabulary shared by the layouts and the device:
//! - keycodes (Linux input-event-codes numbering)
//! - modifier bit flags
//! - raw press/release/sync events

pub mod event;
pub mod keycodes;
pub mod modifier;

pub use event::InputEvent;
pub use keycodes::KeyCode;
pub use modifier::{Modifiers, RawModifier};
