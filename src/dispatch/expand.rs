//! Modifier expansion
//!
//! Turn a key mapping into press/release/sync events:
//! - no modifier: key press, sync, release, sync
//! - one modifier: held around the key (8 events)
//! - several: pressed outer to inner, released inner to outer

use crate::device::{EventSink, SinkError};
use crate::input::InputEvent;
use crate::layouts::{KeyMapping, KeySequence};

/// Emit every mapping of a character's sequence, dead key first
pub fn emit_sequence<S>(sink: &mut S, sequence: &KeySequence) -> Result<(), SinkError>
where
    S: EventSink + ?Sized,
{
    for mapping in sequence {
        emit_mapping(sink, *mapping)?;
    }
    Ok(())
}

pub fn emit_mapping<S>(sink: &mut S, mapping: KeyMapping) -> Result<(), SinkError>
where
    S: EventSink + ?Sized,
{
    let held = mapping.modifiers.held_keys();
    match held.as_slice() {
        [] => sink.send_key(mapping.keycode),
        [modifier] => sink.send_key_with_modifier(*modifier, mapping.keycode),
        nested => {
            for &modifier in nested {
                press(sink, modifier, true)?;
            }
            press(sink, mapping.keycode, true)?;
            press(sink, mapping.keycode, false)?;
            for &modifier in nested.iter().rev() {
                press(sink, modifier, false)?;
            }
            Ok(())
        }
    }
}

fn press<S>(sink: &mut S, code: u16, pressed: bool) -> Result<(), SinkError>
where
    S: EventSink + ?Sized,
{
    sink.write_event(&InputEvent::key(code, pressed))?;
    sink.write_event(&InputEvent::sync())
}
