//! Modifier sets
//!
//! Layout tables only ever produce SHIFT, ALTGR or both.
//! CTRL and ALT exist for the raw key command path.

use bitflags::bitflags;

use super::keycodes::{KeyCode, KEY_LEFTALT, KEY_LEFTCTRL, KEY_LEFTSHIFT, KEY_RIGHTALT};

bitflags! {
    /// Modifier bit flags attached to a key mapping
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const ALTGR = 1 << 1;
        const CTRL = 1 << 2;
        const ALT = 1 << 3;
    }
}

impl Modifiers {
    /// No modifier held
    pub const NONE: Self = Self::empty();
    /// Shift + AltGr (third level, shifted)
    pub const SHIFT_ALTGR: Self = Self::SHIFT.union(Self::ALTGR);

    /// Physical keys to hold, outermost first (press in order, release reversed)
    pub fn held_keys(self) -> Vec<KeyCode> {
        [
            (Self::SHIFT, KEY_LEFTSHIFT),
            (Self::ALTGR, KEY_RIGHTALT),
            (Self::CTRL, KEY_LEFTCTRL),
            (Self::ALT, KEY_LEFTALT),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, key)| key)
        .collect()
    }
}

/// Modifier accepted by the raw key command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawModifier {
    None,
    Shift,
    Ctrl,
    Alt,
    AltGr,
}

impl RawModifier {
    /// Parse a request modifier name ("", "shift", "ctrl", "alt", "altgr")
    ///
    /// Returns None for any other name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "" => Some(Self::None),
            "shift" => Some(Self::Shift),
            "ctrl" => Some(Self::Ctrl),
            "alt" => Some(Self::Alt),
            "altgr" => Some(Self::AltGr),
            _ => None,
        }
    }

    /// Physical key held for this modifier
    pub fn keycode(self) -> Option<KeyCode> {
        match self {
            Self::None => None,
            Self::Shift => Some(KEY_LEFTSHIFT),
            Self::Ctrl => Some(KEY_LEFTCTRL),
            Self::Alt => Some(KEY_LEFTALT),
            Self::AltGr => Some(KEY_RIGHTALT),
        }
    }
}
