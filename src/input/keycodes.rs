//! evdev keycode constants
//!
//! Physical key vocabulary used by the layout tables and the uinput device.
//! These are Linux input event codes from <linux/input-event-codes.h>.

/// Physical key identifier (Linux input-subsystem numbering)
pub type KeyCode = u16;

// ============================================================================
// Main Block
// ============================================================================

pub const KEY_RESERVED: KeyCode = 0;
pub const KEY_ESC: KeyCode = 1;
pub const KEY_1: KeyCode = 2;
pub const KEY_2: KeyCode = 3;
pub const KEY_3: KeyCode = 4;
pub const KEY_4: KeyCode = 5;
pub const KEY_5: KeyCode = 6;
pub const KEY_6: KeyCode = 7;
pub const KEY_7: KeyCode = 8;
pub const KEY_8: KeyCode = 9;
pub const KEY_9: KeyCode = 10;
pub const KEY_0: KeyCode = 11;
pub const KEY_MINUS: KeyCode = 12;
pub const KEY_EQUAL: KeyCode = 13;
pub const KEY_BACKSPACE: KeyCode = 14;
pub const KEY_TAB: KeyCode = 15;
pub const KEY_Q: KeyCode = 16;
pub const KEY_W: KeyCode = 17;
pub const KEY_E: KeyCode = 18;
pub const KEY_R: KeyCode = 19;
pub const KEY_T: KeyCode = 20;
pub const KEY_Y: KeyCode = 21;
pub const KEY_U: KeyCode = 22;
pub const KEY_I: KeyCode = 23;
pub const KEY_O: KeyCode = 24;
pub const KEY_P: KeyCode = 25;
pub const KEY_LEFTBRACE: KeyCode = 26;
pub const KEY_RIGHTBRACE: KeyCode = 27;
pub const KEY_ENTER: KeyCode = 28;
pub const KEY_A: KeyCode = 30;
pub const KEY_S: KeyCode = 31;
pub const KEY_D: KeyCode = 32;
pub const KEY_F: KeyCode = 33;
pub const KEY_G: KeyCode = 34;
pub const KEY_H: KeyCode = 35;
pub const KEY_J: KeyCode = 36;
pub const KEY_K: KeyCode = 37;
pub const KEY_L: KeyCode = 38;
pub const KEY_SEMICOLON: KeyCode = 39;
pub const KEY_APOSTROPHE: KeyCode = 40;
pub const KEY_GRAVE: KeyCode = 41;
pub const KEY_BACKSLASH: KeyCode = 43;
pub const KEY_Z: KeyCode = 44;
pub const KEY_X: KeyCode = 45;
pub const KEY_C: KeyCode = 46;
pub const KEY_V: KeyCode = 47;
pub const KEY_B: KeyCode = 48;
pub const KEY_N: KeyCode = 49;
pub const KEY_M: KeyCode = 50;
pub const KEY_COMMA: KeyCode = 51;
pub const KEY_DOT: KeyCode = 52;
pub const KEY_SLASH: KeyCode = 53;
pub const KEY_SPACE: KeyCode = 57;
pub const KEY_CAPSLOCK: KeyCode = 58;

/// Extra key left of Z on ISO keyboards (< > |)
pub const KEY_102ND: KeyCode = 86;

// ============================================================================
// Modifier Keys
// ============================================================================

/// Left Control key
pub const KEY_LEFTCTRL: KeyCode = 29;

/// Right Control key
pub const KEY_RIGHTCTRL: KeyCode = 97;

/// Left Shift key
pub const KEY_LEFTSHIFT: KeyCode = 42;

/// Right Shift key
pub const KEY_RIGHTSHIFT: KeyCode = 54;

/// Left Alt key
pub const KEY_LEFTALT: KeyCode = 56;

/// Right Alt key (AltGr on European keyboards)
pub const KEY_RIGHTALT: KeyCode = 100;

// ============================================================================
// Navigation Keys
// ============================================================================

pub const KEY_HOME: KeyCode = 102;
pub const KEY_UP: KeyCode = 103;
pub const KEY_PAGEUP: KeyCode = 104;
pub const KEY_LEFT: KeyCode = 105;
pub const KEY_RIGHT: KeyCode = 106;
pub const KEY_END: KeyCode = 107;
pub const KEY_DOWN: KeyCode = 108;
pub const KEY_PAGEDOWN: KeyCode = 109;
pub const KEY_INSERT: KeyCode = 110;
pub const KEY_DELETE: KeyCode = 111;

// ============================================================================
// Function Keys
// ============================================================================

pub const KEY_F1: KeyCode = 59;
pub const KEY_F2: KeyCode = 60;
pub const KEY_F3: KeyCode = 61;
pub const KEY_F4: KeyCode = 62;
pub const KEY_F5: KeyCode = 63;
pub const KEY_F6: KeyCode = 64;
pub const KEY_F7: KeyCode = 65;
pub const KEY_F8: KeyCode = 66;
pub const KEY_F9: KeyCode = 67;
pub const KEY_F10: KeyCode = 68;
pub const KEY_F11: KeyCode = 87;
pub const KEY_F12: KeyCode = 88;

/// Highest key code the virtual device advertises
pub const KEY_MAX: KeyCode = 0x2ff;

// ============================================================================
// Key names
// ============================================================================

/// Resolve a symbolic key name ("enter", "f5", "a", "7") to its keycode
///
/// Names are case-insensitive. Letters and digits name the physical
/// QWERTY position, not the character a layout would produce there.
pub fn key_from_name(name: &str) -> Option<KeyCode> {
    let name = name.to_ascii_lowercase();
    let code = match name.as_str() {
        // Letters
        "a" => KEY_A,
        "b" => KEY_B,
        "c" => KEY_C,
        "d" => KEY_D,
        "e" => KEY_E,
        "f" => KEY_F,
        "g" => KEY_G,
        "h" => KEY_H,
        "i" => KEY_I,
        "j" => KEY_J,
        "k" => KEY_K,
        "l" => KEY_L,
        "m" => KEY_M,
        "n" => KEY_N,
        "o" => KEY_O,
        "p" => KEY_P,
        "q" => KEY_Q,
        "r" => KEY_R,
        "s" => KEY_S,
        "t" => KEY_T,
        "u" => KEY_U,
        "v" => KEY_V,
        "w" => KEY_W,
        "x" => KEY_X,
        "y" => KEY_Y,
        "z" => KEY_Z,
        // Numbers
        "0" => KEY_0,
        "1" => KEY_1,
        "2" => KEY_2,
        "3" => KEY_3,
        "4" => KEY_4,
        "5" => KEY_5,
        "6" => KEY_6,
        "7" => KEY_7,
        "8" => KEY_8,
        "9" => KEY_9,
        // Special keys
        "space" => KEY_SPACE,
        "enter" | "return" => KEY_ENTER,
        "tab" => KEY_TAB,
        "escape" | "esc" => KEY_ESC,
        "backspace" => KEY_BACKSPACE,
        "capslock" => KEY_CAPSLOCK,
        "minus" => KEY_MINUS,
        "equal" => KEY_EQUAL,
        "insert" | "ins" => KEY_INSERT,
        "delete" | "del" => KEY_DELETE,
        // Navigation
        "home" => KEY_HOME,
        "end" => KEY_END,
        "pageup" => KEY_PAGEUP,
        "pagedown" => KEY_PAGEDOWN,
        "up" => KEY_UP,
        "down" => KEY_DOWN,
        "left" => KEY_LEFT,
        "right" => KEY_RIGHT,
        // Function keys
        "f1" => KEY_F1,
        "f2" => KEY_F2,
        "f3" => KEY_F3,
        "f4" => KEY_F4,
        "f5" => KEY_F5,
        "f6" => KEY_F6,
        "f7" => KEY_F7,
        "f8" => KEY_F8,
        "f9" => KEY_F9,
        "f10" => KEY_F10,
        "f11" => KEY_F11,
        "f12" => KEY_F12,
        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_name() {
        assert_eq!(key_from_name("Enter"), Some(KEY_ENTER));
        assert_eq!(key_from_name("a"), Some(KEY_A));
        assert_eq!(key_from_name("F12"), Some(KEY_F12));
        assert_eq!(key_from_name("0"), Some(KEY_0));
        assert_eq!(key_from_name("hyper"), None);
    }
}
