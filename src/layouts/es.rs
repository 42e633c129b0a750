//! Spanish QWERTY

use super::common::{COMMON, QWERTY_LETTERS, STANDARD_NUMBERS};
use super::deadkeys::{CIRCUMFLEX, GRAVE};
use super::{KeyMapping, KeyTable, Layout, NAME_ES};
use crate::input::keycodes::*;

/// Grave and circumflex share the key right of P
const DEAD_KEYS: KeyTable = &[
    (GRAVE, KeyMapping::plain(KEY_LEFTBRACE)),
    (CIRCUMFLEX, KeyMapping::shift(KEY_LEFTBRACE)),
];

const SHIFTED_SYMBOLS: KeyTable = &[
    ('!', KeyMapping::shift(KEY_1)),
    ('"', KeyMapping::shift(KEY_2)),
    ('·', KeyMapping::shift(KEY_3)),
    ('$', KeyMapping::shift(KEY_4)),
    ('%', KeyMapping::shift(KEY_5)),
    ('&', KeyMapping::shift(KEY_6)),
    ('/', KeyMapping::shift(KEY_7)),
    ('(', KeyMapping::shift(KEY_8)),
    (')', KeyMapping::shift(KEY_9)),
    ('=', KeyMapping::shift(KEY_0)),
];

const PRECOMPOSED: KeyTable = &[
    ('ñ', KeyMapping::plain(KEY_SEMICOLON)),
    ('Ñ', KeyMapping::shift(KEY_SEMICOLON)),
    ('á', KeyMapping::plain(KEY_APOSTROPHE)),
    ('Á', KeyMapping::shift(KEY_APOSTROPHE)),
    ('ç', KeyMapping::plain(KEY_BACKSLASH)),
    ('Ç', KeyMapping::shift(KEY_BACKSLASH)),
];

const PUNCTUATION: KeyTable = &[
    (',', KeyMapping::plain(KEY_COMMA)),
    (';', KeyMapping::shift(KEY_COMMA)),
    ('.', KeyMapping::plain(KEY_DOT)),
    (':', KeyMapping::shift(KEY_DOT)),
    ('-', KeyMapping::plain(KEY_SLASH)),
    ('_', KeyMapping::shift(KEY_SLASH)),
];

const SYMBOLS: KeyTable = &[
    ('\'', KeyMapping::plain(KEY_MINUS)),
    ('?', KeyMapping::shift(KEY_MINUS)),
    ('¡', KeyMapping::plain(KEY_EQUAL)),
    ('¿', KeyMapping::shift(KEY_EQUAL)),
    ('+', KeyMapping::plain(KEY_RIGHTBRACE)),
    ('*', KeyMapping::shift(KEY_RIGHTBRACE)),
    ('º', KeyMapping::plain(KEY_GRAVE)),
    ('ª', KeyMapping::shift(KEY_GRAVE)),
];

const ALTGR_SYMBOLS: KeyTable = &[
    ('|', KeyMapping::altgr(KEY_1)),
    ('@', KeyMapping::altgr(KEY_2)),
    ('#', KeyMapping::altgr(KEY_3)),
    ('~', KeyMapping::altgr(KEY_4)),
    ('[', KeyMapping::altgr(KEY_GRAVE)),
    (']', KeyMapping::altgr(KEY_RIGHTBRACE)),
    ('{', KeyMapping::altgr(KEY_APOSTROPHE)),
    ('}', KeyMapping::altgr(KEY_BACKSLASH)),
    ('\\', KeyMapping::shift_altgr(KEY_GRAVE)),
];

const SPECIAL_KEYS: KeyTable = &[
    ('<', KeyMapping::plain(KEY_102ND)),
    ('>', KeyMapping::shift(KEY_102ND)),
];

pub(super) fn build() -> Layout {
    Layout::new(
        NAME_ES,
        &[
            COMMON,
            QWERTY_LETTERS,
            STANDARD_NUMBERS,
            SHIFTED_SYMBOLS,
            PRECOMPOSED,
            PUNCTUATION,
            SYMBOLS,
            ALTGR_SYMBOLS,
            SPECIAL_KEYS,
        ],
        DEAD_KEYS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_punctuation() {
        let es = build();
        assert_eq!(es.resolve_char('¡').unwrap().as_slice(), &[KeyMapping::plain(KEY_EQUAL)]);
        assert_eq!(es.resolve_char('¿').unwrap().as_slice(), &[KeyMapping::shift(KEY_EQUAL)]);
    }

    #[test]
    fn test_direct_enye_over_tilde() {
        let es = build();
        assert_eq!(
            es.resolve_char('ñ').unwrap().as_slice(),
            &[KeyMapping::plain(KEY_SEMICOLON)]
        );
    }

    #[test]
    fn test_grave_and_circumflex() {
        let es = build();
        assert_eq!(
            es.resolve_char('ò').unwrap().as_slice(),
            &[KeyMapping::plain(KEY_LEFTBRACE), KeyMapping::plain(KEY_O)]
        );
        assert_eq!(
            es.resolve_char('Û').unwrap().as_slice(),
            &[KeyMapping::shift(KEY_LEFTBRACE), KeyMapping::shift(KEY_U)]
        );
        // No acute dead key: é is unreachable, á has its own key
        assert!(es.resolve_char('é').is_err());
    }

    #[test]
    fn test_backslash_needs_shift_and_altgr() {
        let es = build();
        assert_eq!(
            es.resolve_char('\\').unwrap().as_slice(),
            &[KeyMapping::shift_altgr(KEY_GRAVE)]
        );
    }
}
