//! Italian QWERTY

use super::common::{COMMON, QWERTY_LETTERS, STANDARD_NUMBERS};
use super::deadkeys::CIRCUMFLEX;
use super::{KeyMapping, KeyTable, Layout, NAME_IT};
use crate::input::keycodes::*;

/// Circumflex on Shift of the ì key
const DEAD_KEYS: KeyTable = &[(CIRCUMFLEX, KeyMapping::shift(KEY_EQUAL))];

const SHIFTED_SYMBOLS: KeyTable = &[
    ('!', KeyMapping::shift(KEY_1)),
    ('"', KeyMapping::shift(KEY_2)),
    ('£', KeyMapping::shift(KEY_3)),
    ('$', KeyMapping::shift(KEY_4)),
    ('%', KeyMapping::shift(KEY_5)),
    ('&', KeyMapping::shift(KEY_6)),
    ('/', KeyMapping::shift(KEY_7)),
    ('(', KeyMapping::shift(KEY_8)),
    (')', KeyMapping::shift(KEY_9)),
    ('=', KeyMapping::shift(KEY_0)),
];

/// è/é share one key (unshifted/shifted)
const PRECOMPOSED: KeyTable = &[
    ('è', KeyMapping::plain(KEY_LEFTBRACE)),
    ('é', KeyMapping::shift(KEY_LEFTBRACE)),
    ('ò', KeyMapping::plain(KEY_SEMICOLON)),
    ('ç', KeyMapping::shift(KEY_SEMICOLON)),
    ('à', KeyMapping::plain(KEY_APOSTROPHE)),
    ('°', KeyMapping::shift(KEY_APOSTROPHE)),
    ('ù', KeyMapping::plain(KEY_BACKSLASH)),
    ('§', KeyMapping::shift(KEY_BACKSLASH)),
    ('ì', KeyMapping::plain(KEY_EQUAL)),
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
    ('+', KeyMapping::plain(KEY_RIGHTBRACE)),
    ('*', KeyMapping::shift(KEY_RIGHTBRACE)),
    ('\\', KeyMapping::plain(KEY_GRAVE)),
    ('|', KeyMapping::shift(KEY_GRAVE)),
];

const ALTGR_SYMBOLS: KeyTable = &[
    ('@', KeyMapping::altgr(KEY_APOSTROPHE)),
    ('#', KeyMapping::altgr(KEY_BACKSLASH)),
    ('[', KeyMapping::altgr(KEY_LEFTBRACE)),
    (']', KeyMapping::altgr(KEY_RIGHTBRACE)),
    ('{', KeyMapping::shift_altgr(KEY_LEFTBRACE)),
    ('}', KeyMapping::shift_altgr(KEY_RIGHTBRACE)),
    ('~', KeyMapping::altgr(KEY_EQUAL)),
    ('`', KeyMapping::altgr(KEY_MINUS)),
];

const SPECIAL_KEYS: KeyTable = &[
    ('<', KeyMapping::plain(KEY_102ND)),
    ('>', KeyMapping::shift(KEY_102ND)),
];

pub(super) fn build() -> Layout {
    Layout::new(
        NAME_IT,
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
    fn test_e_grave_and_acute_share_key() {
        let it = build();
        assert_eq!(it.resolve_char('è').unwrap().as_slice(), &[KeyMapping::plain(KEY_LEFTBRACE)]);
        assert_eq!(it.resolve_char('é').unwrap().as_slice(), &[KeyMapping::shift(KEY_LEFTBRACE)]);
    }

    #[test]
    fn test_circumflex_dead_key() {
        let it = build();
        assert_eq!(
            it.resolve_char('î').unwrap().as_slice(),
            &[KeyMapping::shift(KEY_EQUAL), KeyMapping::plain(KEY_I)]
        );
        // Only circumflex composes on Italian
        assert!(it.resolve_char('ä').is_err());
    }

    #[test]
    fn test_braces_need_shift_and_altgr() {
        let it = build();
        assert_eq!(
            it.resolve_char('{').unwrap().as_slice(),
            &[KeyMapping::shift_altgr(KEY_LEFTBRACE)]
        );
    }
}
