//! UK (British) QWERTY

use super::common::{COMMON, QWERTY_LETTERS, STANDARD_NUMBERS};
use super::{KeyMapping, KeyTable, Layout, NAME_UK};
use crate::input::keycodes::*;

/// Shifted number row: `"` on 2, `£` on 3
const SHIFTED_SYMBOLS: KeyTable = &[
    ('!', KeyMapping::shift(KEY_1)),
    ('"', KeyMapping::shift(KEY_2)),
    ('£', KeyMapping::shift(KEY_3)),
    ('$', KeyMapping::shift(KEY_4)),
    ('%', KeyMapping::shift(KEY_5)),
    ('^', KeyMapping::shift(KEY_6)),
    ('&', KeyMapping::shift(KEY_7)),
    ('*', KeyMapping::shift(KEY_8)),
    ('(', KeyMapping::shift(KEY_9)),
    (')', KeyMapping::shift(KEY_0)),
];

const PUNCTUATION: KeyTable = &[
    (',', KeyMapping::plain(KEY_COMMA)),
    ('<', KeyMapping::shift(KEY_COMMA)),
    ('.', KeyMapping::plain(KEY_DOT)),
    ('>', KeyMapping::shift(KEY_DOT)),
    ('/', KeyMapping::plain(KEY_SLASH)),
    ('?', KeyMapping::shift(KEY_SLASH)),
];

/// `@` on Shift+apostrophe, `#`/`~` on the backslash position
const SYMBOLS: KeyTable = &[
    ('-', KeyMapping::plain(KEY_MINUS)),
    ('_', KeyMapping::shift(KEY_MINUS)),
    ('=', KeyMapping::plain(KEY_EQUAL)),
    ('+', KeyMapping::shift(KEY_EQUAL)),
    ('[', KeyMapping::plain(KEY_LEFTBRACE)),
    ('{', KeyMapping::shift(KEY_LEFTBRACE)),
    (']', KeyMapping::plain(KEY_RIGHTBRACE)),
    ('}', KeyMapping::shift(KEY_RIGHTBRACE)),
    (';', KeyMapping::plain(KEY_SEMICOLON)),
    (':', KeyMapping::shift(KEY_SEMICOLON)),
    ('\'', KeyMapping::plain(KEY_APOSTROPHE)),
    ('@', KeyMapping::shift(KEY_APOSTROPHE)),
    ('#', KeyMapping::plain(KEY_BACKSLASH)),
    ('~', KeyMapping::shift(KEY_BACKSLASH)),
    ('`', KeyMapping::plain(KEY_GRAVE)),
    ('¬', KeyMapping::shift(KEY_GRAVE)),
];

/// Euro sits on AltGr+4 rather than AltGr+E
const ALTGR_SYMBOLS: KeyTable = &[('€', KeyMapping::altgr(KEY_4))];

/// ISO key left of Z
const SPECIAL_KEYS: KeyTable = &[
    ('\\', KeyMapping::plain(KEY_102ND)),
    ('|', KeyMapping::shift(KEY_102ND)),
];

const DEAD_KEYS: KeyTable = &[];

pub(super) fn build() -> Layout {
    Layout::new(
        NAME_UK,
        &[
            COMMON,
            QWERTY_LETTERS,
            STANDARD_NUMBERS,
            SHIFTED_SYMBOLS,
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
    fn test_uk_differs_from_us() {
        let uk = build();
        let cases = [
            ('"', KeyMapping::shift(KEY_2)),
            ('£', KeyMapping::shift(KEY_3)),
            ('@', KeyMapping::shift(KEY_APOSTROPHE)),
            ('#', KeyMapping::plain(KEY_BACKSLASH)),
            ('\\', KeyMapping::plain(KEY_102ND)),
            ('€', KeyMapping::altgr(KEY_4)),
        ];
        for (ch, expected) in cases {
            let seq = uk.resolve_char(ch).unwrap();
            assert_eq!(seq.as_slice(), &[expected], "{:?}", ch);
        }
    }

    #[test]
    fn test_uk_no_dead_keys() {
        let uk = build();
        assert!(uk.dead_key_symbols().is_empty());
        assert!(uk.resolve_char('é').is_err());
    }
}
