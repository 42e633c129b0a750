//! US QWERTY

use super::common::{COMMON, QWERTY_LETTERS, STANDARD_NUMBERS};
use super::{KeyMapping, KeyTable, Layout, NAME_US};
use crate::input::keycodes::*;

/// Shifted number row
const SHIFTED_SYMBOLS: KeyTable = &[
    ('!', KeyMapping::shift(KEY_1)),
    ('@', KeyMapping::shift(KEY_2)),
    ('#', KeyMapping::shift(KEY_3)),
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

/// Symbols and brackets
const SYMBOLS: KeyTable = &[
    ('-', KeyMapping::plain(KEY_MINUS)),
    ('_', KeyMapping::shift(KEY_MINUS)),
    ('=', KeyMapping::plain(KEY_EQUAL)),
    ('+', KeyMapping::shift(KEY_EQUAL)),
    ('[', KeyMapping::plain(KEY_LEFTBRACE)),
    ('{', KeyMapping::shift(KEY_LEFTBRACE)),
    (']', KeyMapping::plain(KEY_RIGHTBRACE)),
    ('}', KeyMapping::shift(KEY_RIGHTBRACE)),
    ('\\', KeyMapping::plain(KEY_BACKSLASH)),
    ('|', KeyMapping::shift(KEY_BACKSLASH)),
    (';', KeyMapping::plain(KEY_SEMICOLON)),
    (':', KeyMapping::shift(KEY_SEMICOLON)),
    ('\'', KeyMapping::plain(KEY_APOSTROPHE)),
    ('"', KeyMapping::shift(KEY_APOSTROPHE)),
    ('`', KeyMapping::plain(KEY_GRAVE)),
    ('~', KeyMapping::shift(KEY_GRAVE)),
];

/// US has no dead keys
const DEAD_KEYS: KeyTable = &[];

pub(super) fn build() -> Layout {
    Layout::new(
        NAME_US,
        &[
            COMMON,
            QWERTY_LETTERS,
            STANDARD_NUMBERS,
            SHIFTED_SYMBOLS,
            PUNCTUATION,
            SYMBOLS,
        ],
        DEAD_KEYS,
    )
}
