//! German QWERTZ
//!
//! Y and Z swapped, umlauts and ß on their own keys,
//! circumflex/acute/grave as dead keys.

use super::common::{COMMON, STANDARD_NUMBERS};
use super::deadkeys::{ACUTE, CIRCUMFLEX, GRAVE};
use super::{KeyMapping, KeyTable, Layout, NAME_DE};
use crate::input::keycodes::*;

const DEAD_KEYS: KeyTable = &[
    (CIRCUMFLEX, KeyMapping::plain(KEY_GRAVE)),
    (ACUTE, KeyMapping::plain(KEY_EQUAL)),
    (GRAVE, KeyMapping::shift(KEY_EQUAL)),
];

const QWERTZ_LETTERS: KeyTable = &[
    // Top row, Z on the Y key
    ('q', KeyMapping::plain(KEY_Q)),
    ('Q', KeyMapping::shift(KEY_Q)),
    ('w', KeyMapping::plain(KEY_W)),
    ('W', KeyMapping::shift(KEY_W)),
    ('e', KeyMapping::plain(KEY_E)),
    ('E', KeyMapping::shift(KEY_E)),
    ('r', KeyMapping::plain(KEY_R)),
    ('R', KeyMapping::shift(KEY_R)),
    ('t', KeyMapping::plain(KEY_T)),
    ('T', KeyMapping::shift(KEY_T)),
    ('z', KeyMapping::plain(KEY_Y)),
    ('Z', KeyMapping::shift(KEY_Y)),
    ('u', KeyMapping::plain(KEY_U)),
    ('U', KeyMapping::shift(KEY_U)),
    ('i', KeyMapping::plain(KEY_I)),
    ('I', KeyMapping::shift(KEY_I)),
    ('o', KeyMapping::plain(KEY_O)),
    ('O', KeyMapping::shift(KEY_O)),
    ('p', KeyMapping::plain(KEY_P)),
    ('P', KeyMapping::shift(KEY_P)),
    // Home row
    ('a', KeyMapping::plain(KEY_A)),
    ('A', KeyMapping::shift(KEY_A)),
    ('s', KeyMapping::plain(KEY_S)),
    ('S', KeyMapping::shift(KEY_S)),
    ('d', KeyMapping::plain(KEY_D)),
    ('D', KeyMapping::shift(KEY_D)),
    ('f', KeyMapping::plain(KEY_F)),
    ('F', KeyMapping::shift(KEY_F)),
    ('g', KeyMapping::plain(KEY_G)),
    ('G', KeyMapping::shift(KEY_G)),
    ('h', KeyMapping::plain(KEY_H)),
    ('H', KeyMapping::shift(KEY_H)),
    ('j', KeyMapping::plain(KEY_J)),
    ('J', KeyMapping::shift(KEY_J)),
    ('k', KeyMapping::plain(KEY_K)),
    ('K', KeyMapping::shift(KEY_K)),
    ('l', KeyMapping::plain(KEY_L)),
    ('L', KeyMapping::shift(KEY_L)),
    // Bottom row, Y on the Z key
    ('y', KeyMapping::plain(KEY_Z)),
    ('Y', KeyMapping::shift(KEY_Z)),
    ('x', KeyMapping::plain(KEY_X)),
    ('X', KeyMapping::shift(KEY_X)),
    ('c', KeyMapping::plain(KEY_C)),
    ('C', KeyMapping::shift(KEY_C)),
    ('v', KeyMapping::plain(KEY_V)),
    ('V', KeyMapping::shift(KEY_V)),
    ('b', KeyMapping::plain(KEY_B)),
    ('B', KeyMapping::shift(KEY_B)),
    ('n', KeyMapping::plain(KEY_N)),
    ('N', KeyMapping::shift(KEY_N)),
    ('m', KeyMapping::plain(KEY_M)),
    ('M', KeyMapping::shift(KEY_M)),
];

const SHIFTED_SYMBOLS: KeyTable = &[
    ('!', KeyMapping::shift(KEY_1)),
    ('"', KeyMapping::shift(KEY_2)),
    ('§', KeyMapping::shift(KEY_3)),
    ('$', KeyMapping::shift(KEY_4)),
    ('%', KeyMapping::shift(KEY_5)),
    ('&', KeyMapping::shift(KEY_6)),
    ('/', KeyMapping::shift(KEY_7)),
    ('(', KeyMapping::shift(KEY_8)),
    (')', KeyMapping::shift(KEY_9)),
    ('=', KeyMapping::shift(KEY_0)),
];

const UMLAUTS: KeyTable = &[
    ('ü', KeyMapping::plain(KEY_LEFTBRACE)),
    ('Ü', KeyMapping::shift(KEY_LEFTBRACE)),
    ('ö', KeyMapping::plain(KEY_SEMICOLON)),
    ('Ö', KeyMapping::shift(KEY_SEMICOLON)),
    ('ä', KeyMapping::plain(KEY_APOSTROPHE)),
    ('Ä', KeyMapping::shift(KEY_APOSTROPHE)),
    ('ß', KeyMapping::plain(KEY_MINUS)),
    ('?', KeyMapping::shift(KEY_MINUS)),
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
    ('+', KeyMapping::plain(KEY_RIGHTBRACE)),
    ('*', KeyMapping::shift(KEY_RIGHTBRACE)),
    ('#', KeyMapping::plain(KEY_BACKSLASH)),
    ('\'', KeyMapping::shift(KEY_BACKSLASH)),
    // Shares the circumflex dead key
    ('°', KeyMapping::shift(KEY_GRAVE)),
];

const ALTGR_SYMBOLS: KeyTable = &[
    ('@', KeyMapping::altgr(KEY_Q)),
    ('~', KeyMapping::altgr(KEY_RIGHTBRACE)),
    ('|', KeyMapping::altgr(KEY_GRAVE)),
    ('{', KeyMapping::altgr(KEY_7)),
    ('[', KeyMapping::altgr(KEY_8)),
    (']', KeyMapping::altgr(KEY_9)),
    ('}', KeyMapping::altgr(KEY_0)),
    ('\\', KeyMapping::altgr(KEY_MINUS)),
];

const SPECIAL_KEYS: KeyTable = &[
    ('<', KeyMapping::plain(KEY_102ND)),
    ('>', KeyMapping::shift(KEY_102ND)),
];

pub(super) fn build() -> Layout {
    Layout::new(
        NAME_DE,
        &[
            COMMON,
            STANDARD_NUMBERS,
            QWERTZ_LETTERS,
            SHIFTED_SYMBOLS,
            UMLAUTS,
            PUNCTUATION,
            SYMBOLS,
            ALTGR_SYMBOLS,
            SPECIAL_KEYS,
        ],
        DEAD_KEYS,
    )
}
