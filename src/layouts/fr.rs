//! French AZERTY
//!
//! Differences from QWERTY:
//! - A/Q and Z/W swapped, M on the semicolon key
//! - digits need Shift; the unshifted number row types `& é " ' ( - è _ ç à`
//! - circumflex and diaeresis are dead keys on the same key (Shift toggles)

use super::common::COMMON;
use super::deadkeys::{CIRCUMFLEX, DIAERESIS};
use super::{KeyMapping, KeyTable, Layout, NAME_FR};
use crate::input::keycodes::*;

const DEAD_KEYS: KeyTable = &[
    (CIRCUMFLEX, KeyMapping::plain(KEY_LEFTBRACE)),
    (DIAERESIS, KeyMapping::shift(KEY_LEFTBRACE)),
];

const AZERTY_LETTERS: KeyTable = &[
    // Top row
    ('a', KeyMapping::plain(KEY_Q)),
    ('A', KeyMapping::shift(KEY_Q)),
    ('z', KeyMapping::plain(KEY_W)),
    ('Z', KeyMapping::shift(KEY_W)),
    ('e', KeyMapping::plain(KEY_E)),
    ('E', KeyMapping::shift(KEY_E)),
    ('r', KeyMapping::plain(KEY_R)),
    ('R', KeyMapping::shift(KEY_R)),
    ('t', KeyMapping::plain(KEY_T)),
    ('T', KeyMapping::shift(KEY_T)),
    ('y', KeyMapping::plain(KEY_Y)),
    ('Y', KeyMapping::shift(KEY_Y)),
    ('u', KeyMapping::plain(KEY_U)),
    ('U', KeyMapping::shift(KEY_U)),
    ('i', KeyMapping::plain(KEY_I)),
    ('I', KeyMapping::shift(KEY_I)),
    ('o', KeyMapping::plain(KEY_O)),
    ('O', KeyMapping::shift(KEY_O)),
    ('p', KeyMapping::plain(KEY_P)),
    ('P', KeyMapping::shift(KEY_P)),
    // Home row
    ('q', KeyMapping::plain(KEY_A)),
    ('Q', KeyMapping::shift(KEY_A)),
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
    ('m', KeyMapping::plain(KEY_SEMICOLON)),
    ('M', KeyMapping::shift(KEY_SEMICOLON)),
    // Bottom row
    ('w', KeyMapping::plain(KEY_Z)),
    ('W', KeyMapping::shift(KEY_Z)),
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
];

/// Shifted digits, unshifted symbols. é è ç à live in PRECOMPOSED.
const NUMBER_ROW: KeyTable = &[
    ('1', KeyMapping::shift(KEY_1)),
    ('2', KeyMapping::shift(KEY_2)),
    ('3', KeyMapping::shift(KEY_3)),
    ('4', KeyMapping::shift(KEY_4)),
    ('5', KeyMapping::shift(KEY_5)),
    ('6', KeyMapping::shift(KEY_6)),
    ('7', KeyMapping::shift(KEY_7)),
    ('8', KeyMapping::shift(KEY_8)),
    ('9', KeyMapping::shift(KEY_9)),
    ('0', KeyMapping::shift(KEY_0)),
    ('&', KeyMapping::plain(KEY_1)),
    ('"', KeyMapping::plain(KEY_3)),
    ('\'', KeyMapping::plain(KEY_4)),
    ('(', KeyMapping::plain(KEY_5)),
    ('-', KeyMapping::plain(KEY_6)),
    ('_', KeyMapping::plain(KEY_8)),
];

/// Accented letters with their own key
const PRECOMPOSED: KeyTable = &[
    ('é', KeyMapping::plain(KEY_2)),
    ('è', KeyMapping::plain(KEY_7)),
    ('ç', KeyMapping::plain(KEY_9)),
    ('à', KeyMapping::plain(KEY_0)),
    ('ù', KeyMapping::plain(KEY_APOSTROPHE)),
];

const PUNCTUATION: KeyTable = &[
    (',', KeyMapping::plain(KEY_M)),
    ('?', KeyMapping::shift(KEY_M)),
    (';', KeyMapping::plain(KEY_COMMA)),
    ('.', KeyMapping::shift(KEY_COMMA)),
    (':', KeyMapping::plain(KEY_DOT)),
    ('/', KeyMapping::shift(KEY_DOT)),
    ('!', KeyMapping::plain(KEY_SLASH)),
];

const ALTGR_SYMBOLS: KeyTable = &[
    ('~', KeyMapping::altgr(KEY_2)),
    ('#', KeyMapping::altgr(KEY_3)),
    ('{', KeyMapping::altgr(KEY_4)),
    ('[', KeyMapping::altgr(KEY_5)),
    ('|', KeyMapping::altgr(KEY_6)),
    ('`', KeyMapping::altgr(KEY_7)),
    ('\\', KeyMapping::altgr(KEY_8)),
    ('@', KeyMapping::altgr(KEY_0)),
    (']', KeyMapping::altgr(KEY_MINUS)),
    ('}', KeyMapping::altgr(KEY_EQUAL)),
];

const REMAINING_SYMBOLS: KeyTable = &[
    ('°', KeyMapping::shift(KEY_MINUS)),
    (')', KeyMapping::plain(KEY_EQUAL)),
    ('=', KeyMapping::shift(KEY_EQUAL)),
    // Typing these directly strikes the dead key itself
    ('^', KeyMapping::plain(KEY_LEFTBRACE)),
    ('¨', KeyMapping::shift(KEY_LEFTBRACE)),
    ('$', KeyMapping::plain(KEY_RIGHTBRACE)),
    ('£', KeyMapping::shift(KEY_RIGHTBRACE)),
    ('*', KeyMapping::plain(KEY_BACKSLASH)),
    ('µ', KeyMapping::shift(KEY_BACKSLASH)),
    ('%', KeyMapping::shift(KEY_APOSTROPHE)),
    ('<', KeyMapping::plain(KEY_GRAVE)),
    ('>', KeyMapping::shift(KEY_GRAVE)),
];

pub(super) fn build() -> Layout {
    Layout::new(
        NAME_FR,
        &[
            COMMON,
            AZERTY_LETTERS,
            NUMBER_ROW,
            PRECOMPOSED,
            PUNCTUATION,
            ALTGR_SYMBOLS,
            REMAINING_SYMBOLS,
        ],
        DEAD_KEYS,
    )
}
