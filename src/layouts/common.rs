//! Shared partial tables
//!
//! Building blocks merged into several layouts.

use super::{KeyMapping, KeyTable};
use crate::input::keycodes::*;

/// Whitespace and the euro sign (AltGr+E on most layouts)
pub const COMMON: KeyTable = &[
    (' ', KeyMapping::plain(KEY_SPACE)),
    ('\t', KeyMapping::plain(KEY_TAB)),
    ('\n', KeyMapping::plain(KEY_ENTER)),
    ('€', KeyMapping::altgr(KEY_E)),
];

/// QWERTY letter grid: each letter on its own key, uppercase with Shift
///
/// Not for AZERTY or QWERTZ.
pub const QWERTY_LETTERS: KeyTable = &[
    ('a', KeyMapping::plain(KEY_A)),
    ('b', KeyMapping::plain(KEY_B)),
    ('c', KeyMapping::plain(KEY_C)),
    ('d', KeyMapping::plain(KEY_D)),
    ('e', KeyMapping::plain(KEY_E)),
    ('f', KeyMapping::plain(KEY_F)),
    ('g', KeyMapping::plain(KEY_G)),
    ('h', KeyMapping::plain(KEY_H)),
    ('i', KeyMapping::plain(KEY_I)),
    ('j', KeyMapping::plain(KEY_J)),
    ('k', KeyMapping::plain(KEY_K)),
    ('l', KeyMapping::plain(KEY_L)),
    ('m', KeyMapping::plain(KEY_M)),
    ('n', KeyMapping::plain(KEY_N)),
    ('o', KeyMapping::plain(KEY_O)),
    ('p', KeyMapping::plain(KEY_P)),
    ('q', KeyMapping::plain(KEY_Q)),
    ('r', KeyMapping::plain(KEY_R)),
    ('s', KeyMapping::plain(KEY_S)),
    ('t', KeyMapping::plain(KEY_T)),
    ('u', KeyMapping::plain(KEY_U)),
    ('v', KeyMapping::plain(KEY_V)),
    ('w', KeyMapping::plain(KEY_W)),
    ('x', KeyMapping::plain(KEY_X)),
    ('y', KeyMapping::plain(KEY_Y)),
    ('z', KeyMapping::plain(KEY_Z)),
    ('A', KeyMapping::shift(KEY_A)),
    ('B', KeyMapping::shift(KEY_B)),
    ('C', KeyMapping::shift(KEY_C)),
    ('D', KeyMapping::shift(KEY_D)),
    ('E', KeyMapping::shift(KEY_E)),
    ('F', KeyMapping::shift(KEY_F)),
    ('G', KeyMapping::shift(KEY_G)),
    ('H', KeyMapping::shift(KEY_H)),
    ('I', KeyMapping::shift(KEY_I)),
    ('J', KeyMapping::shift(KEY_J)),
    ('K', KeyMapping::shift(KEY_K)),
    ('L', KeyMapping::shift(KEY_L)),
    ('M', KeyMapping::shift(KEY_M)),
    ('N', KeyMapping::shift(KEY_N)),
    ('O', KeyMapping::shift(KEY_O)),
    ('P', KeyMapping::shift(KEY_P)),
    ('Q', KeyMapping::shift(KEY_Q)),
    ('R', KeyMapping::shift(KEY_R)),
    ('S', KeyMapping::shift(KEY_S)),
    ('T', KeyMapping::shift(KEY_T)),
    ('U', KeyMapping::shift(KEY_U)),
    ('V', KeyMapping::shift(KEY_V)),
    ('W', KeyMapping::shift(KEY_W)),
    ('X', KeyMapping::shift(KEY_X)),
    ('Y', KeyMapping::shift(KEY_Y)),
    ('Z', KeyMapping::shift(KEY_Z)),
];

/// Unshifted number row
///
/// Not for AZERTY, where digits need Shift.
pub const STANDARD_NUMBERS: KeyTable = &[
    ('1', KeyMapping::plain(KEY_1)),
    ('2', KeyMapping::plain(KEY_2)),
    ('3', KeyMapping::plain(KEY_3)),
    ('4', KeyMapping::plain(KEY_4)),
    ('5', KeyMapping::plain(KEY_5)),
    ('6', KeyMapping::plain(KEY_6)),
    ('7', KeyMapping::plain(KEY_7)),
    ('8', KeyMapping::plain(KEY_8)),
    ('9', KeyMapping::plain(KEY_9)),
    ('0', KeyMapping::plain(KEY_0)),
];
