//! Keyboard layouts
//!
//! Convert a Unicode character into the physical keystrokes that produce it.
//! - Direct mapping: one key (with Shift/AltGr as needed)
//! - Dead-key composition: accent key, then base character
//!
//! Each layout's table is composed from shared partial tables
//! (whitespace, QWERTY letters, number row) overlaid with layout-specific
//! tables. Later tables win on collision.

pub mod common;
pub mod deadkeys;
pub mod registry;

mod de;
mod es;
mod fr;
mod it;
mod uk;
mod us;

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::input::{KeyCode, Modifiers};

pub use deadkeys::DeadKeyComposition;
pub use registry::Registry;

// Layout name constants
pub const NAME_US: &str = "us";
pub const NAME_UK: &str = "uk";
pub const NAME_FR: &str = "fr";
pub const NAME_DE: &str = "de";
pub const NAME_ES: &str = "es";
pub const NAME_IT: &str = "it";

/// How to physically produce one key signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyMapping {
    pub keycode: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyMapping {
    pub const fn new(keycode: KeyCode, modifiers: Modifiers) -> Self {
        Self { keycode, modifiers }
    }

    /// Key without modifiers
    pub const fn plain(keycode: KeyCode) -> Self {
        Self::new(keycode, Modifiers::NONE)
    }

    pub const fn shift(keycode: KeyCode) -> Self {
        Self::new(keycode, Modifiers::SHIFT)
    }

    pub const fn altgr(keycode: KeyCode) -> Self {
        Self::new(keycode, Modifiers::ALTGR)
    }

    pub const fn shift_altgr(keycode: KeyCode) -> Self {
        Self::new(keycode, Modifiers::SHIFT_ALTGR)
    }
}

/// Keystrokes needed for one character
///
/// Never empty: one entry for a direct key,
/// two for a dead-key composition (dead key first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySequence(Vec<KeyMapping>);

impl KeySequence {
    pub fn single(mapping: KeyMapping) -> Self {
        Self(vec![mapping])
    }

    pub fn composed(dead_key: KeyMapping, base: KeyMapping) -> Self {
        Self(vec![dead_key, base])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a sequence with no mappings
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[KeyMapping] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeyMapping> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a KeySequence {
    type Item = &'a KeyMapping;
    type IntoIter = std::slice::Iter<'a, KeyMapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Layout lookup and resolution errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("character {ch:?} (U+{:04X}) not supported in {layout} layout", codepoint(.ch))]
    CharNotSupported { ch: char, layout: String },

    #[error("layout {name:?} not found (available: {})", join_names(.available))]
    NotFound { name: String, available: Vec<String> },
}

fn codepoint(ch: &char) -> u32 {
    *ch as u32
}

fn join_names(names: &[String]) -> String {
    names.join(", ")
}

/// Partial character table: (character, mapping) pairs
pub type KeyTable = &'static [(char, KeyMapping)];

/// Merge partial tables into one lookup map
///
/// Later tables override earlier ones on collision.
pub fn merge_tables(tables: &[KeyTable]) -> HashMap<char, KeyMapping> {
    let mut merged = HashMap::with_capacity(tables.iter().map(|t| t.len()).sum());
    for table in tables {
        for &(ch, mapping) in table.iter() {
            merged.insert(ch, mapping);
        }
    }
    merged
}

/// One keyboard layout: direct table plus dead-key locations
///
/// Immutable after construction; shared read-only between requests.
pub struct Layout {
    name: &'static str,
    /// Character -> key for everything typed with a single keystroke
    base: HashMap<char, KeyMapping>,
    /// Dead-key symbol -> physical location on this layout
    dead_keys: HashMap<char, KeyMapping>,
}

impl Layout {
    pub fn new(name: &'static str, tables: &[KeyTable], dead_keys: KeyTable) -> Self {
        Self {
            name,
            base: merge_tables(tables),
            dead_keys: merge_tables(&[dead_keys]),
        }
    }

    /// Stable short code ("us", "fr", ...)
    pub fn name(&self) -> &str {
        self.name
    }

    /// Resolve a character to the keystrokes producing it
    ///
    /// Direct keys take priority over dead-key compositions.
    pub fn resolve_char(&self, ch: char) -> Result<KeySequence, LayoutError> {
        if let Some(&mapping) = self.base.get(&ch) {
            return Ok(KeySequence::single(mapping));
        }

        let composition = deadkeys::lookup(ch).ok_or_else(|| self.unsupported(ch))?;
        let dead_key = self
            .dead_keys
            .get(&composition.dead_key)
            .ok_or_else(|| self.unsupported(ch))?;
        let base = self
            .base
            .get(&composition.base)
            .ok_or_else(|| self.unsupported(ch))?;

        Ok(KeySequence::composed(*dead_key, *base))
    }

    /// True if `resolve_char` succeeds for this character
    pub fn supports(&self, ch: char) -> bool {
        self.resolve_char(ch).is_ok()
    }

    /// Dead-key symbols available on this layout
    pub fn dead_key_symbols(&self) -> Vec<char> {
        let mut symbols: Vec<char> = self.dead_keys.keys().copied().collect();
        symbols.sort_unstable();
        symbols
    }

    /// Every character this layout can type, directly or by composition
    pub fn characters(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.base.keys().copied().collect();
        chars.extend(
            deadkeys::COMPOSITIONS
                .iter()
                .map(|c| c.composed)
                .filter(|c| !self.base.contains_key(c) && self.supports(*c)),
        );
        chars.sort_unstable();
        chars
    }

    fn unsupported(&self, ch: char) -> LayoutError {
        LayoutError::CharNotSupported {
            ch,
            layout: self.name.to_string(),
        }
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout")
            .field("name", &self.name)
            .field("direct", &self.base.len())
            .field("dead_keys", &self.dead_key_symbols())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keycodes::*;

    const TABLE_A: KeyTable = &[('x', KeyMapping::plain(KEY_X)), ('y', KeyMapping::plain(KEY_Y))];
    const TABLE_B: KeyTable = &[('y', KeyMapping::shift(KEY_Z))];

    #[test]
    fn test_merge_later_wins() {
        let merged = merge_tables(&[TABLE_A, TABLE_B]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[&'x'], KeyMapping::plain(KEY_X));
        assert_eq!(merged[&'y'], KeyMapping::shift(KEY_Z));

        let reversed = merge_tables(&[TABLE_B, TABLE_A]);
        assert_eq!(reversed[&'y'], KeyMapping::plain(KEY_Y));
    }

    #[test]
    fn test_unsupported_error_message() {
        let err = LayoutError::CharNotSupported {
            ch: 'é',
            layout: "us".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "character 'é' (U+00E9) not supported in us layout"
        );
    }

    #[test]
    fn test_not_found_lists_available() {
        let err = LayoutError::NotFound {
            name: "xx".to_string(),
            available: vec!["de".to_string(), "us".to_string()],
        };
        assert_eq!(err.to_string(), "layout \"xx\" not found (available: de, us)");
    }

    #[test]
    fn test_composition_needs_dead_key_and_base() {
        const DEAD: KeyTable = &[('^', KeyMapping::plain(KEY_LEFTBRACE))];
        const LETTERS: KeyTable = &[('o', KeyMapping::plain(KEY_O))];

        let layout = Layout::new("test", &[LETTERS], DEAD);
        let seq = layout.resolve_char('ô').unwrap();
        assert_eq!(
            seq.as_slice(),
            &[KeyMapping::plain(KEY_LEFTBRACE), KeyMapping::plain(KEY_O)]
        );

        // Dead key present, base missing
        assert!(layout.resolve_char('â').is_err());
        // Base present, dead key missing
        assert!(layout.resolve_char('ö').is_err());
    }

    #[test]
    fn test_resolution_invariants_every_layout() {
        let mut composed = 0;
        for (name, layout) in registry::builtin_layouts() {
            let candidates: Vec<char> = layout
                .characters()
                .into_iter()
                .chain(deadkeys::COMPOSITIONS.iter().map(|c| c.composed))
                .collect();

            for ch in candidates {
                let Ok(seq) = layout.resolve_char(ch) else {
                    continue;
                };
                assert_eq!(layout.resolve_char(ch).unwrap(), seq, "{} {:?}", name, ch);

                for mapping in &seq {
                    assert!(
                        !mapping.modifiers.intersects(Modifiers::CTRL | Modifiers::ALT),
                        "{} {:?} uses {:?}",
                        name,
                        ch,
                        mapping.modifiers
                    );
                }

                match layout.base.get(&ch) {
                    Some(&direct) => assert_eq!(seq.as_slice(), &[direct], "{} {:?}", name, ch),
                    None => {
                        let composition = deadkeys::lookup(ch).unwrap();
                        assert_eq!(seq.len(), 2, "{} {:?}", name, ch);
                        assert_eq!(seq.as_slice()[0], layout.dead_keys[&composition.dead_key]);
                        assert_eq!(seq.as_slice()[1], layout.base[&composition.base]);
                        composed += 1;
                    }
                }
            }

            for ch in layout.characters() {
                assert!(layout.supports(ch), "{} lists {:?}", name, ch);
            }
        }
        assert!(composed > 0);
    }
}
