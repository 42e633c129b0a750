//! Dead-key compositions
//!
//! Accent + base character combinations are the same on every layout;
//! only where the accent key sits differs. Layouts carry that location,
//! this table carries the combinations.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Dead-key symbol struck before a base character to produce `composed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadKeyComposition {
    /// Accent key symbol ('^', '´', '`', '¨', '~')
    pub dead_key: char,
    /// Character struck after the dead key
    pub base: char,
    /// Resulting accented character
    pub composed: char,
}

const fn comp(dead_key: char, base: char, composed: char) -> DeadKeyComposition {
    DeadKeyComposition {
        dead_key,
        base,
        composed,
    }
}

/// Circumflex dead key
pub const CIRCUMFLEX: char = '^';
/// Acute dead key
pub const ACUTE: char = '´';
/// Grave dead key
pub const GRAVE: char = '`';
/// Diaeresis dead key
pub const DIAERESIS: char = '¨';
/// Tilde dead key
pub const TILDE: char = '~';

/// Every supported composition. Composed characters must be unique.
pub const COMPOSITIONS: &[DeadKeyComposition] = &[
    // Circumflex
    comp(CIRCUMFLEX, 'a', 'â'),
    comp(CIRCUMFLEX, 'e', 'ê'),
    comp(CIRCUMFLEX, 'i', 'î'),
    comp(CIRCUMFLEX, 'o', 'ô'),
    comp(CIRCUMFLEX, 'u', 'û'),
    comp(CIRCUMFLEX, 'A', 'Â'),
    comp(CIRCUMFLEX, 'E', 'Ê'),
    comp(CIRCUMFLEX, 'I', 'Î'),
    comp(CIRCUMFLEX, 'O', 'Ô'),
    comp(CIRCUMFLEX, 'U', 'Û'),
    // Acute
    comp(ACUTE, 'a', 'á'),
    comp(ACUTE, 'e', 'é'),
    comp(ACUTE, 'i', 'í'),
    comp(ACUTE, 'o', 'ó'),
    comp(ACUTE, 'u', 'ú'),
    comp(ACUTE, 'y', 'ý'),
    comp(ACUTE, 'A', 'Á'),
    comp(ACUTE, 'E', 'É'),
    comp(ACUTE, 'I', 'Í'),
    comp(ACUTE, 'O', 'Ó'),
    comp(ACUTE, 'U', 'Ú'),
    comp(ACUTE, 'Y', 'Ý'),
    // Grave
    comp(GRAVE, 'a', 'à'),
    comp(GRAVE, 'e', 'è'),
    comp(GRAVE, 'i', 'ì'),
    comp(GRAVE, 'o', 'ò'),
    comp(GRAVE, 'u', 'ù'),
    comp(GRAVE, 'A', 'À'),
    comp(GRAVE, 'E', 'È'),
    comp(GRAVE, 'I', 'Ì'),
    comp(GRAVE, 'O', 'Ò'),
    comp(GRAVE, 'U', 'Ù'),
    // Diaeresis
    comp(DIAERESIS, 'a', 'ä'),
    comp(DIAERESIS, 'e', 'ë'),
    comp(DIAERESIS, 'i', 'ï'),
    comp(DIAERESIS, 'o', 'ö'),
    comp(DIAERESIS, 'u', 'ü'),
    comp(DIAERESIS, 'y', 'ÿ'),
    comp(DIAERESIS, 'A', 'Ä'),
    comp(DIAERESIS, 'E', 'Ë'),
    comp(DIAERESIS, 'I', 'Ï'),
    comp(DIAERESIS, 'O', 'Ö'),
    comp(DIAERESIS, 'U', 'Ü'),
    comp(DIAERESIS, 'Y', 'Ÿ'),
    // Tilde
    comp(TILDE, 'a', 'ã'),
    comp(TILDE, 'n', 'ñ'),
    comp(TILDE, 'o', 'õ'),
    comp(TILDE, 'A', 'Ã'),
    comp(TILDE, 'N', 'Ñ'),
    comp(TILDE, 'O', 'Õ'),
];

/// Build the composed-character -> composition index
pub fn build_registry() -> HashMap<char, DeadKeyComposition> {
    COMPOSITIONS.iter().map(|c| (c.composed, *c)).collect()
}

/// Which dead key + base character produces `composed`?
pub fn lookup(composed: char) -> Option<&'static DeadKeyComposition> {
    static REGISTRY: OnceLock<HashMap<char, DeadKeyComposition>> = OnceLock::new();
    REGISTRY.get_or_init(build_registry).get(&composed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composed_characters_unique() {
        assert_eq!(build_registry().len(), COMPOSITIONS.len());
    }

    #[test]
    fn test_lookup() {
        let c = lookup('ô').unwrap();
        assert_eq!(c.dead_key, CIRCUMFLEX);
        assert_eq!(c.base, 'o');

        let c = lookup('Ñ').unwrap();
        assert_eq!(c.dead_key, TILDE);
        assert_eq!(c.base, 'N');

        assert!(lookup('o').is_none());
        assert!(lookup('ç').is_none());
    }

    #[test]
    fn test_upper_and_lower_case_covered() {
        for c in COMPOSITIONS.iter().filter(|c| c.base.is_lowercase()) {
            let upper = c.composed.to_uppercase().next().unwrap();
            let found = lookup(upper).unwrap();
            assert_eq!(found.dead_key, c.dead_key, "{}", upper);
        }
    }
}
