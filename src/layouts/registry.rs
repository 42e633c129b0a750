//! Layout registry
//!
//! Name -> layout lookup. Built-in layouts are constructed once per
//! process and shared; the registry only holds handles.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use super::{de, es, fr, it, uk, us, Layout, LayoutError};
use super::{NAME_DE, NAME_ES, NAME_FR, NAME_IT, NAME_UK, NAME_US};

/// Layout used when a request does not name one
pub const DEFAULT_LAYOUT: &str = NAME_US;

macro_rules! builtin {
    ($fn_name:ident, $module:ident) => {
        fn $fn_name() -> Arc<Layout> {
            static LAYOUT: OnceLock<Arc<Layout>> = OnceLock::new();
            LAYOUT.get_or_init(|| Arc::new($module::build())).clone()
        }
    };
}

builtin!(builtin_us, us);
builtin!(builtin_uk, uk);
builtin!(builtin_fr, fr);
builtin!(builtin_de, de);
builtin!(builtin_es, es);
builtin!(builtin_it, it);

/// Every built-in layout, by name
pub fn builtin_layouts() -> [(&'static str, Arc<Layout>); 6] {
    [
        (NAME_US, builtin_us()),
        (NAME_UK, builtin_uk()),
        (NAME_FR, builtin_fr()),
        (NAME_DE, builtin_de()),
        (NAME_ES, builtin_es()),
        (NAME_IT, builtin_it()),
    ]
}

/// Thread-safe name -> layout map
///
/// Names are case-sensitive ("us", not "US").
pub struct Registry {
    layouts: RwLock<HashMap<String, Arc<Layout>>>,
}

impl Registry {
    /// Registry preloaded with all built-in layouts
    pub fn new() -> Self {
        let registry = Self::empty();
        for (_, layout) in builtin_layouts() {
            registry.register(layout);
        }
        registry
    }

    /// Registry with no layouts
    pub fn empty() -> Self {
        Self {
            layouts: RwLock::new(HashMap::new()),
        }
    }

    /// Add or replace a layout under its own name
    pub fn register(&self, layout: Arc<Layout>) {
        let name = layout.name().to_string();
        let mut layouts = self.layouts.write().unwrap_or_else(|e| e.into_inner());
        if layouts.insert(name.clone(), layout).is_some() {
            log::debug!("Replaced layout {}", name);
        }
    }

    /// Look up a layout by exact name
    pub fn get(&self, name: &str) -> Result<Arc<Layout>, LayoutError> {
        let layouts = self.layouts.read().unwrap_or_else(|e| e.into_inner());
        match layouts.get(name) {
            Some(layout) => Ok(Arc::clone(layout)),
            None => Err(LayoutError::NotFound {
                name: name.to_string(),
                available: sorted_names(&layouts),
            }),
        }
    }

    /// Registered layout names, sorted
    pub fn available(&self) -> Vec<String> {
        let layouts = self.layouts.read().unwrap_or_else(|e| e.into_inner());
        sorted_names(&layouts)
    }

    pub fn contains(&self, name: &str) -> bool {
        let layouts = self.layouts.read().unwrap_or_else(|e| e.into_inner());
        layouts.contains_key(name)
    }

    /// The US layout
    pub fn default_layout(&self) -> Result<Arc<Layout>, LayoutError> {
        self.get(DEFAULT_LAYOUT)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted_names(layouts: &HashMap<String, Arc<Layout>>) -> Vec<String> {
    let mut names: Vec<String> = layouts.keys().cloned().collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::{KeyMapping, KeyTable};
    use crate::input::keycodes::*;

    #[test]
    fn test_available_sorted() {
        let registry = Registry::new();
        assert_eq!(registry.available(), vec!["de", "es", "fr", "it", "uk", "us"]);
    }

    #[test]
    fn test_get_and_default() {
        let registry = Registry::new();
        assert_eq!(registry.get("fr").unwrap().name(), "fr");
        assert_eq!(registry.default_layout().unwrap().name(), "us");
    }

    #[test]
    fn test_names_case_sensitive() {
        let registry = Registry::new();
        assert!(registry.get("US").is_err());
        assert!(!registry.contains("Fr"));
    }

    #[test]
    fn test_not_found_message() {
        let registry = Registry::new();
        let err = registry.get("xx").unwrap_err();
        assert_eq!(
            err.to_string(),
            "layout \"xx\" not found (available: de, es, fr, it, uk, us)"
        );
    }

    #[test]
    fn test_builtins_shared() {
        let a = Registry::new();
        let b = Registry::new();
        assert!(Arc::ptr_eq(&a.get("de").unwrap(), &b.get("de").unwrap()));
    }

    #[test]
    fn test_register_custom() {
        const DIGITS: KeyTable = &[('1', KeyMapping::plain(KEY_1))];

        let registry = Registry::empty();
        assert!(registry.available().is_empty());
        registry.register(Arc::new(Layout::new("numpad", &[DIGITS], &[])));
        assert_eq!(registry.available(), vec!["numpad"]);
        assert!(registry.get("numpad").unwrap().supports('1'));
        assert!(registry.default_layout().is_err());
    }

    #[test]
    fn test_every_layout_types_ascii_letters_and_space() {
        let registry = Registry::new();
        for name in registry.available() {
            let layout = registry.get(&name).unwrap();
            for ch in ('a'..='z').chain('A'..='Z').chain('0'..='9').chain([' ', '\n', '\t']) {
                assert!(layout.supports(ch), "{} missing {:?}", name, ch);
            }
        }
    }

    #[test]
    fn test_compositions_use_layout_base_keys() {
        let registry = Registry::new();
        let cases = [
            ("fr", 'â', [KeyMapping::plain(KEY_LEFTBRACE), KeyMapping::plain(KEY_Q)]),
            ("de", 'á', [KeyMapping::plain(KEY_EQUAL), KeyMapping::plain(KEY_A)]),
            ("es", 'à', [KeyMapping::plain(KEY_LEFTBRACE), KeyMapping::plain(KEY_A)]),
            ("it", 'ô', [KeyMapping::shift(KEY_EQUAL), KeyMapping::plain(KEY_O)]),
        ];
        for (name, ch, expected) in cases {
            let seq = registry.get(name).unwrap().resolve_char(ch).unwrap();
            assert_eq!(seq.as_slice(), &expected, "{} {:?}", name, ch);
        }
    }
}
