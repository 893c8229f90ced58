//! String to MediaType resolution.
//!
//! Registry hits are returned as-is. Misses are memoized per lowercase key
//! so repeated lookups hand back the same `Arc`. The memo table is never
//! evicted.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::error::{MediaTypeError, Result};
use crate::models::{CustomType, MediaType};
use crate::registry;

/// Resolver with its own custom-type cache.
///
/// Most callers use the process-wide instance through [`parse`].
#[derive(Debug, Default)]
pub struct Resolver {
    /// Keyed by the lowercased input. The value keeps the casing of
    /// whichever input populated the slot first.
    custom: RwLock<HashMap<String, Arc<CustomType>>>,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `name`, ASCII case-insensitively. Never fails.
    pub fn parse(&self, name: &str) -> MediaType {
        let lower = name.to_ascii_lowercase();

        if let Some(known) = registry::lookup(&lower) {
            log::trace!("mediatypes: registry hit for {}", known.essence());
            return MediaType::Known(known);
        }

        if let Some(custom) = self.custom.read().get(&lower) {
            return MediaType::Custom(Arc::clone(custom));
        }

        // Another thread may have inserted between the two locks; the
        // entry API keeps whichever got there first.
        let mut cache = self.custom.write();
        let custom = cache.entry(lower).or_insert_with_key(|key| {
            log::debug!("mediatypes: caching custom type {:?} under {:?}", name, key);
            Arc::new(CustomType::new(name))
        });
        MediaType::Custom(Arc::clone(custom))
    }

    /// Like [`Resolver::parse`] but rejects empty or blank input.
    pub fn try_parse(&self, name: &str) -> Result<MediaType> {
        if name.trim().is_empty() {
            return Err(MediaTypeError::Empty);
        }
        Ok(self.parse(name))
    }

    /// Number of memoized custom types.
    pub fn cached_len(&self) -> usize {
        self.custom.read().len()
    }
}

static GLOBAL: Lazy<Resolver> = Lazy::new(Resolver::new);

/// The process-wide resolver.
pub fn global() -> &'static Resolver {
    &GLOBAL
}

/// Resolve `name` with the process-wide resolver.
pub fn parse(name: &str) -> MediaType {
    GLOBAL.parse(name)
}

pub fn try_parse(name: &str) -> Result<MediaType> {
    GLOBAL.try_parse(name)
}

/// Registry entry claiming `ext`. Extensions never produce custom types.
pub fn from_extension(ext: &str) -> Option<MediaType> {
    registry::by_extension(ext).map(MediaType::Known)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn known_types_skip_the_cache() {
        let resolver = Resolver::new();
        let json = resolver.parse("Application/JSON");
        assert!(json.is_known());
        assert_eq!(resolver.cached_len(), 0);
    }

    #[test]
    fn misses_are_memoized_once_per_lowercase_key() {
        let resolver = Resolver::new();
        let first = resolver.parse("Foo/Bar");
        let second = resolver.parse("foo/bar");
        let third = resolver.parse("FOO/BAR");

        assert!(first.ptr_eq(&second));
        assert!(first.ptr_eq(&third));
        assert_eq!(resolver.cached_len(), 1);
        // First casing wins.
        assert_eq!(third.full_name(), "Foo/Bar");
        assert_eq!(third.name(), "Bar");
    }

    #[test]
    fn instances_do_not_share_caches() {
        let a = Resolver::new();
        let b = Resolver::new();
        let from_a = a.parse("Foo/Bar");
        let from_b = b.parse("foo/bar");
        assert!(!from_a.ptr_eq(&from_b));
        assert_eq!(from_b.full_name(), "foo/bar");
    }

    #[test]
    fn only_ascii_letters_fold() {
        let resolver = Resolver::new();
        // U+212A KELVIN SIGN lowercases to 'k' under Unicode rules.
        let kelvin = resolver.parse("text/mar\u{212A}down");
        assert!(!kelvin.is_known());
        assert_eq!(kelvin.full_name(), "text/mar\u{212A}down");
        assert_eq!(kelvin.category(), Category::Text);
        assert_eq!(resolver.cached_len(), 1);

        assert!(resolver.parse("TEXT/MARKDOWN").is_known());
    }

    #[test]
    fn empty_input_resolves_but_try_parse_rejects_it() {
        let resolver = Resolver::new();
        let empty = resolver.parse("");
        assert_eq!(empty.name(), "");
        assert_eq!(empty.category(), Category::Unknown);

        assert_eq!(resolver.try_parse("").unwrap_err(), MediaTypeError::Empty);
        assert_eq!(resolver.try_parse("  \t").unwrap_err(), MediaTypeError::Empty);
        assert!(resolver.try_parse("text/plain").unwrap().is_known());
    }

    #[test]
    fn concurrent_misses_converge_on_one_instance() {
        let resolver = Arc::new(Resolver::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let resolver = Arc::clone(&resolver);
                std::thread::spawn(move || {
                    let input = if i % 2 == 0 { "Race/Type" } else { "race/type" };
                    resolver.parse(input)
                })
            })
            .collect();

        let results: Vec<MediaType> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.iter().all(|r| r.ptr_eq(&results[0])));
        assert_eq!(resolver.cached_len(), 1);
    }

    #[test]
    fn from_extension_only_returns_known_types() {
        let png = from_extension("PNG").unwrap();
        assert!(png.is_known());
        assert_eq!(png.full_name(), "image/png");
        assert!(from_extension("nope-not-real").is_none());
    }
}
