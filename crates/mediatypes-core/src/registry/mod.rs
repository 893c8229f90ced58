//! The fixed table of known media types.
//!
//! Pure functions over static data. Keys are stored lowercase and sorted,
//! so exact lookups are a binary search with no allocation.

mod table;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::models::category::Category;

use table::TYPES;

const IANA_TEMPLATE_BASE: &str = "https://www.iana.org/assignments/media-types";

/// One registry entry.
#[derive(Debug)]
pub struct KnownType {
    essence: &'static str,
    name: &'static str,
    category: Category,
    extensions: &'static [&'static str],
}

impl KnownType {
    pub(crate) const fn new(
        essence: &'static str,
        name: &'static str,
        category: Category,
        extensions: &'static [&'static str],
    ) -> Self {
        Self {
            essence,
            name,
            category,
            extensions,
        }
    }

    /// Canonical lowercase `category/subtype` key.
    pub fn essence(&self) -> &'static str {
        self.essence
    }

    /// Subtype as IANA spells it. May differ in case from the key.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// `category/name`, using the display name.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.category.name(), self.name)
    }

    /// Lowercase file extensions, most common first.
    pub fn extensions(&self) -> &'static [&'static str] {
        self.extensions
    }

    /// Link to the IANA registration template.
    pub fn template_url(&self) -> String {
        format!("{}/{}/{}", IANA_TEMPLATE_BASE, self.category.name(), self.name)
    }
}

impl Serialize for KnownType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("KnownType", 5)?;
        state.serialize_field("essence", self.essence)?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("category", &self.category)?;
        state.serialize_field("extensions", self.extensions)?;
        state.serialize_field("template_url", &self.template_url())?;
        state.end()
    }
}

/// Exact lookup by canonical lowercase key.
///
/// Callers normalise first; `"Text/Plain"` is not found here.
pub fn lookup(essence: &str) -> Option<&'static KnownType> {
    TYPES
        .binary_search_by(|entry| entry.essence.cmp(essence))
        .ok()
        .map(|index| &TYPES[index])
}

/// The whole table, sorted by key.
pub fn all() -> &'static [KnownType] {
    TYPES
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static KnownType> {
    TYPES.iter().filter(move |entry| entry.category == category)
}

static EXTENSIONS: Lazy<HashMap<&'static str, &'static KnownType>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for entry in TYPES {
        for ext in entry.extensions {
            // First claim in table order wins.
            index.entry(*ext).or_insert(entry);
        }
    }
    log::debug!("mediatypes: indexed {} extensions", index.len());
    index
});

/// Lookup by file extension. ASCII case-insensitive, leading dot optional.
pub fn by_extension(ext: &str) -> Option<&'static KnownType> {
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    if ext.is_empty() {
        return None;
    }
    EXTENSIONS.get(ext.to_ascii_lowercase().as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        for pair in TYPES.windows(2) {
            assert!(
                pair[0].essence < pair[1].essence,
                "{} must sort before {}",
                pair[0].essence,
                pair[1].essence
            );
        }
    }

    #[test]
    fn every_entry_is_consistent() {
        for entry in TYPES {
            assert_eq!(entry.essence, entry.essence.to_lowercase());
            assert!(!entry.name.is_empty(), "{} has no name", entry.essence);
            assert!(!entry.category.is_unknown(), "{} has no category", entry.essence);
            assert_eq!(entry.full_name().to_lowercase(), entry.essence);
            for ext in entry.extensions {
                assert_eq!(*ext, ext.to_lowercase());
                assert!(!ext.starts_with('.'));
            }
        }
    }

    #[test]
    fn table_covers_the_common_categories() {
        for category in [
            Category::Application,
            Category::Audio,
            Category::Font,
            Category::Image,
            Category::Message,
            Category::Model,
            Category::Multipart,
            Category::Text,
            Category::Video,
        ] {
            assert!(by_category(category).next().is_some(), "no {} entries", category);
        }
        assert!(all().len() > 1000);
    }

    #[test]
    fn lookup_hits_and_misses() {
        let json = lookup("application/json").unwrap();
        assert_eq!(json.name(), "json");
        assert_eq!(json.category(), Category::Application);
        assert_eq!(json.full_name(), "application/json");

        assert!(lookup("application/x-totally-made-up").is_none());
        assert!(lookup("APPLICATION/JSON").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn display_name_keeps_registry_case() {
        let gmop = lookup("application/vnd.3gpp.gmop+xml").unwrap();
        assert_eq!(gmop.name(), "vnd.3gpp.GMOP+xml");
        assert_eq!(gmop.full_name(), "application/vnd.3gpp.GMOP+xml");
        assert_eq!(gmop.essence(), "application/vnd.3gpp.gmop+xml");
    }

    #[test]
    fn template_url_points_at_iana() {
        let png = lookup("image/png").unwrap();
        assert_eq!(
            png.template_url(),
            "https://www.iana.org/assignments/media-types/image/png"
        );
    }

    #[test]
    fn by_extension_normalises_input() {
        assert_eq!(by_extension("json").unwrap().essence(), "application/json");
        assert_eq!(by_extension(".PNG").unwrap().essence(), "image/png");
        assert_eq!(by_extension("jpg").unwrap().essence(), "image/jpeg");
        assert_eq!(by_extension("html").unwrap().essence(), "text/html");
        assert!(by_extension("").is_none());
        assert!(by_extension("\u{212A}ml").is_none());
        assert!(by_extension(".").is_none());
        assert!(by_extension("definitely-not-an-ext").is_none());
    }

    #[test]
    fn by_category_filters() {
        assert!(by_category(Category::Font).all(|t| t.category() == Category::Font));
        assert!(by_category(Category::Unknown).next().is_none());
    }

    #[test]
    fn serializes_with_template_url() {
        let value = serde_json::to_value(lookup("text/plain").unwrap()).unwrap();
        assert_eq!(value["essence"], "text/plain");
        assert_eq!(value["name"], "plain");
        assert_eq!(value["category"], "text");
        assert_eq!(value["extensions"][0], "txt");
        assert_eq!(
            value["template_url"],
            "https://www.iana.org/assignments/media-types/text/plain"
        );
    }
}
