//! The resolved value handed back to callers.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;

use super::category::Category;
use super::custom::CustomType;
use crate::registry::KnownType;

/// Either a registry entry or a memoized custom type.
#[derive(Debug, Clone)]
pub enum MediaType {
    Known(&'static KnownType),
    Custom(Arc<CustomType>),
}

impl MediaType {
    /// Display name: the part after the `/`.
    pub fn name(&self) -> &str {
        match self {
            MediaType::Known(known) => known.name(),
            MediaType::Custom(custom) => custom.name(),
        }
    }

    /// `category/name` for known types, the raw input for custom ones.
    pub fn full_name(&self) -> Cow<'_, str> {
        match self {
            MediaType::Known(known) => Cow::Owned(known.full_name()),
            MediaType::Custom(custom) => Cow::Borrowed(custom.full_name()),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            MediaType::Known(known) => known.category(),
            MediaType::Custom(custom) => custom.category(),
        }
    }

    /// Category label as text. For custom types this is whatever preceded
    /// the `/`, even when it is not a known category.
    pub fn category_name(&self) -> &str {
        match self {
            MediaType::Known(known) => known.category().name(),
            MediaType::Custom(custom) => custom.category_name(),
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, MediaType::Known(_))
    }

    pub fn as_known(&self) -> Option<&'static KnownType> {
        match self {
            MediaType::Known(known) => Some(*known),
            MediaType::Custom(_) => None,
        }
    }

    /// File extensions. Always empty for custom types.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            MediaType::Known(known) => known.extensions(),
            MediaType::Custom(_) => &[],
        }
    }

    pub fn template_url(&self) -> Option<String> {
        self.as_known().map(KnownType::template_url)
    }

    /// Identity comparison: the same registry entry, or the same memoized
    /// custom instance.
    pub fn ptr_eq(&self, other: &MediaType) -> bool {
        match (self, other) {
            (MediaType::Known(a), MediaType::Known(b)) => std::ptr::eq(*a, *b),
            (MediaType::Custom(a), MediaType::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl PartialEq for MediaType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (MediaType::Known(a), MediaType::Known(b)) => a.essence() == b.essence(),
            (MediaType::Custom(a), MediaType::Custom(b)) => a.raw() == b.raw(),
            _ => false,
        }
    }
}

impl Eq for MediaType {}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

impl Serialize for MediaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MediaType", 6)?;
        state.serialize_field("full_name", &self.full_name())?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("category", self.category_name())?;
        state.serialize_field("known", &self.is_known())?;
        state.serialize_field("extensions", self.extensions())?;
        state.serialize_field("template_url", &self.template_url())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    fn known(essence: &str) -> MediaType {
        MediaType::Known(registry::lookup(essence).expect("registry entry"))
    }

    fn custom(raw: &str) -> MediaType {
        MediaType::Custom(Arc::new(CustomType::new(raw)))
    }

    #[test]
    fn known_accessors() {
        let json = known("application/json");
        assert_eq!(json.name(), "json");
        assert_eq!(json.full_name(), "application/json");
        assert_eq!(json.category(), Category::Application);
        assert_eq!(json.category_name(), "application");
        assert!(json.is_known());
        assert_eq!(json.extensions(), &["json"]);
        assert_eq!(
            json.template_url().as_deref(),
            Some("https://www.iana.org/assignments/media-types/application/json")
        );
    }

    #[test]
    fn custom_accessors() {
        let made_up = custom("Foo/Bar");
        assert_eq!(made_up.name(), "Bar");
        assert_eq!(made_up.full_name(), "Foo/Bar");
        assert_eq!(made_up.category(), Category::Unknown);
        assert_eq!(made_up.category_name(), "Foo");
        assert!(!made_up.is_known());
        assert!(made_up.extensions().is_empty());
        assert!(made_up.template_url().is_none());
        assert!(made_up.as_known().is_none());
    }

    #[test]
    fn equality_is_by_value_identity_by_pointer() {
        let a = custom("x/y");
        let b = custom("x/y");
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
        assert!(a.ptr_eq(&a.clone()));

        assert_eq!(known("text/plain"), known("text/plain"));
        assert!(known("text/plain").ptr_eq(&known("text/plain")));
        assert_ne!(known("text/plain"), custom("text/plain"));
    }

    #[test]
    fn display_writes_full_name() {
        assert_eq!(
            known("application/vnd.3gpp.gmop+xml").to_string(),
            "application/vnd.3gpp.GMOP+xml"
        );
        assert_eq!(custom("nonsensestring").to_string(), "nonsensestring");
    }

    #[test]
    fn to_value_shape() {
        let value = custom("application/x-thing").to_value();
        assert_eq!(value["full_name"], "application/x-thing");
        assert_eq!(value["name"], "x-thing");
        assert_eq!(value["category"], "application");
        assert_eq!(value["known"], false);
        assert!(value["extensions"].as_array().unwrap().is_empty());
        assert!(value["template_url"].is_null());

        let value = known("image/png").to_value();
        assert_eq!(value["known"], true);
        assert_eq!(value["extensions"][0], "png");
    }
}
