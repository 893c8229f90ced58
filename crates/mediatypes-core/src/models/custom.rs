//! Media types that are not in the registry.
//!
//! Best-effort split of the raw input, no validation.

use super::category::Category;

/// An unregistered media type. Echoes back whatever the caller passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomType {
    raw: String,
    /// Byte offset of the first `/`, if any.
    slash: Option<usize>,
    category: Category,
}

impl CustomType {
    /// Split `raw` on its first `/`.
    ///
    /// Without a `/` the whole string is the name and the category label
    /// is empty.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let slash = raw.find('/');
        let category = slash
            .and_then(|index| Category::from_name(&raw[..index]))
            .unwrap_or(Category::Unknown);
        Self {
            raw,
            slash,
            category,
        }
    }

    /// The input exactly as given.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Text after the first `/`, or the whole input.
    pub fn name(&self) -> &str {
        match self.slash {
            Some(index) => &self.raw[index + 1..],
            None => &self.raw,
        }
    }

    /// Text before the first `/`, as written. Empty without a `/`.
    pub fn category_name(&self) -> &str {
        match self.slash {
            Some(index) => &self.raw[..index],
            None => "",
        }
    }

    /// The known category matching the label, or `Unknown`.
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn full_name(&self) -> &str {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_slash() {
        let custom = CustomType::new("application/x-totally-made-up");
        assert_eq!(custom.category_name(), "application");
        assert_eq!(custom.category(), Category::Application);
        assert_eq!(custom.name(), "x-totally-made-up");
        assert_eq!(custom.full_name(), "application/x-totally-made-up");
    }

    #[test]
    fn only_the_first_slash_splits() {
        let custom = CustomType::new("text/a/b");
        assert_eq!(custom.category_name(), "text");
        assert_eq!(custom.name(), "a/b");
    }

    #[test]
    fn no_slash_means_whole_name_and_unknown_category() {
        let custom = CustomType::new("nonsensestring");
        assert_eq!(custom.name(), "nonsensestring");
        assert_eq!(custom.category_name(), "");
        assert_eq!(custom.category(), Category::Unknown);
        assert_eq!(custom.full_name(), "nonsensestring");
    }

    #[test]
    fn unrecognised_label_is_kept_but_category_is_unknown() {
        let custom = CustomType::new("Foo/Bar");
        assert_eq!(custom.category_name(), "Foo");
        assert_eq!(custom.category(), Category::Unknown);
        assert_eq!(custom.name(), "Bar");
    }

    #[test]
    fn label_matching_ignores_case() {
        let custom = CustomType::new("IMAGE/X-Thing");
        assert_eq!(custom.category(), Category::Image);
        assert_eq!(custom.category_name(), "IMAGE");
        assert_eq!(custom.name(), "X-Thing");
    }

    #[test]
    fn edge_slashes() {
        let leading = CustomType::new("/json");
        assert_eq!(leading.category_name(), "");
        assert_eq!(leading.name(), "json");
        assert_eq!(leading.category(), Category::Unknown);

        let trailing = CustomType::new("text/");
        assert_eq!(trailing.category(), Category::Text);
        assert_eq!(trailing.name(), "");

        let empty = CustomType::new("");
        assert_eq!(empty.name(), "");
        assert_eq!(empty.category(), Category::Unknown);
    }
}
