//! Top-level media type categories.
//!
//! A closed string enum: the IANA top-level types, plus a sentinel for
//! custom types whose prefix is missing or not one of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MediaTypeError;

/// The part of a media type before the `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Application,
    Audio,
    Example,
    Font,
    Haptics,
    Image,
    Message,
    Model,
    Multipart,
    Text,
    Video,
    /// Custom types only. Never attached to a registry entry.
    #[serde(rename = "")]
    Unknown,
}

impl Category {
    /// Every real category, alphabetical. `Unknown` is not included.
    pub const ALL: [Category; 11] = [
        Category::Application,
        Category::Audio,
        Category::Example,
        Category::Font,
        Category::Haptics,
        Category::Image,
        Category::Message,
        Category::Model,
        Category::Multipart,
        Category::Text,
        Category::Video,
    ];

    /// Canonical lowercase name. Empty for `Unknown`.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Application => "application",
            Category::Audio => "audio",
            Category::Example => "example",
            Category::Font => "font",
            Category::Haptics => "haptics",
            Category::Image => "image",
            Category::Message => "message",
            Category::Model => "model",
            Category::Multipart => "multipart",
            Category::Text => "text",
            Category::Video => "video",
            Category::Unknown => "",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Category> {
        Self::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(name))
    }

    pub fn is_unknown(self) -> bool {
        self == Category::Unknown
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = MediaTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| MediaTypeError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_lowercase_and_sorted() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.iter().all(|n| *n == n.to_lowercase()));
    }

    #[test]
    fn from_name_ignores_case() {
        assert_eq!(Category::from_name("application"), Some(Category::Application));
        assert_eq!(Category::from_name("VIDEO"), Some(Category::Video));
        assert_eq!(Category::from_name("MultiPart"), Some(Category::Multipart));
    }

    #[test]
    fn from_name_rejects_unknown_and_empty() {
        assert_eq!(Category::from_name("chemical"), None);
        assert_eq!(Category::from_name(""), None);
    }

    #[test]
    fn from_str_reports_the_bad_name() {
        let err = "chemical".parse::<Category>().unwrap_err();
        assert_eq!(err, MediaTypeError::UnknownCategory("chemical".into()));
        assert_eq!("Text".parse::<Category>(), Ok(Category::Text));
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Category::Font.to_string(), "font");
        assert_eq!(Category::Unknown.to_string(), "");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_value(Category::Image).unwrap(), "image");
        assert_eq!(serde_json::to_value(Category::Unknown).unwrap(), "");
        let parsed: Category = serde_json::from_str("\"model\"").unwrap();
        assert_eq!(parsed, Category::Model);
    }
}
