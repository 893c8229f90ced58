//! mediatypes-core: IANA media type registry.
//!
//! The registry is a literal table. Resolution is a lowercase lookup into
//! it, falling back to a memoized custom type that echoes the input.
//!
//! # Architecture
//!
//! ```text
//! parse(name) ──lowercase──▶ registry::lookup ──hit──▶ MediaType::Known
//!                                  │
//!                                 miss
//!                                  ▼
//!                          memo table (per key) ──▶ MediaType::Custom
//! ```

pub mod error;
pub mod models;
pub mod registry;
pub mod resolver;

pub use error::{MediaTypeError, Result};
pub use models::*;
pub use registry::KnownType;
pub use resolver::{from_extension, global, parse, try_parse, Resolver};

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------
    // Registry round trips
    // -------------------------------------------------------------------

    #[test]
    fn every_registry_key_resolves_to_itself() {
        for entry in registry::all() {
            let resolved = parse(entry.essence());
            assert!(resolved.is_known(), "{} did not resolve", entry.essence());
            let rebuilt = format!("{}/{}", resolved.category().name(), resolved.name());
            assert_eq!(rebuilt.to_lowercase(), entry.essence());
        }
    }

    #[test]
    fn every_registry_key_ignores_case() {
        for entry in registry::all() {
            let lower = parse(entry.essence());
            let upper = parse(&entry.essence().to_uppercase());
            let mixed = parse(&entry.full_name());
            assert!(lower.ptr_eq(&upper), "{} upper", entry.essence());
            assert!(lower.ptr_eq(&mixed), "{} mixed", entry.essence());
        }
    }

    // -------------------------------------------------------------------
    // Literal examples
    // -------------------------------------------------------------------

    #[test]
    fn application_json() {
        let json = parse("application/json");
        assert_eq!(json.name(), "json");
        assert_eq!(json.category().name(), "application");
        assert_eq!(json.full_name(), "application/json");

        let shouting = parse("APPLICATION/JSON");
        assert!(json.ptr_eq(&shouting));
        assert_eq!(shouting.full_name(), "application/json");
    }

    #[test]
    fn text_plain() {
        let plain = parse("text/plain");
        assert_eq!(plain.name(), "plain");
        assert_eq!(plain.category(), Category::Text);
    }

    #[test]
    fn display_name_differs_from_key() {
        let gmop = parse("application/vnd.3gpp.gmop+xml");
        assert!(gmop.is_known());
        assert_eq!(gmop.name(), "vnd.3gpp.GMOP+xml");
        assert_eq!(gmop.category(), Category::Application);
        assert_ne!(gmop.full_name(), "application/vnd.3gpp.gmop+xml");
    }

    #[test]
    fn unregistered_type_becomes_custom() {
        let made_up = parse("application/x-totally-made-up");
        assert!(!made_up.is_known());
        assert_eq!(made_up.category(), Category::Application);
        assert_eq!(made_up.category_name(), "application");
        assert_eq!(made_up.name(), "x-totally-made-up");
        assert_eq!(made_up.full_name(), "application/x-totally-made-up");
    }

    #[test]
    fn string_without_slash() {
        let nonsense = parse("nonsensestring");
        assert!(!nonsense.is_known());
        assert_eq!(nonsense.name(), "nonsensestring");
        assert_eq!(nonsense.category(), Category::Unknown);
        assert_eq!(nonsense.category().name(), "");
        assert_eq!(nonsense.full_name(), "nonsensestring");
    }

    // -------------------------------------------------------------------
    // Custom type memoization
    // -------------------------------------------------------------------

    #[test]
    fn custom_round_trip() {
        assert_eq!(parse("x/y").full_name(), "x/y");
    }

    #[test]
    fn custom_types_are_reference_stable() {
        let a = parse("vendor/stable-reference-check");
        let b = parse("vendor/stable-reference-check");
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn cache_collapses_case_variants() {
        // Keys unique to this test so the global cache order is known.
        let first = parse("Collapse/Check");
        let second = parse("collapse/check");
        assert!(first.ptr_eq(&second));
        assert_eq!(second.full_name(), "Collapse/Check");
        assert_eq!(second.category_name(), "Collapse");
    }

    #[test]
    fn global_resolver_is_shared() {
        let via_fn = parse("shared/global-check");
        let via_global = global().parse("SHARED/GLOBAL-CHECK");
        assert!(via_fn.ptr_eq(&via_global));
    }

    #[test]
    fn try_parse_errors() {
        assert_eq!(try_parse("").unwrap_err(), MediaTypeError::Empty);
        assert_eq!(
            try_parse("").unwrap_err().to_string(),
            "media type name is empty"
        );
        assert!(try_parse("image/png").unwrap().is_known());
    }

    #[test]
    fn extension_lookup() {
        assert_eq!(from_extension("json").unwrap().full_name(), "application/json");
        assert_eq!(from_extension(".jpg").unwrap().full_name(), "image/jpeg");
        assert_eq!(from_extension("MP3").unwrap().full_name(), "audio/mpeg");
        assert!(from_extension("zzz-unknown").is_none());
    }
}
