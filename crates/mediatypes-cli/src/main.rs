//! mediatypes CLI: look up IANA media types.
//!
//! Commands:
//!   mediatypes parse <type> [type...]   Resolve media types
//!   mediatypes ext <extension>          Look up by file extension
//!   mediatypes list [category]          List registry entries
//!   mediatypes categories               List categories with entry counts
//!
//! Output is plain text unless `--json` is passed or `MEDIATYPES_FORMAT=json`.

use std::process;

use mediatypes_core::{registry, Category, MediaType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

impl Format {
    /// `MEDIATYPES_FORMAT` default, overridden by `--json`.
    fn resolve(json_flag: bool) -> Format {
        if json_flag {
            return Format::Json;
        }
        let value = std::env::var("MEDIATYPES_FORMAT").ok();
        Format::from_env(value.as_deref())
    }

    /// Interpret a `MEDIATYPES_FORMAT` value. Unset, empty or unrecognised
    /// values fall back to text.
    fn from_env(value: Option<&str>) -> Format {
        match value {
            Some(v) if v.eq_ignore_ascii_case("json") => Format::Json,
            Some(v) if v.eq_ignore_ascii_case("text") || v.is_empty() => Format::Text,
            Some(v) => {
                log::warn!("mediatypes: unknown MEDIATYPES_FORMAT {:?}, using text", v);
                Format::Text
            }
            None => Format::Text,
        }
    }
}

fn main() {
    env_logger::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json_flag = args.iter().any(|a| a == "--json");
    args.retain(|a| a != "--json");
    let format = Format::resolve(json_flag);

    if args.is_empty() {
        print_usage();
        return;
    }

    let ok = match args[0].as_str() {
        "parse" => cmd_parse(&args[1..], format),
        "ext" => cmd_ext(&args[1..], format),
        "list" => cmd_list(&args[1..], format),
        "categories" => cmd_categories(format),
        "help" | "--help" | "-h" => {
            print_usage();
            true
        }
        other => {
            eprintln!("unknown command: {}", other);
            print_usage();
            false
        }
    };

    if !ok {
        process::exit(1);
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_parse(args: &[String], format: Format) -> bool {
    if args.is_empty() {
        eprintln!("usage: mediatypes parse <type> [type...]");
        return false;
    }
    let mut ok = true;
    let mut resolved = Vec::new();
    for arg in args {
        match mediatypes_core::try_parse(arg) {
            Ok(media_type) => resolved.push(media_type),
            Err(e) => {
                eprintln!("{:?}: {}", arg, e);
                ok = false;
            }
        }
    }
    match format {
        Format::Json => {
            let values: Vec<serde_json::Value> =
                resolved.iter().map(MediaType::to_value).collect();
            print_json(&values);
        }
        Format::Text => {
            for media_type in &resolved {
                print_media_type(media_type);
            }
        }
    }
    ok
}

fn cmd_ext(args: &[String], format: Format) -> bool {
    if args.is_empty() {
        eprintln!("usage: mediatypes ext <extension>");
        return false;
    }
    match mediatypes_core::from_extension(&args[0]) {
        Some(media_type) => {
            match format {
                Format::Json => print_json(&media_type.to_value()),
                Format::Text => print_media_type(&media_type),
            }
            true
        }
        None => {
            eprintln!("no registered type for extension: {}", args[0]);
            false
        }
    }
}

fn cmd_list(args: &[String], format: Format) -> bool {
    let entries: Vec<_> = match args.first() {
        Some(name) => match name.parse::<Category>() {
            Ok(category) => registry::by_category(category).collect(),
            Err(e) => {
                eprintln!("{}", e);
                return false;
            }
        },
        None => registry::all().iter().collect(),
    };
    match format {
        Format::Json => print_json(&entries),
        Format::Text => {
            for entry in &entries {
                println!("{}", entry.full_name());
            }
        }
    }
    true
}

fn cmd_categories(format: Format) -> bool {
    let counts: Vec<(Category, usize)> = Category::ALL
        .iter()
        .map(|c| (*c, registry::by_category(*c).count()))
        .collect();
    match format {
        Format::Json => {
            let map: serde_json::Map<String, serde_json::Value> = counts
                .iter()
                .map(|(c, n)| (c.name().to_string(), serde_json::Value::from(*n)))
                .collect();
            print_json(&map);
        }
        Format::Text => {
            for (category, count) in &counts {
                println!("{:<12} {}", category.name(), count);
            }
        }
    }
    true
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn print_media_type(media_type: &MediaType) {
    let category = match media_type.category_name() {
        "" => "-",
        name => name,
    };
    println!("{}", media_type.full_name());
    println!("  name:       {}", media_type.name());
    println!("  category:   {}", category);
    println!("  registered: {}", if media_type.is_known() { "yes" } else { "no" });
    if !media_type.extensions().is_empty() {
        println!("  extensions: {}", media_type.extensions().join(", "));
    }
    if let Some(url) = media_type.template_url() {
        println!("  template:   {}", url);
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn print_usage() {
    println!("mediatypes - IANA media type lookup");
    println!();
    println!("usage: mediatypes [--json] <command> [args]");
    println!();
    println!("commands:");
    println!("  parse <type> [type...]   Resolve media types");
    println!("  ext <extension>          Look up by file extension");
    println!("  list [category]          List registry entries");
    println!("  categories               List categories with entry counts");
    println!();
    println!("environment:");
    println!("  MEDIATYPES_FORMAT        text (default) or json");
    println!("  RUST_LOG                 log level, e.g. debug");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_flag_wins_over_environment() {
        assert_eq!(Format::resolve(true), Format::Json);
    }

    #[test]
    fn env_format_json() {
        assert_eq!(Format::from_env(Some("json")), Format::Json);
        assert_eq!(Format::from_env(Some("JSON")), Format::Json);
    }

    #[test]
    fn env_format_defaults_to_text() {
        assert_eq!(Format::from_env(None), Format::Text);
        assert_eq!(Format::from_env(Some("")), Format::Text);
        assert_eq!(Format::from_env(Some("Text")), Format::Text);
    }

    #[test]
    fn env_format_unknown_value_falls_back_to_text() {
        assert_eq!(Format::from_env(Some("yaml")), Format::Text);
    }

    #[test]
    fn json_output_paths_succeed() {
        let args = vec!["application/json".to_string(), "x/made-up".to_string()];
        assert!(cmd_parse(&args, Format::Json));
        assert!(cmd_ext(&["svg".to_string()], Format::Json));
    }

    #[test]
    fn list_rejects_unknown_category() {
        assert!(!cmd_list(&["chemical".to_string()], Format::Text));
        assert!(cmd_list(&["font".to_string()], Format::Json));
    }

    #[test]
    fn parse_reports_blank_input() {
        assert!(!cmd_parse(&[String::new()], Format::Text));
        assert!(cmd_parse(&["text/plain".to_string()], Format::Text));
    }

    #[test]
    fn ext_requires_a_registered_extension() {
        assert!(cmd_ext(&["png".to_string()], Format::Text));
        assert!(!cmd_ext(&["zzz-unknown".to_string()], Format::Text));
        assert!(!cmd_ext(&[], Format::Text));
    }
}
