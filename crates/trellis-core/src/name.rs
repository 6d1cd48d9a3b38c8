//! Sanitizers for deriving code identifiers from free-text design labels.
//!
//! Designer-supplied names ("Hero / Title!", "Submit Button") are arbitrary
//! text. Everything emitted into generated source goes through one of these
//! helpers first.

use convert_case::{Case, Casing};
use once_cell::sync::Lazy;
use regex::Regex;

static WORDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9]+").expect("valid pattern"));
static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("valid pattern"));

fn words(raw: &str) -> Option<String> {
    let joined = WORDS
        .find_iter(raw)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// Derive a camelCase identifier, or `None` when no usable characters remain.
///
/// A leading digit is guarded with an underscore so the result is always a
/// valid identifier in the target language.
pub fn identifier(raw: &str) -> Option<String> {
    let ident = words(raw)?.to_case(Case::Camel);
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        Some(format!("_{ident}"))
    } else {
        Some(ident)
    }
}

/// Derive a PascalCase component name, or `None` when nothing usable remains.
pub fn component_name(raw: &str) -> Option<String> {
    let name = words(raw)?.to_case(Case::Pascal);
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        Some(format!("Component{name}"))
    } else {
        Some(name)
    }
}

/// Derive a lowercase kebab slug for class names and filenames.
pub fn slug(raw: &str) -> Option<String> {
    Some(words(raw)?.to_case(Case::Kebab))
}

/// Derive a stable DOM id from a node id by replacing every run of
/// non-alphanumeric characters with a dash.
pub fn dom_id(raw: &str) -> String {
    NON_ALNUM.replace_all(raw, "-").into_owned()
}
