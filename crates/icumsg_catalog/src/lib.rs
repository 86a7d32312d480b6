use std::path::Path;

pub use crate::entry::{message_id, CatalogEntry, MessageId, SourcePosition};
pub use crate::error::CatalogError;
pub use crate::parser::parse_catalog;

mod entry;
mod error;
mod parser;
mod unescape;

/// Returns true if the given `file_name` is considered a translation
/// catalog, following the `<locale>.messages.json` naming convention.
pub fn is_catalog_file(file_name: &str) -> bool {
    file_name.ends_with(".messages.json")
}

/// Extract the locale component from a catalog file name, like `ru` out of
/// `strings/ru.messages.json`. Falls back to `en-US` when the name yields no
/// usable component at all.
pub fn locale_from_file_name(file_name: &str) -> &str {
    Path::new(file_name)
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.split_once('.').map_or(name, |(locale, _ext)| locale))
        .unwrap_or("en-US")
}

#[test]
fn test_locale_from_file_name() {
    assert_eq!("en-US", locale_from_file_name("foo/bar/baz/en-US.messages.json"));
    assert_eq!("fr-FR", locale_from_file_name("foo/bar/baz/fr-FR.messages.json"));
    assert_eq!("da", locale_from_file_name("da.messages.json"));
    assert_eq!("cz", locale_from_file_name("foo/bar/cz"));
}

#[test]
fn test_is_catalog_file() {
    assert!(is_catalog_file("en-US.messages.json"));
    assert!(is_catalog_file("strings/zh-CN.messages.json"));
    assert!(!is_catalog_file("en-US.messages.jsona"));
    assert!(!is_catalog_file("messages.rs"));
    assert!(!is_catalog_file("notes.json"));
}
