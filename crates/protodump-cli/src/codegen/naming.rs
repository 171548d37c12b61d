//! Naming convention utilities for code generation.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `snake_case` | [`to_camel_case`] | `camelCase` |
//! | `snake_case` | [`to_pascal_case`] | `PascalCase` |
//! | `PascalCase` | [`to_snake_case`] | `snake_case` |
//! | `field_name` | [`field_ident`] | `field_name` / `r#type` |
//!
//! [`to_camel_case`] is the rule the schema applies to field JSON names
//! ([`protodump_core::json_name`]), so oneof keys and field keys agree.

use protodump_core::ident::{KEYWORDS, RESERVED};
use protodump_core::json_name;

/// Convert snake_case to camelCase, the same way field JSON names are
/// derived.
///
/// Underscores are dropped. A lowercase ASCII letter directly after one or
/// more underscores is upper-cased; every other character passes through.
///
/// # Examples
///
/// ```
/// use protodump_cli::codegen::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("hello_world"), "helloWorld");
/// assert_eq!(to_camel_case("_foo"), "Foo");
/// assert_eq!(to_camel_case("foo__bar"), "fooBar");
/// ```
pub fn to_camel_case(s: &str) -> String {
    json_name(s)
}

/// Convert a string to PascalCase.
///
/// Handles snake_case and already-capitalized input.
///
/// # Examples
///
/// ```
/// use protodump_cli::codegen::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("ref_id"), "RefId");
/// assert_eq!(to_pascal_case("photo"), "Photo");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split('_').map(capitalize).collect()
}

/// Convert a PascalCase type name to snake_case.
///
/// A word boundary sits before an uppercase letter that follows a lowercase
/// letter or digit, and before the last capital of an acronym run.
///
/// # Examples
///
/// ```
/// use protodump_cli::codegen::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("Post"), "post");
/// assert_eq!(to_snake_case("PhotoAlbum"), "photo_album");
/// assert_eq!(to_snake_case("HTTPRequest"), "http_request");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_uppercase() {
            result.push(c);
            continue;
        }

        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();
        let boundary = match prev {
            Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
            Some(p) if p.is_ascii_uppercase() => next.is_some_and(|n| n.is_ascii_lowercase()),
            _ => false,
        };

        if boundary && !result.ends_with('_') {
            result.push('_');
        }
        result.push(c.to_ascii_lowercase());
    }

    result
}

/// Capitalize the first letter of a string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// The Rust identifier of a struct field with the given schema name.
///
/// # Examples
///
/// ```
/// use protodump_cli::codegen::naming::field_ident;
///
/// assert_eq!(field_ident("title"), "title");
/// assert_eq!(field_ident("type"), "r#type");
/// assert_eq!(field_ident("self"), "self_");
/// ```
pub fn field_ident(name: &str) -> String {
    if RESERVED.contains(&name) {
        format!("{name}_")
    } else if KEYWORDS.contains(&name) {
        format!("r#{name}")
    } else {
        name.to_string()
    }
}
