//! Rust identifier rules shared by schema linking, configuration and codegen.

/// Rust keywords that prost escapes as raw identifiers.
pub const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern", "false",
    "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
    "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where", "while",
    "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

/// Keywords that cannot be raw identifiers; prost appends an underscore.
pub const RESERVED: &[&str] = &["self", "super", "crate", "Self"];

/// ASCII identifier check: a letter or underscore, then letters, digits or
/// underscores. A lone underscore is not an identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            name != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Whether `name` is a keyword, raw-escapable or not.
pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name) || RESERVED.contains(&name)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use test_case::test_case;

    #[test_case("url")]
    #[test_case("_private")]
    #[test_case("width_px2")]
    #[test_case("Post")]
    fn is_identifier___accepts(name: &str) {
        assert!(is_identifier(name));
    }

    #[test_case("" ; "empty")]
    #[test_case("_" ; "lone underscore")]
    #[test_case("2fa" ; "leading digit")]
    #[test_case("a{b" ; "brace")]
    #[test_case("a-b" ; "dash")]
    #[test_case("caf\u{e9}" ; "non ascii")]
    fn is_identifier___rejects(name: &str) {
        assert!(!is_identifier(name));
    }

    #[test_case("fn")]
    #[test_case("type")]
    #[test_case("gen")]
    #[test_case("self")]
    #[test_case("Self")]
    fn is_keyword___detects(name: &str) {
        assert!(is_keyword(name));
    }

    #[test]
    fn is_keyword___ordinary_name___false() {
        assert!(!is_keyword("kind"));
        assert!(!is_keyword("Type"));
    }
}
