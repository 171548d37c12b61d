#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn GeneratorConfig___default___uses_conventional_names() {
    let config = GeneratorConfig::default();

    assert_eq!(config.json_method, "to_json");
    assert_eq!(config.literal_method, "to_literal");
    assert_eq!(config.indent_unit, "\t");
    assert_eq!(config.json_crate, "::serde_json");
}

#[test]
fn GeneratorConfig___from_toml_str___empty_yields_defaults() {
    let config = GeneratorConfig::from_toml_str("  \n").unwrap();

    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn GeneratorConfig___from_toml_str___partial_keeps_other_defaults() {
    let config = GeneratorConfig::from_toml_str(r#"indent_unit = "  ""#).unwrap();

    assert_eq!(config.indent_unit, "  ");
    assert_eq!(config.json_method, "to_json");
    assert_eq!(config.literal_method, "to_literal");
}

#[test]
fn GeneratorConfig___from_toml_str___full_document() {
    let toml = r#"
json_method = "json_node"
literal_method = "dump"
indent_unit = "    "
json_crate = "crate::json"
"#;

    let config = GeneratorConfig::from_toml_str(toml).unwrap();

    assert_eq!(config.json_method, "json_node");
    assert_eq!(config.literal_method, "dump");
    assert_eq!(config.indent_unit, "    ");
    assert_eq!(config.json_crate, "crate::json");
}

#[test]
fn GeneratorConfig___from_toml_str___unknown_key_is_parse_error() {
    let result = GeneratorConfig::from_toml_str(r#"indent = "  ""#);

    assert!(matches!(result, Err(GeneratorError::Parse(_))));
}

#[test_case("1abc" ; "leading digit")]
#[test_case("to-json" ; "dash")]
#[test_case("" ; "empty")]
#[test_case("_" ; "lone underscore")]
#[test_case("to json" ; "space")]
fn GeneratorConfig___validate___rejects_bad_method_name(name: &str) {
    let config = GeneratorConfig {
        json_method: name.to_string(),
        ..GeneratorConfig::default()
    };

    assert!(matches!(
        config.validate(),
        Err(GeneratorError::ConfigError(_))
    ));
}

#[test_case("fn")]
#[test_case("type")]
#[test_case("self")]
fn GeneratorConfig___validate___rejects_keyword_method_name(name: &str) {
    let config = GeneratorConfig {
        literal_method: name.to_string(),
        ..GeneratorConfig::default()
    };

    let err = config.validate().unwrap_err();

    assert!(matches!(err, GeneratorError::ConfigError(_)));
    assert!(err.to_string().contains("keyword"));
}

#[test]
fn GeneratorConfig___from_toml_str___keyword_method_name_is_rejected() {
    let result = GeneratorConfig::from_toml_str(r#"json_method = "fn""#);

    assert!(matches!(result, Err(GeneratorError::ConfigError(_))));
}

#[test_case("to_json")]
#[test_case("_json")]
#[test_case("json2")]
fn GeneratorConfig___validate___accepts_identifiers(name: &str) {
    let config = GeneratorConfig {
        json_method: name.to_string(),
        ..GeneratorConfig::default()
    };

    assert!(config.validate().is_ok());
}

#[test]
fn GeneratorConfig___validate___rejects_same_method_names() {
    let config = GeneratorConfig {
        json_method: "dump".to_string(),
        literal_method: "dump".to_string(),
        ..GeneratorConfig::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn GeneratorConfig___validate___rejects_empty_indent_unit() {
    let result = GeneratorConfig::from_toml_str(r#"indent_unit = """#);

    assert!(matches!(result, Err(GeneratorError::ConfigError(_))));
}

#[test]
fn GeneratorConfig___from_file___missing_file_is_io_error() {
    let result = GeneratorConfig::from_file("/nonexistent/protodump.toml");

    assert!(matches!(result, Err(GeneratorError::Io(_))));
}
