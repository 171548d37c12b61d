//! Code generation from a protobuf message schema.
//!
//! For every message type the generator emits one `impl` block holding two
//! methods:
//!
//! - a JSON method building a `serde_json::Value` tree keyed by JSON field
//!   names
//! - a literal method rendering a recursively indented text dump
//!
//! The target types are prost-style structs: scalar fields are plain values
//! (`Option<T>` with explicit presence), message fields are `Option<T>` or
//! `Option<Box<T>>`, and a oneof `body` of `Post` is an
//! `Option<post::Body>` field.
//!
//! # Architecture
//!
//! ```text
//! Schema (linked IR)
//!     ↓
//!  for each MessageType
//!     ├─→ [JSON emitter]    ─┐
//!     │                      ├─ [type mapper] [oneof dispatcher] [naming]
//!     └─→ [Literal emitter] ─┘
//!     ↓
//!  GeneratedFile (one per message)
//! ```
//!
//! # Supported Kinds
//!
//! | Kind | JSON | Literal |
//! |------|------|---------|
//! | `bool` | boolean | `{}` |
//! | 32-bit integers, `float`, `double` | number | `{}` |
//! | 64-bit integers | decimal string | `{}` |
//! | `string` | string | `{:?}` |
//! | message | nested object, omitted when absent | nested block |
//! | `bytes`, enum, list, map, weak | rejected | rejected |
//!
//! A rejected field fails the whole message; nothing is emitted for it.
//!
//! # Usage
//!
//! ```rust
//! use protodump_cli::codegen::generate;
//! use protodump_core::{GeneratorConfig, Schema};
//!
//! let schema = Schema::from_json_str(r#"{"messages": [
//!     {"name": "Photo", "fields": [{"name": "url", "kind": "string"}]}
//! ]}"#).unwrap();
//!
//! let files = generate(&schema, &GeneratorConfig::default()).unwrap();
//! assert_eq!(files[0].file_name, "photo.rs");
//! assert!(files[0].content.contains("impl Photo {"));
//! ```

pub mod context;
pub mod json;
pub mod literal;
pub mod naming;
pub mod oneof;
pub mod types;

use context::{CodeWriter, EmitContext};
use protodump_core::{GeneratorConfig, GeneratorResult, MessageType, Schema};

/// Generated source for one message type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Name of the message type.
    pub message: String,
    /// Suggested file name, `<snake_name>.rs`.
    pub file_name: String,
    /// Source text.
    pub content: String,
}

/// Generate the `impl` block for one message type.
///
/// Nothing is returned unless both methods were emitted completely.
pub fn generate_message(message: &MessageType, config: &GeneratorConfig) -> GeneratorResult<String> {
    let ctx = EmitContext::new(config);

    let json = json::emit_json(&ctx, message)?;
    let literal = literal::emit_literal(&ctx, message)?;

    let mut w = CodeWriter::new();
    w.open(&format!("impl {} {{", message.name));
    w.append(json);
    w.blank();
    w.append(literal);
    w.close("}");

    Ok(w.finish())
}

/// Generate every message type of `schema`, in declaration order.
///
/// The first rejected message aborts the run.
pub fn generate(schema: &Schema, config: &GeneratorConfig) -> GeneratorResult<Vec<GeneratedFile>> {
    config.validate()?;

    let mut files = Vec::with_capacity(schema.len());
    for message in schema.messages() {
        let code = generate_message(message, config).inspect_err(|e| {
            tracing::warn!("Generation failed for {}: {}", message.name, e);
        })?;

        tracing::debug!("Generated {} ({} bytes)", message.name, code.len());
        files.push(GeneratedFile {
            message: message.name.clone(),
            file_name: format!("{}.rs", naming::to_snake_case(&message.name)),
            content: format!(
                "// @generated by protodump. Do not edit.\n// Message: {}\n\n{code}",
                message.name
            ),
        });
    }

    Ok(files)
}

/// Join generated files into a single source text.
pub fn concat(files: &[GeneratedFile]) -> String {
    files
        .iter()
        .map(|f| f.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use protodump_core::{Field, FieldKind, GeneratorError};

    fn photo() -> MessageType {
        MessageType::new("Photo").with_field(Field::new("url", FieldKind::String))
    }

    #[test]
    fn generate_message___wraps_both_methods_in_impl() {
        let code = generate_message(&photo(), &GeneratorConfig::default()).unwrap();

        assert!(code.starts_with("impl Photo {\n    /// Builds the JSON node tree"));
        assert!(code.contains("\n\n    /// Renders this `Photo`"));
        assert!(code.ends_with("    }\n}\n"));
    }

    #[test]
    fn generate___one_file_per_message_in_order() {
        let schema = Schema::from_messages(vec![
            photo(),
            MessageType::new("PhotoAlbum")
                .with_field(Field::new("cover", FieldKind::Message("Photo".into()))),
        ])
        .unwrap();

        let files = generate(&schema, &GeneratorConfig::default()).unwrap();

        let names: Vec<_> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["photo.rs", "photo_album.rs"]);
        assert!(files[1].content.starts_with("// @generated by protodump."));
        assert!(files[1].content.contains("impl PhotoAlbum {"));
    }

    #[test]
    fn generate___map_field___aborts_without_output() {
        let map = FieldKind::Map {
            key: Box::new(FieldKind::String),
            value: Box::new(FieldKind::String),
        };
        let schema = Schema::from_messages(vec![
            photo(),
            MessageType::new("Tagged").with_field(Field::new("labels", map)),
        ])
        .unwrap();

        let result = generate(&schema, &GeneratorConfig::default());

        assert!(matches!(result, Err(GeneratorError::UnsupportedKind { .. })));
    }

    #[test]
    fn generate___invalid_config___rejected() {
        let schema = Schema::from_messages(vec![photo()]).unwrap();
        let config = GeneratorConfig {
            indent_unit: String::new(),
            ..GeneratorConfig::default()
        };

        assert!(matches!(
            generate(&schema, &config),
            Err(GeneratorError::ConfigError(_))
        ));
    }

    #[test]
    fn concat___joins_with_blank_line() {
        let files = vec![
            GeneratedFile {
                message: "A".into(),
                file_name: "a.rs".into(),
                content: "a\n".into(),
            },
            GeneratedFile {
                message: "B".into(),
                file_name: "b.rs".into(),
                content: "b\n".into(),
            },
        ];

        assert_eq!(concat(&files), "a\n\nb\n");
    }
}
