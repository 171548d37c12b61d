//! Read-only schema IR consumed by the code generator.
//!
//! A [`Schema`] is an ordered collection of [`MessageType`]s. Every schema
//! handed out by this module has been linked: message references point at
//! known types, oneof memberships name declared oneofs, and each field
//! carries its JSON name. Names are ASCII Rust identifiers, and every JSON
//! key of a message (field or oneof) is distinct.
//!
//! # Document format
//!
//! Schemas can be loaded from JSON or TOML documents of the same shape:
//!
//! ```toml
//! [[messages]]
//! name = "Post"
//! oneofs = [{ name = "body" }]
//!
//! [[messages.fields]]
//! name = "id"
//! kind = "int64"
//!
//! [[messages.fields]]
//! name = "text"
//! kind = "string"
//! oneof = "body"
//!
//! [[messages.fields]]
//! name = "photo"
//! kind = "message"
//! type = "Photo"
//! oneof = "body"
//! ```
//!
//! `kind` is a lowercase protobuf type name. `type` names the enum or message
//! target; list fields name their element kind in `element`, map fields their
//! key and value kinds in `key` and `value`.

use crate::error::{GeneratorError, GeneratorResult};
use crate::ident::{is_identifier, is_keyword};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Kind of a message field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Bool,

    /// 32-bit signed integer family.
    Int32,
    Sint32,
    Sfixed32,

    /// 32-bit unsigned integer family.
    Uint32,
    Fixed32,

    /// 64-bit signed integer family.
    Int64,
    Sint64,
    Sfixed64,

    /// 64-bit unsigned integer family.
    Uint64,
    Fixed64,

    Float,
    Double,
    String,
    Bytes,

    /// Enum field, carrying the enum type name.
    Enum(String),

    /// Reference to another message type by name.
    Message(String),

    /// Repeated field.
    List(Box<FieldKind>),

    /// Map field.
    Map {
        key: Box<FieldKind>,
        value: Box<FieldKind>,
    },
}

impl FieldKind {
    /// The protobuf spelling of this kind, as used in schema documents.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Bool => "bool",
            FieldKind::Int32 => "int32",
            FieldKind::Sint32 => "sint32",
            FieldKind::Sfixed32 => "sfixed32",
            FieldKind::Uint32 => "uint32",
            FieldKind::Fixed32 => "fixed32",
            FieldKind::Int64 => "int64",
            FieldKind::Sint64 => "sint64",
            FieldKind::Sfixed64 => "sfixed64",
            FieldKind::Uint64 => "uint64",
            FieldKind::Fixed64 => "fixed64",
            FieldKind::Float => "float",
            FieldKind::Double => "double",
            FieldKind::String => "string",
            FieldKind::Bytes => "bytes",
            FieldKind::Enum(_) => "enum",
            FieldKind::Message(_) => "message",
            FieldKind::List(_) => "list",
            FieldKind::Map { .. } => "map",
        }
    }

    /// Parse a kind name, using `type_name` for enum and message kinds.
    ///
    /// List and map kinds are composite and cannot be built from a single
    /// name.
    pub fn parse(kind: &str, type_name: Option<&str>) -> GeneratorResult<Self> {
        let needs_type = |what: &str| {
            type_name
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .ok_or_else(|| {
                    GeneratorError::InvalidSchema(format!("{what} kind requires a type name"))
                })
        };

        let parsed = match kind {
            "bool" => FieldKind::Bool,
            "int32" => FieldKind::Int32,
            "sint32" => FieldKind::Sint32,
            "sfixed32" => FieldKind::Sfixed32,
            "uint32" => FieldKind::Uint32,
            "fixed32" => FieldKind::Fixed32,
            "int64" => FieldKind::Int64,
            "sint64" => FieldKind::Sint64,
            "sfixed64" => FieldKind::Sfixed64,
            "uint64" => FieldKind::Uint64,
            "fixed64" => FieldKind::Fixed64,
            "float" => FieldKind::Float,
            "double" => FieldKind::Double,
            "string" => FieldKind::String,
            "bytes" => FieldKind::Bytes,
            "enum" => FieldKind::Enum(needs_type("enum")?),
            "message" => FieldKind::Message(needs_type("message")?),
            other => {
                return Err(GeneratorError::InvalidSchema(format!(
                    "unknown field kind {other:?}"
                )));
            }
        };

        Ok(parsed)
    }

    /// Message types this kind refers to, directly or through a container.
    fn referenced_message(&self) -> Option<&str> {
        match self {
            FieldKind::Message(target) => Some(target),
            FieldKind::List(element) => element.referenced_message(),
            FieldKind::Map { value, .. } => value.referenced_message(),
            _ => None,
        }
    }
}

/// A field of a message type.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Declared snake_case name, also the Rust struct field name.
    pub name: String,

    /// Name used as the key in JSON output.
    pub json_name: String,

    /// Field kind.
    pub kind: FieldKind,

    /// Whether unset is distinguishable from the zero value.
    pub optional: bool,

    /// Legacy weak field.
    pub weak: bool,

    /// Name of the oneof this field is an alternative of.
    pub oneof: Option<String>,
}

impl Field {
    /// Create a field, deriving its JSON name from `name`.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        Self {
            json_name: json_name(&name),
            name,
            kind,
            optional: false,
            weak: false,
            oneof: None,
        }
    }

    /// Mark the field as having explicit presence.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark the field as weak.
    pub fn weak(mut self) -> Self {
        self.weak = true;
        self
    }

    /// Make the field an alternative of the named oneof.
    pub fn in_oneof(mut self, oneof: impl Into<String>) -> Self {
        self.oneof = Some(oneof.into());
        self
    }

    /// Override the JSON name.
    pub fn with_json_name(mut self, json_name: impl Into<String>) -> Self {
        self.json_name = json_name.into();
        self
    }
}

/// A named group of mutually exclusive fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Oneof {
    pub name: String,
}

/// A message type: ordered fields and oneof groups.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageType {
    pub name: String,
    pub fields: Vec<Field>,
    pub oneofs: Vec<Oneof>,
}

impl MessageType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            oneofs: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_oneof(mut self, name: impl Into<String>) -> Self {
        self.oneofs.push(Oneof { name: name.into() });
        self
    }

    /// Fields that do not belong to any oneof, in declaration order.
    pub fn standalone_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.oneof.is_none())
    }

    /// Alternatives of `oneof`, in declaration order.
    pub fn alternatives<'a>(&'a self, oneof: &'a Oneof) -> impl Iterator<Item = &'a Field> {
        self.fields
            .iter()
            .filter(move |f| f.oneof.as_deref() == Some(oneof.name.as_str()))
    }
}

/// A linked collection of message types, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    messages: IndexMap<String, MessageType>,
}

impl Schema {
    /// Link message types into a schema.
    pub fn from_messages(messages: Vec<MessageType>) -> GeneratorResult<Self> {
        let mut by_name = IndexMap::with_capacity(messages.len());
        for message in messages {
            if message.name.is_empty() {
                return Err(GeneratorError::InvalidSchema(
                    "message name cannot be empty".to_string(),
                ));
            }
            if by_name.contains_key(&message.name) {
                return Err(GeneratorError::InvalidSchema(format!(
                    "duplicate message type {}",
                    message.name
                )));
            }
            by_name.insert(message.name.clone(), message);
        }

        let schema = Self { messages: by_name };
        schema.link()?;

        tracing::debug!("Linked schema with {} message types", schema.len());
        Ok(schema)
    }

    /// Parse and link a JSON schema document.
    pub fn from_json_str(content: &str) -> GeneratorResult<Self> {
        let document: SchemaDocument = serde_json::from_str(content)?;
        document.into_schema()
    }

    /// Parse and link a TOML schema document.
    pub fn from_toml_str(content: &str) -> GeneratorResult<Self> {
        let document: SchemaDocument = toml::from_str(content)?;
        document.into_schema()
    }

    /// Load a schema document, choosing the format by file extension.
    pub fn from_file(path: impl AsRef<Path>) -> GeneratorResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ => Err(GeneratorError::Parse(format!(
                "unrecognized schema format for {}: expected .json or .toml",
                path.display()
            ))),
        }
    }

    /// Look up a message type by name.
    pub fn get(&self, name: &str) -> Option<&MessageType> {
        self.messages.get(name)
    }

    /// Message types in declaration order.
    pub fn messages(&self) -> impl Iterator<Item = &MessageType> {
        self.messages.values()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn link(&self) -> GeneratorResult<()> {
        for message in self.messages.values() {
            let invalid = |detail: String| {
                GeneratorError::InvalidSchema(format!("{}: {detail}", message.name))
            };

            if !is_identifier(&message.name) || is_keyword(&message.name) {
                return Err(invalid("message name is not a Rust type name".to_string()));
            }

            let mut oneof_names = HashSet::new();
            for oneof in &message.oneofs {
                if !is_identifier(&oneof.name) {
                    return Err(invalid(format!(
                        "oneof name {:?} is not a Rust identifier",
                        oneof.name
                    )));
                }
                if !oneof_names.insert(oneof.name.as_str()) {
                    return Err(invalid(format!("duplicate oneof {}", oneof.name)));
                }
            }

            // Oneof keys share the JSON object with field keys.
            let mut json_keys = HashSet::new();
            let mut field_names = HashSet::new();
            for field in &message.fields {
                if !is_identifier(&field.name) {
                    return Err(invalid(format!(
                        "field name {:?} is not a Rust identifier",
                        field.name
                    )));
                }
                if !field_names.insert(field.name.as_str()) {
                    return Err(invalid(format!("duplicate field {}", field.name)));
                }
                if oneof_names.contains(field.name.as_str()) {
                    return Err(invalid(format!(
                        "field {} shares its name with a oneof",
                        field.name
                    )));
                }
                if !json_keys.insert(field.json_name.clone()) {
                    return Err(invalid(format!(
                        "field {} reuses the JSON name {}",
                        field.name, field.json_name
                    )));
                }

                if let Some(target) = field.kind.referenced_message() {
                    if !self.messages.contains_key(target) {
                        return Err(invalid(format!(
                            "field {} references unknown message type {target}",
                            field.name
                        )));
                    }
                }

                if let Some(oneof) = &field.oneof {
                    if !oneof_names.contains(oneof.as_str()) {
                        return Err(invalid(format!(
                            "field {} belongs to undeclared oneof {oneof}",
                            field.name
                        )));
                    }
                    if field.optional {
                        return Err(invalid(format!(
                            "oneof field {} cannot be optional",
                            field.name
                        )));
                    }
                    if matches!(field.kind, FieldKind::List(_) | FieldKind::Map { .. }) {
                        return Err(invalid(format!(
                            "oneof field {} cannot be a {} field",
                            field.name,
                            field.kind.name()
                        )));
                    }
                }
            }

            for oneof in &message.oneofs {
                if message.alternatives(oneof).next().is_none() {
                    return Err(invalid(format!("oneof {} has no fields", oneof.name)));
                }
                let key = json_name(&oneof.name);
                if !json_keys.insert(key.clone()) {
                    return Err(invalid(format!(
                        "oneof {} reuses the JSON name {key}",
                        oneof.name
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Compute the JSON name of a field from its declared name.
///
/// Underscores are dropped and a lowercase ASCII letter following one or
/// more of them is upper-cased.
pub fn json_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut after_underscore = false;

    for c in name.chars() {
        if c == '_' {
            after_underscore = true;
        } else if after_underscore {
            result.push(c.to_ascii_uppercase());
            after_underscore = false;
        } else {
            result.push(c);
        }
    }

    result
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaDocument {
    #[serde(default)]
    messages: Vec<MessageDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MessageDocument {
    name: String,

    #[serde(default)]
    fields: Vec<FieldDocument>,

    #[serde(default)]
    oneofs: Vec<OneofDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OneofDocument {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldDocument {
    name: String,
    kind: String,

    #[serde(default)]
    json_name: Option<String>,

    #[serde(default)]
    optional: bool,

    #[serde(default)]
    weak: bool,

    #[serde(default)]
    oneof: Option<String>,

    /// Enum or message target, for the field itself or its element/value.
    #[serde(default, rename = "type")]
    type_name: Option<String>,

    #[serde(default)]
    element: Option<String>,

    #[serde(default)]
    key: Option<String>,

    #[serde(default)]
    value: Option<String>,
}

impl SchemaDocument {
    fn into_schema(self) -> GeneratorResult<Schema> {
        let messages = self
            .messages
            .into_iter()
            .map(MessageDocument::into_message)
            .collect::<GeneratorResult<Vec<_>>>()?;

        Schema::from_messages(messages)
    }
}

impl MessageDocument {
    fn into_message(self) -> GeneratorResult<MessageType> {
        let fields = self
            .fields
            .into_iter()
            .map(|f| {
                let field_name = f.name.clone();
                f.into_field().map_err(|e| match e {
                    GeneratorError::InvalidSchema(detail) => GeneratorError::InvalidSchema(
                        format!("{}.{field_name}: {detail}", self.name),
                    ),
                    other => other,
                })
            })
            .collect::<GeneratorResult<Vec<_>>>()?;

        Ok(MessageType {
            name: self.name,
            fields,
            oneofs: self
                .oneofs
                .into_iter()
                .map(|o| Oneof { name: o.name })
                .collect(),
        })
    }
}

impl FieldDocument {
    fn into_field(self) -> GeneratorResult<Field> {
        let type_name = self.type_name.as_deref();

        let kind = match self.kind.as_str() {
            "list" => {
                let element = self.element.as_deref().ok_or_else(|| {
                    GeneratorError::InvalidSchema("list kind requires an element kind".to_string())
                })?;
                FieldKind::List(Box::new(FieldKind::parse(element, type_name)?))
            }
            "map" => {
                let (Some(key), Some(value)) = (self.key.as_deref(), self.value.as_deref()) else {
                    return Err(GeneratorError::InvalidSchema(
                        "map kind requires key and value kinds".to_string(),
                    ));
                };
                let key = FieldKind::parse(key, None)?;
                if matches!(
                    key,
                    FieldKind::Float
                        | FieldKind::Double
                        | FieldKind::Bytes
                        | FieldKind::Enum(_)
                        | FieldKind::Message(_)
                ) {
                    return Err(GeneratorError::InvalidSchema(format!(
                        "{} is not a valid map key kind",
                        key.name()
                    )));
                }
                FieldKind::Map {
                    key: Box::new(key),
                    value: Box::new(FieldKind::parse(value, type_name)?),
                }
            }
            other => FieldKind::parse(other, type_name)?,
        };

        let mut field = Field::new(self.name, kind);
        if let Some(json_name) = self.json_name {
            field.json_name = json_name;
        }
        field.optional = self.optional;
        field.weak = self.weak;
        field.oneof = self.oneof;

        Ok(field)
    }
}
