//! Rust type mappings for schema fields.
//!
//! # Type Mappings
//!
//! | Kind | Rust | Nullable |
//! |------|------|----------|
//! | `bool` | `bool` | presence |
//! | `int32`, `sint32`, `sfixed32` | `i32` | presence |
//! | `uint32`, `fixed32` | `u32` | presence |
//! | `int64`, `sint64`, `sfixed64` | `i64` | presence |
//! | `uint64`, `fixed64` | `u64` | presence |
//! | `float` / `double` | `f32` / `f64` | presence |
//! | `string` | `String` | presence |
//! | `bytes` | `Vec<u8>` | no |
//! | enum | enum name | presence |
//! | message | `Option<Box<T>>` | no |
//! | list of X | `Vec<X>` | no |
//! | map | unsupported | |

use protodump_core::{EmitPath, Field, FieldKind, GeneratorError, GeneratorResult, MessageType};

/// A resolved Rust type for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RustType {
    /// The type name, without the `Option` wrapper implied by `nullable`.
    pub name: String,
    /// Whether the field is wrapped in `Option` for presence.
    pub nullable: bool,
}

impl RustType {
    fn new(name: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            nullable,
        }
    }

    /// The declared type of the struct field.
    pub fn declared(&self) -> String {
        if self.nullable {
            format!("Option<{}>", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Resolve the Rust type of `field`, declared in `message`.
///
/// Weak fields resolve to the `()` placeholder. Map fields are rejected.
pub fn resolve(message: &MessageType, field: &Field) -> GeneratorResult<RustType> {
    if field.weak {
        return Ok(RustType::new("()", false));
    }

    let presence = field.optional;
    let ty = match &field.kind {
        FieldKind::Bytes => RustType::new("Vec<u8>", false),
        FieldKind::Message(target) => RustType::new(format!("Option<Box<{target}>>"), false),
        FieldKind::List(element) => {
            let element = element_type(element).ok_or_else(|| unsupported(message, field))?;
            RustType::new(format!("Vec<{element}>"), false)
        }
        FieldKind::Map { .. } => return Err(unsupported(message, field)),
        scalar => match element_type(scalar) {
            Some(name) => RustType::new(name, presence),
            None => return Err(unsupported(message, field)),
        },
    };

    Ok(ty)
}

/// Type name of a single value of `kind`, as held by a struct field, a list
/// element or a oneof variant.
fn element_type(kind: &FieldKind) -> Option<String> {
    let name = match kind {
        FieldKind::Bool => "bool".to_string(),
        FieldKind::Int32 | FieldKind::Sint32 | FieldKind::Sfixed32 => "i32".to_string(),
        FieldKind::Uint32 | FieldKind::Fixed32 => "u32".to_string(),
        FieldKind::Int64 | FieldKind::Sint64 | FieldKind::Sfixed64 => "i64".to_string(),
        FieldKind::Uint64 | FieldKind::Fixed64 => "u64".to_string(),
        FieldKind::Float => "f32".to_string(),
        FieldKind::Double => "f64".to_string(),
        FieldKind::String => "String".to_string(),
        FieldKind::Bytes => "Vec<u8>".to_string(),
        FieldKind::Enum(name) | FieldKind::Message(name) => name.clone(),
        FieldKind::List(_) | FieldKind::Map { .. } => return None,
    };
    Some(name)
}

fn unsupported(message: &MessageType, field: &Field) -> GeneratorError {
    GeneratorError::UnsupportedKind {
        message: message.name.clone(),
        field: field.name.clone(),
        kind: field.kind.name().to_string(),
        path: EmitPath::TypeMapping,
    }
}
