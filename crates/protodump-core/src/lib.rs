//! protodump-core - Schema IR, configuration and errors
//!
//! This crate provides the foundational types for the protodump generator:
//! - [`Schema`], [`MessageType`], [`Field`] and [`Oneof`], the read-only schema IR
//! - [`GeneratorConfig`] for shaping the emitted code
//! - [`GeneratorError`] for error handling
//! - [`ident`], the Rust identifier rules names must satisfy

mod config;
mod error;
pub mod ident;
pub mod schema;

pub use config::GeneratorConfig;
pub use error::{EmitPath, GeneratorError, GeneratorResult};
pub use schema::{Field, FieldKind, MessageType, Oneof, Schema, json_name};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        EmitPath, Field, FieldKind, GeneratorConfig, GeneratorError, GeneratorResult,
        MessageType, Oneof, Schema,
    };
}
