//! protodump-cli - Generator of JSON and literal-dump routines
//!
//! The [`codegen`] module turns a linked [`protodump_core::Schema`] into Rust
//! `impl` blocks for prost-style message types. The `protodump` binary wraps
//! it with schema and configuration loading.

pub mod codegen;
