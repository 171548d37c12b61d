//! Shared state for emitting generated code.

use protodump_core::GeneratorConfig;

/// Indentation of the generated Rust source itself.
const SOURCE_INDENT: &str = "    ";

/// Names of the locals and parameters used inside generated methods.
///
/// Schema fields are always reached through the receiver, so these names
/// cannot collide with them.
#[derive(Debug, Clone, Copy)]
pub struct Locals {
    /// The message being rendered.
    pub instance: &'static str,
    /// JSON map of the message's entries.
    pub fields: &'static str,
    /// Literal output buffer.
    pub out: &'static str,
    /// Literal indent prefix parameter.
    pub indent: &'static str,
    /// Active oneof enum value.
    pub selected: &'static str,
    /// Two-key JSON map for an active oneof.
    pub entry: &'static str,
    /// Value bound by a presence guard or a oneof arm.
    pub value: &'static str,
}

impl Default for Locals {
    fn default() -> Self {
        Self {
            instance: "self",
            fields: "fields",
            out: "out",
            indent: "indent",
            selected: "selected",
            entry: "entry",
            value: "value",
        }
    }
}

/// Configuration and local names threaded through every emitter.
#[derive(Debug, Clone, Copy)]
pub struct EmitContext<'a> {
    pub config: &'a GeneratorConfig,
    pub locals: Locals,
}

impl<'a> EmitContext<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self {
            config,
            locals: Locals::default(),
        }
    }

    /// Expression reading a struct field of the instance.
    pub fn member(&self, ident: &str) -> String {
        format!("{}.{ident}", self.locals.instance)
    }

    /// The `serde_json` path as seen from generated code.
    pub fn json(&self) -> &str {
        &self.config.json_crate
    }
}

/// A value expression handed to kind-specific formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A place expression such as `self.id`.
    Place(String),
    /// A local bound to a reference, such as `value` in `Some(value)`.
    Borrowed(String),
}

impl Operand {
    /// The expression as written.
    pub fn expr(&self) -> &str {
        match self {
            Operand::Place(expr) | Operand::Borrowed(expr) => expr,
        }
    }

    /// The expression yielding a copy of a `Copy` value.
    pub fn copied(&self) -> String {
        match self {
            Operand::Place(expr) => expr.clone(),
            Operand::Borrowed(expr) => format!("*{expr}"),
        }
    }
}

/// Line-oriented writer for generated source with block indentation.
#[derive(Debug, Default)]
pub struct CodeWriter {
    buf: String,
    depth: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current depth.
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buf.push_str(SOURCE_INDENT);
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Write a line opening a block.
    pub fn open(&mut self, text: &str) {
        self.line(text);
        self.depth += 1;
    }

    /// Write a line closing a block.
    pub fn close(&mut self, text: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(text);
    }

    /// Append the output of another writer, nested at the current depth.
    pub fn append(&mut self, other: CodeWriter) {
        for line in other.buf.lines() {
            if line.is_empty() {
                self.blank();
            } else {
                self.line(line);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn finish(self) -> String {
        self.buf
    }
}
