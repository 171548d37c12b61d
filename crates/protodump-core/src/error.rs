//! Error types for schema loading and code generation

use thiserror::Error;

/// Result type alias for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Which emitted routine rejected a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitPath {
    /// Type resolution, shared by both emitters
    TypeMapping,
    /// The JSON node tree routine
    Json,
    /// The literal dump routine
    Literal,
}

impl std::fmt::Display for EmitPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmitPath::TypeMapping => write!(f, "type mapping"),
            EmitPath::Json => write!(f, "JSON"),
            EmitPath::Literal => write!(f, "literal"),
        }
    }
}

/// Error type for schema loading and code generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// A field kind the emitter does not support
    #[error("{message}.{field}: {kind} fields are not supported in the {path} path")]
    UnsupportedKind {
        message: String,
        field: String,
        kind: String,
        path: EmitPath,
    },

    /// Weak fields never participate in emission
    #[error("{message}.{field}: weak fields are not supported")]
    WeakField { message: String, field: String },

    /// The schema failed linking or validation
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Schema or configuration document could not be parsed
    #[error("parse error: {0}")]
    Parse(String),

    /// Reading an input document failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GeneratorError {
    /// Returns true for capability limits of the emitters, as opposed to
    /// malformed input.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            GeneratorError::UnsupportedKind { .. } | GeneratorError::WeakField { .. }
        )
    }
}

impl From<serde_json::Error> for GeneratorError {
    fn from(err: serde_json::Error) -> Self {
        GeneratorError::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for GeneratorError {
    fn from(err: toml::de::Error) -> Self {
        GeneratorError::Parse(err.to_string())
    }
}
