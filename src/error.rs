//! Parse and construction errors.
//!
//! Parsing is fail-fast: the first violation aborts the walk and comes back as a
//! single [`ParseError`]. The error records where it happened (`path`) but the
//! message at the root is the flat one, e.g. `Value must be an object`.
use std::fmt;
use thiserror::Error;

// ————————————————————————————————————————————————————————————————————————————
// PARSE ERRORS
// ————————————————————————————————————————————————————————————————————————————

/// What the schema expected when a value had the wrong type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    String,
    Number,
    Array,
    Object,
    Literal(String),
    OneOf(Vec<String>),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::String => f.write_str("a string"),
            Expected::Number => f.write_str("a number"),
            Expected::Array => f.write_str("an array"),
            Expected::Object => f.write_str("an object"),
            Expected::Literal(lit) => write!(f, "the literal {lit:?}"),
            Expected::OneOf(values) => {
                f.write_str("one of ")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 { f.write_str(" | ")?; }
                    write!(f, "{v:?}")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("Invalid type, not {expected}")]
    TypeMismatch { expected: Expected },

    #[error("Missing field {field}")]
    MissingField { field: String },

    #[error("Value must be an object")]
    NotAnObject,

    #[error("Value does not have the key \"{key}\"")]
    MissingDiscriminatorKey { key: String },

    #[error("Value of the key \"{key}\" must be a string")]
    InvalidDiscriminatorType { key: String },

    #[error("Value {value:?} does not match any discriminator")]
    UnmatchedDiscriminator { value: String },

    #[error("Value does not match any union option")]
    NoUnionOptionMatched,

    #[error("Schema nesting exceeds the depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },
}

/// One step from the root value down to the failing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ErrorKind,
    /// Outermost segment first.
    path: Vec<PathSegment>,
}

impl ParseError {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, path: Vec::new() }
    }

    pub fn type_mismatch(expected: Expected) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected })
    }

    pub fn kind(&self) -> &ErrorKind { &self.kind }

    pub fn into_kind(self) -> ErrorKind { self.kind }

    pub fn path(&self) -> &[PathSegment] { &self.path }

    /// `$.items[2].name` style rendering of [`ParseError::path`].
    pub fn path_string(&self) -> String {
        let mut out = String::from("$");
        for seg in &self.path {
            match seg {
                PathSegment::Field(name) => { out.push('.'); out.push_str(name); }
                PathSegment::Index(i) => { out.push_str(&format!("[{i}]")); }
            }
        }
        out
    }

    /// Prepend a segment while the error travels back up to the root.
    pub(crate) fn within(mut self, seg: PathSegment) -> Self {
        self.path.insert(0, seg);
        self
    }
}

impl From<ErrorKind> for ParseError {
    fn from(kind: ErrorKind) -> Self { Self::new(kind) }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.path_string(), self.kind)
        }
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

// ————————————————————————————————————————————————————————————————————————————
// CONSTRUCTION ERRORS
// ————————————————————————————————————————————————————————————————————————————

/// Misuse of a schema constructor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("discriminated union option {index} is not an object schema")]
    OptionNotAnObject { index: usize },

    #[error("discriminated union option {index} must declare the key \"{key}\" as a literal")]
    DiscriminatorNotLiteral { key: String, index: usize },

    #[error("discriminated union options {first} and {second} both use the value {value:?}")]
    DuplicateDiscriminator { value: String, first: usize, second: usize },
}
