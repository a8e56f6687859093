//! Validate, then hand back a concrete Rust type.
//!
//! The schema stays the source of truth: a value is checked first and only then
//! deserialized. If `T` disagrees with the schema, the deserialize error carries
//! the JSON path (via `serde_path_to_error`).
use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::config::ParseOptions;
use crate::error::ParseError;
use crate::schema::Schema;

#[derive(Debug, Error)]
pub enum TypedError {
    #[error(transparent)]
    Invalid(#[from] ParseError),

    #[error("at JSON path {path} → {message}")]
    Deserialize { path: String, message: String },
}

/// Deserialize with JSON-path context in error messages.
pub fn from_value_with_path<T: DeserializeOwned>(value: &Value) -> Result<T, TypedError> {
    match serde_path_to_error::deserialize::<_, T>(value) {
        Ok(v) => Ok(v),
        Err(err) => {
            let path = err.path().to_string();
            Err(TypedError::Deserialize { path, message: err.into_inner().to_string() })
        }
    }
}

impl Schema {
    /// Parse and deserialize in one go.
    pub fn parse_as<T: DeserializeOwned>(&self, value: &Value) -> Result<T, TypedError> {
        let checked = self.parse(value)?;
        from_value_with_path(checked)
    }

    /// Pair this schema with the Rust type its values map to.
    pub fn typed<T: DeserializeOwned>(self) -> Typed<T> {
        Typed { schema: self, opts: ParseOptions::default(), _out: PhantomData }
    }
}

/// A schema bound to its output type.
pub struct Typed<T> {
    schema: Schema,
    opts: ParseOptions,
    _out: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> Typed<T> {
    pub fn with_options(mut self, opts: ParseOptions) -> Self {
        self.opts = opts;
        self
    }

    pub fn schema(&self) -> &Schema { &self.schema }

    pub fn parse(&self, value: &Value) -> Result<T, TypedError> {
        self.schema.parse_with(&self.opts, Some(value))?;
        from_value_with_path(value)
    }

    pub fn parse_str(&self, src: &str) -> Result<T, TypedError> {
        let value: Value = serde_json::from_str(src).map_err(|e| TypedError::Deserialize {
            path: "$".to_string(),
            message: e.to_string(),
        })?;
        self.parse(&value)
    }
}

impl<T> Clone for Typed<T> {
    fn clone(&self) -> Self {
        Self { schema: self.schema.clone(), opts: self.opts, _out: PhantomData }
    }
}

impl<T> fmt::Debug for Typed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Typed")
            .field("schema", &self.schema)
            .field("output", &std::any::type_name::<T>())
            .finish()
    }
}
