//! Composable runtime schemas for untyped JSON values.
//!
//! Build a schema tree bottom-up with the constructors in [`z`], then `parse`
//! a `serde_json::Value` against it. Parsing is fail-fast and returns the very
//! value it was given; nothing is copied or coerced.
//!
//! ```
//! use json_zod::z;
//! use serde_json::json;
//!
//! let shape = z::discriminated_union("type", [
//!     z::object([("type", z::literal("circle")), ("r", z::number())]),
//!     z::object([("type", z::literal("rect")), ("w", z::number()), ("h", z::number())]),
//! ]).unwrap();
//!
//! assert!(shape.parse(&json!({ "type": "circle", "r": 2 })).is_ok());
//! let err = shape.parse(&json!({ "type": "hex" })).unwrap_err();
//! assert_eq!(err.to_string(), r#"Value "hex" does not match any discriminator"#);
//! ```
pub mod config;
pub mod error;
pub mod infer;
mod parse;
pub mod schema;
pub mod typed;
pub mod z;

pub use config::ParseOptions;
pub use error::{ErrorKind, Expected, ParseError, ParseResult, PathSegment, SchemaError};
pub use infer::Ty;
pub use schema::{Kind, Schema};
pub use typed::{Typed, TypedError};
