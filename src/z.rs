//! Schema constructors.
//!
//! ```
//! use json_zod::z;
//! use serde_json::json;
//!
//! let user = z::object([
//!     ("name", z::string()),
//!     ("age", z::number().optional()),
//!     ("tags", z::array(z::string())),
//! ]);
//! assert!(user.parse(&json!({ "name": "ada", "tags": [] })).is_ok());
//! ```
use crate::error::SchemaError;
use crate::schema::{
    ArraySchema, DiscriminatedUnionSchema, EnumSchema, ObjectSchema, Schema, UnionSchema,
};

pub fn string() -> Schema { Schema::String }

pub fn number() -> Schema { Schema::Number }

pub fn unknown() -> Schema { Schema::Unknown }

pub fn literal(value: impl Into<String>) -> Schema {
    Schema::Literal(value.into())
}

pub fn array(element: Schema) -> Schema {
    Schema::Array(ArraySchema::new(element))
}

/// Field order is the order given here, and it is the order fields get checked in.
pub fn object<I, K>(fields: I) -> Schema
where
    I: IntoIterator<Item = (K, Schema)>,
    K: Into<String>,
{
    Schema::Object(ObjectSchema::new(fields))
}

pub fn enum_<I, S>(values: I) -> Schema
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Schema::Enum(EnumSchema::new(values))
}

pub fn union(options: impl IntoIterator<Item = Schema>) -> Schema {
    Schema::Union(UnionSchema::new(options))
}

/// Options must be objects (bare, not wrapped) declaring `key` as a literal.
pub fn discriminated_union(
    key: impl Into<String>,
    options: impl IntoIterator<Item = Schema>,
) -> Result<Schema, SchemaError> {
    let key = key.into();
    let mut objects = Vec::new();
    for (index, option) in options.into_iter().enumerate() {
        match option {
            Schema::Object(obj) => objects.push(obj),
            _ => return Err(SchemaError::OptionNotAnObject { index }),
        }
    }
    DiscriminatedUnionSchema::new(key, objects).map(Schema::DiscriminatedUnion)
}
