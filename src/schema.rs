//! Schema algebra.
//!
//! A [`Schema`] is a closed tagged variant over every supported kind. Composite
//! kinds own their children, so a schema tree is built bottom-up and never
//! mutated afterwards; cloning or sharing it across threads is always safe.
//!
//! Wrappers (`optional`, `nullable`) don't stack: a schema carries at most one,
//! and [`Wrapped`] can only be built around an unwrapped schema.
pub mod text;
pub mod num;
pub mod arr;
pub mod obj;
pub mod union;

use std::fmt;

pub use arr::ArraySchema;
pub use obj::ObjectSchema;
pub use text::EnumSchema;
pub use union::{DiscriminatedUnionSchema, UnionSchema};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Unknown,
    String,
    Number,
    /// Exactly one string value.
    Literal(String),
    Array(ArraySchema),
    Object(ObjectSchema),
    Enum(EnumSchema),
    Union(UnionSchema),
    DiscriminatedUnion(DiscriminatedUnionSchema),
    /// Also accepts an absent value.
    Optional(Wrapped),
    /// Also accepts `null`.
    Nullable(Wrapped),
}

/// Payload of a wrapper variant. The inner schema is never itself wrapped.
#[derive(Debug, Clone, PartialEq)]
pub struct Wrapped {
    inner: Box<Schema>,
}

impl Wrapped {
    fn around(schema: Schema) -> Self {
        let inner = match schema {
            Schema::Optional(w) | Schema::Nullable(w) => w.inner,
            bare => Box::new(bare),
        };
        Self { inner }
    }

    pub fn inner(&self) -> &Schema { &self.inner }
}

/// Introspection tag. Wrapped schemas report the kind of what they wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Unknown,
    String,
    Number,
    Literal,
    Array,
    Object,
    Enum,
    Union,
    DiscriminatedUnion,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Unknown => "unknown",
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Literal => "literal",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Enum => "enum",
            Kind::Union => "union",
            Kind::DiscriminatedUnion => "discriminated-union",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Schema {
    pub fn kind(&self) -> Kind {
        match self {
            Schema::Unknown => Kind::Unknown,
            Schema::String => Kind::String,
            Schema::Number => Kind::Number,
            Schema::Literal(_) => Kind::Literal,
            Schema::Array(_) => Kind::Array,
            Schema::Object(_) => Kind::Object,
            Schema::Enum(_) => Kind::Enum,
            Schema::Union(_) => Kind::Union,
            Schema::DiscriminatedUnion(_) => Kind::DiscriminatedUnion,
            Schema::Optional(w) | Schema::Nullable(w) => w.inner.kind(),
        }
    }

    pub fn is_optional(&self) -> bool { matches!(self, Schema::Optional(_)) }

    pub fn is_nullable(&self) -> bool { matches!(self, Schema::Nullable(_)) }

    /// Accept an absent value too. Replaces any wrapper already present.
    pub fn optional(self) -> Schema {
        Schema::Optional(Wrapped::around(self))
    }

    /// Accept `null` too. Replaces any wrapper already present.
    pub fn nullable(self) -> Schema {
        Schema::Nullable(Wrapped::around(self))
    }

    /// The schema underneath a wrapper, or `self` when there is none.
    pub fn inner(&self) -> &Schema {
        match self {
            Schema::Optional(w) | Schema::Nullable(w) => w.inner(),
            bare => bare,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectSchema> {
        match self {
            Schema::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumSchema> {
        match self.inner() {
            Schema::Enum(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Schema::Literal(lit) => Some(lit.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrappers_keep_the_inner_kind() {
        let s = Schema::Number.optional();
        assert_eq!(s.kind(), Kind::Number);
        assert!(s.is_optional());
        assert!(!s.is_nullable());

        let s = Schema::String.nullable();
        assert_eq!(s.kind(), Kind::String);
        assert!(s.is_nullable());
    }

    #[test]
    fn wrappers_do_not_stack() {
        let twice = Schema::String.optional().optional();
        assert_eq!(twice, Schema::String.optional());

        let swapped = Schema::String.optional().nullable();
        assert_eq!(swapped, Schema::String.nullable());
        assert_eq!(swapped.inner(), &Schema::String);
    }

    #[test]
    fn kind_tags_render_lowercase() {
        assert_eq!(Kind::DiscriminatedUnion.to_string(), "discriminated-union");
        assert_eq!(Kind::Array.to_string(), "array");
    }
}
