// Inferred-type IR: what a value looks like after a successful parse.
//
// No serde_json::Value here. This is the runtime stand-in for static
// inference; `Display` renders it as a TypeScript-ish type expression.

use std::fmt;

use crate::schema::{ObjectSchema, Schema};

#[derive(Debug, Clone, PartialEq)]
pub enum Ty {
    Never,                   // empty union or enum: nothing parses
    Unknown,
    Undefined,               // only ever appears as a union arm
    Null,                    // ditto
    String,
    Number,
    Literal(String),
    Array(Box<Ty>),
    Object {
        fields: Vec<Field>,  // declaration order
    },
    Union(Vec<Ty>),          // flat, deduplicated, ≥ 2 arms
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: Ty,
    pub optional: bool,      // key may be absent
}

impl Schema {
    /// The shape every value accepted by this schema has.
    pub fn infer(&self) -> Ty {
        lower(self)
    }
}

fn lower(s: &Schema) -> Ty {
    match s {
        Schema::Unknown => Ty::Unknown,
        Schema::String => Ty::String,
        Schema::Number => Ty::Number,
        Schema::Literal(lit) => Ty::Literal(lit.clone()),
        Schema::Enum(e) => union_of(e.values().map(|v| Ty::Literal(v.to_string())).collect()),
        Schema::Array(arr) => Ty::Array(Box::new(lower(arr.element()))),
        Schema::Object(obj) => lower_object(obj),
        Schema::Union(u) => union_of(u.options().iter().map(lower).collect()),
        Schema::DiscriminatedUnion(du) => union_of(du.options().iter().map(lower_object).collect()),
        Schema::Optional(w) => union_of(vec![lower(w.inner()), Ty::Undefined]),
        Schema::Nullable(w) => union_of(vec![lower(w.inner()), Ty::Null]),
    }
}

fn lower_object(obj: &ObjectSchema) -> Ty {
    Ty::Object {
        fields: obj.fields().map(|(name, f)| lower_field(name, f)).collect(),
    }
}

// Optional fields: the key may be missing, the type stays the inner one.
fn lower_field(name: &str, s: &Schema) -> Field {
    match s {
        Schema::Optional(w) => Field { name: name.to_string(), ty: lower(w.inner()), optional: true },
        _ => Field { name: name.to_string(), ty: lower(s), optional: false },
    }
}

// Flatten nested unions, drop duplicate arms, collapse singletons.
// `unknown` absorbs everything.
fn union_of(arms: Vec<Ty>) -> Ty {
    let mut flat: Vec<Ty> = Vec::with_capacity(arms.len());
    for arm in arms {
        let nested = match arm {
            Ty::Union(inner) => inner,
            other => vec![other],
        };
        for t in nested {
            if !flat.contains(&t) { flat.push(t); }
        }
    }
    if flat.contains(&Ty::Unknown) {
        return Ty::Unknown;
    }
    match flat.len() {
        0 => Ty::Never,
        1 => flat.remove(0),
        _ => Ty::Union(flat),
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Never => f.write_str("never"),
            Ty::Unknown => f.write_str("unknown"),
            Ty::Undefined => f.write_str("undefined"),
            Ty::Null => f.write_str("null"),
            Ty::String => f.write_str("string"),
            Ty::Number => f.write_str("number"),
            Ty::Literal(lit) => write!(f, "{lit:?}"),
            Ty::Array(item) => match item.as_ref() {
                Ty::Union(_) => write!(f, "Array<{item}>"),
                _ => write!(f, "{item}[]"),
            },
            Ty::Object { fields } => {
                if fields.is_empty() { return f.write_str("{}"); }
                f.write_str("{ ")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 { f.write_str("; ")?; }
                    let q = if field.optional { "?" } else { "" };
                    write!(f, "{}{q}: {}", field.name, field.ty)?;
                }
                f.write_str(" }")
            }
            Ty::Union(arms) => {
                for (i, arm) in arms.iter().enumerate() {
                    if i > 0 { f.write_str(" | ")?; }
                    write!(f, "{arm}")?;
                }
                Ok(())
            }
        }
    }
}
