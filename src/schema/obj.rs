use indexmap::IndexMap;
use serde_json::Value;

use super::Schema;
use crate::error::{ErrorKind, Expected, ParseError, ParseResult, PathSegment};
use crate::parse::Ctx;

/// Keyed structure. Fields keep declaration order; undeclared input keys are ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectSchema {
    fields: IndexMap<String, Schema>,
}

impl ObjectSchema {
    pub fn new<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(|(k, s)| (k.into(), s)).collect(),
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.fields.iter().map(|(k, s)| (k.as_str(), s))
    }

    pub fn field(&self, name: &str) -> Option<&Schema> { self.fields.get(name) }

    pub fn len(&self) -> usize { self.fields.len() }

    pub fn is_empty(&self) -> bool { self.fields.is_empty() }

    /// Two passes over the declared fields, both in declaration order:
    /// 1) presence: the first absent non-optional field fails `MissingField`
    /// 2) values: the first field whose schema rejects its value fails
    ///
    /// Presence goes first so a missing field is reported no matter what the
    /// other fields hold.
    pub(crate) fn parse<'v>(&self, ctx: &Ctx<'_>, value: Option<&'v Value>) -> ParseResult<&'v Value> {
        let (v, map) = match value {
            Some(v @ Value::Object(map)) => (v, map),
            _ => return Err(ParseError::type_mismatch(Expected::Object)),
        };

        if let Some(name) = self.first_missing(map) {
            return Err(ParseError::new(ErrorKind::MissingField { field: name.to_string() }));
        }

        let ctx = ctx.descend()?;
        for (name, field) in &self.fields {
            field
                .parse_in(&ctx, map.get(name))
                .map_err(|e| e.within(PathSegment::Field(name.clone())))?;
        }
        Ok(v)
    }

    fn first_missing(&self, map: &serde_json::Map<String, Value>) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, field)| !field.is_optional() && !map.contains_key(name.as_str()))
            .map(|(name, _)| name.as_str())
    }
}
