use serde_json::Value;

use super::Schema;
use crate::error::{Expected, ParseError, ParseResult, PathSegment};
use crate::parse::Ctx;

#[derive(Debug, Clone, PartialEq)]
pub struct ArraySchema {
    element: Box<Schema>,
}

impl ArraySchema {
    pub fn new(element: Schema) -> Self {
        Self { element: Box::new(element) }
    }

    pub fn element(&self) -> &Schema { &self.element }

    /// Elements are checked in index order; the first failure wins.
    pub(crate) fn parse<'v>(&self, ctx: &Ctx<'_>, value: Option<&'v Value>) -> ParseResult<&'v Value> {
        let (v, xs) = match value {
            Some(v @ Value::Array(xs)) => (v, xs),
            _ => return Err(ParseError::type_mismatch(Expected::Array)),
        };
        let ctx = ctx.descend()?;
        for (i, el) in xs.iter().enumerate() {
            self.element
                .parse_in(&ctx, Some(el))
                .map_err(|e| e.within(PathSegment::Index(i)))?;
        }
        Ok(v)
    }
}
