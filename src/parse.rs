//! Parse entry points and the per-kind dispatch.
//!
//! Every kind returns the very value it was handed; parsing only narrows.
//! An absent value ("undefined") is `None` all the way down.
use serde_json::Value;

use crate::config::ParseOptions;
use crate::error::{ErrorKind, ParseError, ParseResult};
use crate::schema::{self, Schema};

/// State threaded through one parse call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Ctx<'o> {
    pub opts: &'o ParseOptions,
    depth: usize,
}

impl<'o> Ctx<'o> {
    fn root(opts: &'o ParseOptions) -> Self {
        Self { opts, depth: 0 }
    }

    /// Step one level into a composite schema.
    pub fn descend(&self) -> ParseResult<Ctx<'o>> {
        let depth = self.depth + 1;
        if depth > self.opts.max_depth {
            tracing::debug!(limit = self.opts.max_depth, "parse depth limit reached");
            return Err(ParseError::new(ErrorKind::DepthLimitExceeded {
                limit: self.opts.max_depth,
            }));
        }
        Ok(Self { opts: self.opts, depth })
    }
}

impl Schema {
    /// Validate a present value with default options.
    pub fn parse<'v>(&self, value: &'v Value) -> ParseResult<&'v Value> {
        self.parse_maybe(Some(value)).map(|_| value)
    }

    /// Validate a possibly absent value with default options.
    pub fn parse_maybe<'v>(&self, value: Option<&'v Value>) -> ParseResult<Option<&'v Value>> {
        self.parse_with(&ParseOptions::default(), value)
    }

    pub fn parse_with<'v>(
        &self,
        opts: &ParseOptions,
        value: Option<&'v Value>,
    ) -> ParseResult<Option<&'v Value>> {
        self.parse_in(&Ctx::root(opts), value)
    }

    /// Shorthand for "does this value pass".
    pub fn is_valid(&self, value: &Value) -> bool {
        self.parse(value).is_ok()
    }

    pub(crate) fn parse_in<'v>(
        &self,
        ctx: &Ctx<'_>,
        value: Option<&'v Value>,
    ) -> ParseResult<Option<&'v Value>> {
        match self {
            Schema::Unknown => Ok(value),
            Schema::String => schema::text::parse_string(value).map(Some),
            Schema::Number => schema::num::parse_number(value).map(Some),
            Schema::Literal(lit) => schema::text::parse_literal(lit, value).map(Some),
            Schema::Enum(e) => e.parse(value).map(Some),
            Schema::Array(arr) => arr.parse(ctx, value).map(Some),
            Schema::Object(obj) => obj.parse(ctx, value).map(Some),
            Schema::Union(u) => u.parse(ctx, value),
            Schema::DiscriminatedUnion(du) => du.parse(ctx, value).map(Some),
            Schema::Optional(w) => match value {
                None => Ok(None),
                Some(Value::Null) if ctx.opts.optional_accepts_null => Ok(value),
                Some(_) => w.inner().parse_in(ctx, value),
            },
            Schema::Nullable(w) => match value {
                Some(Value::Null) => Ok(value),
                _ => w.inner().parse_in(ctx, value),
            },
        }
    }
}
