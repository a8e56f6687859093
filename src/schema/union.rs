//! Plain unions (try each option) and discriminated unions (read one key, dispatch).
use serde_json::Value;

use super::{ObjectSchema, Schema};
use crate::error::{ErrorKind, ParseError, ParseResult, SchemaError};
use crate::parse::Ctx;

// ————————————————————————————————————————————————————————————————————————————
// UNION
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnionSchema {
    options: Vec<Schema>,
}

impl UnionSchema {
    pub fn new(options: impl IntoIterator<Item = Schema>) -> Self {
        Self { options: options.into_iter().collect() }
    }

    pub fn options(&self) -> &[Schema] { &self.options }

    /// First option (in declaration order) that accepts the value wins.
    pub(crate) fn parse<'v>(
        &self,
        ctx: &Ctx<'_>,
        value: Option<&'v Value>,
    ) -> ParseResult<Option<&'v Value>> {
        let ctx = ctx.descend()?;
        for (i, option) in self.options.iter().enumerate() {
            match option.parse_in(&ctx, value) {
                Ok(out) => {
                    tracing::trace!(option = i, "union option matched");
                    return Ok(out);
                }
                // a blown depth budget is not a mismatch; stop here
                Err(e) if matches!(e.kind(), ErrorKind::DepthLimitExceeded { .. }) => return Err(e),
                Err(e) => tracing::trace!(option = i, error = %e, "union option rejected"),
            }
        }
        tracing::debug!(options = self.options.len(), "no union option matched");
        Err(ParseError::new(ErrorKind::NoUnionOptionMatched))
    }
}

// ————————————————————————————————————————————————————————————————————————————
// DISCRIMINATED UNION
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, PartialEq)]
pub struct DiscriminatedUnionSchema {
    key: String,
    options: Vec<ObjectSchema>,
    /// `tags[i]` is the literal `options[i]` declares at `key`.
    tags: Vec<String>,
}

impl DiscriminatedUnionSchema {
    /// Every option must declare `key` as a literal, and no literal may repeat.
    pub fn new(
        key: impl Into<String>,
        options: impl IntoIterator<Item = ObjectSchema>,
    ) -> Result<Self, SchemaError> {
        let key = key.into();
        let options: Vec<ObjectSchema> = options.into_iter().collect();

        let mut tags: Vec<String> = Vec::with_capacity(options.len());
        for (index, option) in options.iter().enumerate() {
            let tag = option
                .field(&key)
                .and_then(Schema::as_literal)
                .ok_or_else(|| SchemaError::DiscriminatorNotLiteral { key: key.clone(), index })?;
            if let Some(first) = tags.iter().position(|t| t == tag) {
                return Err(SchemaError::DuplicateDiscriminator {
                    value: tag.to_string(),
                    first,
                    second: index,
                });
            }
            tags.push(tag.to_string());
        }

        Ok(Self { key, options, tags })
    }

    pub fn discriminator(&self) -> &str { &self.key }

    pub fn options(&self) -> &[ObjectSchema] { &self.options }

    /// The option selected by a discriminator value.
    pub fn option_for(&self, tag: &str) -> Option<&ObjectSchema> {
        self.tags
            .iter()
            .position(|t| t == tag)
            .map(|i| &self.options[i])
    }

    /// shape → key presence → key type → lookup → delegate.
    ///
    /// The order fixes which error a malformed value gets, so keep it.
    pub(crate) fn parse<'v>(&self, ctx: &Ctx<'_>, value: Option<&'v Value>) -> ParseResult<&'v Value> {
        let map = match value {
            Some(Value::Object(map)) => map,
            _ => return Err(ParseError::new(ErrorKind::NotAnObject)),
        };

        let raw = map.get(&self.key).ok_or_else(|| {
            ParseError::new(ErrorKind::MissingDiscriminatorKey { key: self.key.clone() })
        })?;

        let tag = raw.as_str().ok_or_else(|| {
            ParseError::new(ErrorKind::InvalidDiscriminatorType { key: self.key.clone() })
        })?;

        let option = self.option_for(tag).ok_or_else(|| {
            ParseError::new(ErrorKind::UnmatchedDiscriminator { value: tag.to_string() })
        })?;
        tracing::trace!(key = %self.key, tag, "discriminated union dispatch");

        let ctx = ctx.descend()?;
        option.parse(&ctx, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn variant(tag: &str, extra: &str, extra_schema: Schema) -> ObjectSchema {
        ObjectSchema::new([
            ("kind".to_string(), Schema::Literal(tag.into())),
            (extra.to_string(), extra_schema),
        ])
    }

    #[test]
    fn rejects_option_without_literal_key() {
        let bad = ObjectSchema::new([("kind", Schema::String)]);
        let err = DiscriminatedUnionSchema::new("kind", [variant("a", "n", Schema::Number), bad]).unwrap_err();
        assert_eq!(err, SchemaError::DiscriminatorNotLiteral { key: "kind".into(), index: 1 });
    }

    #[test]
    fn rejects_repeated_tags() {
        let err = DiscriminatedUnionSchema::new(
            "kind",
            [variant("a", "n", Schema::Number), variant("a", "s", Schema::String)],
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateDiscriminator { first: 0, second: 1, .. }));
    }

    #[test]
    fn option_lookup_by_tag() {
        let du = DiscriminatedUnionSchema::new(
            "kind",
            [variant("a", "n", Schema::Number), variant("b", "s", Schema::String)],
        )
        .unwrap();
        assert!(du.option_for("b").is_some_and(|o| o.field("s").is_some()));
        assert!(du.option_for("c").is_none());
    }

    #[test]
    fn union_takes_first_accepting_option() {
        let u = Schema::Union(UnionSchema::new([Schema::Number, Schema::String]));
        assert!(u.parse(&json!("x")).is_ok());
        assert!(u.parse(&json!(1)).is_ok());
        let err = u.parse(&json!(true)).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::NoUnionOptionMatched);
    }

    #[test]
    fn empty_union_never_matches() {
        let u = Schema::Union(UnionSchema::default());
        assert!(u.parse(&json!(null)).is_err());
    }
}
