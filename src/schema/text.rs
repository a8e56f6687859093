use indexmap::IndexSet;
use serde_json::Value;

use crate::error::{Expected, ParseError, ParseResult};

pub(crate) fn parse_string<'v>(value: Option<&'v Value>) -> ParseResult<&'v Value> {
    match value {
        Some(v @ Value::String(_)) => Ok(v),
        _ => Err(ParseError::type_mismatch(Expected::String)),
    }
}

pub(crate) fn parse_literal<'v>(lit: &str, value: Option<&'v Value>) -> ParseResult<&'v Value> {
    match value {
        Some(v @ Value::String(s)) if s == lit => Ok(v),
        _ => Err(ParseError::type_mismatch(Expected::Literal(lit.to_string()))),
    }
}

/// Closed set of string literals, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnumSchema {
    values: IndexSet<String>,
}

impl EnumSchema {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { values: values.into_iter().map(Into::into).collect() }
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn contains(&self, value: &str) -> bool { self.values.contains(value) }

    /// Reverse lookup: the member spelled `name`, if it is one.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub(crate) fn parse<'v>(&self, value: Option<&'v Value>) -> ParseResult<&'v Value> {
        match value {
            Some(v @ Value::String(s)) if self.values.contains(s.as_str()) => Ok(v),
            _ => Err(ParseError::type_mismatch(Expected::OneOf(
                self.values.iter().cloned().collect(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn enum_collapses_duplicates_and_keeps_order() {
        let e = EnumSchema::new(["b", "a", "b"]);
        assert_eq!(e.values().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(e.get("a"), Some("a"));
        assert_eq!(e.get("c"), None);
    }

    #[test]
    fn enum_rejects_non_members_and_non_strings() {
        let e = EnumSchema::new(["red", "green"]);
        assert!(e.parse(Some(&json!("red"))).is_ok());
        let err = e.parse(Some(&json!("blue"))).unwrap_err();
        assert_eq!(err.to_string(), "Invalid type, not one of \"red\" | \"green\"");
        assert!(e.parse(Some(&json!(1))).is_err());
        assert!(e.parse(None).is_err());
    }

    #[test]
    fn literal_is_exact() {
        assert!(parse_literal("a", Some(&json!("a"))).is_ok());
        assert!(parse_literal("a", Some(&json!("A"))).is_err());
        assert!(parse_literal("a", None).is_err());
    }
}
