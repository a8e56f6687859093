use serde_json::Value;

use crate::error::{Expected, ParseError, ParseResult};

/// Any JSON number: integer, unsigned or float. No coercion from strings.
pub(crate) fn parse_number<'v>(value: Option<&'v Value>) -> ParseResult<&'v Value> {
    match value {
        Some(v @ Value::Number(_)) => Ok(v),
        _ => Err(ParseError::type_mismatch(Expected::Number)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_every_number_representation() {
        for v in [json!(0), json!(-7), json!(u64::MAX), json!(4.25)] {
            assert!(parse_number(Some(&v)).is_ok(), "{v}");
        }
    }

    #[test]
    fn numeric_strings_are_not_numbers() {
        let err = parse_number(Some(&json!("42"))).unwrap_err();
        assert_eq!(err.to_string(), "Invalid type, not a number");
    }
}
