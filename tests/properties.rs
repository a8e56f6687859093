use json_zod::{z, ErrorKind, Schema};
use proptest::prelude::*;
use serde_json::Value;

/// Arbitrary JSON, floats included.
fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| serde_json::json!(n)),
        (-1.0e9f64..1.0e9).prop_map(|f| serde_json::json!(f)),
        "[a-zA-Z0-9_ ]{0,20}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn sample_schemas() -> Vec<Schema> {
    vec![
        z::string(),
        z::number(),
        z::unknown(),
        z::array(z::union([z::number(), z::string()])),
        z::object([("a", z::number().optional())]),
        z::enum_(["x", "y"]).nullable(),
    ]
}

proptest! {
    /// Primitives accept exactly their own JSON type and hand the value back.
    #[test]
    fn primitives_match_json_type(v in json_value()) {
        prop_assert_eq!(z::string().parse(&v).is_ok(), v.is_string());
        prop_assert_eq!(z::number().parse(&v).is_ok(), v.is_number());
        prop_assert_eq!(z::unknown().parse(&v), Ok(&v));
    }

    /// `optional` changes nothing for present values.
    #[test]
    fn optional_is_transparent_for_present_values(v in json_value()) {
        for s in sample_schemas() {
            let wrapped = s.clone().optional();
            prop_assert_eq!(wrapped.parse(&v).is_ok(), s.parse(&v).is_ok());
            prop_assert_eq!(wrapped.parse_maybe(None), Ok(None));
        }
    }

    /// Parsing an accepted value again accepts it again, unchanged.
    #[test]
    fn parse_is_idempotent(v in json_value()) {
        for s in sample_schemas() {
            if let Ok(once) = s.parse(&v) {
                let twice = s.parse(once);
                prop_assert_eq!(twice, Ok(&v));
            }
        }
    }

    /// Undeclared keys never matter.
    #[test]
    fn extra_keys_are_ignored(a in any::<i32>(), extra in json_value(), key in "[b-z]{1,6}") {
        let s = z::object([("a", z::number())]);
        let mut v = serde_json::json!({ "a": a });
        v.as_object_mut().unwrap().insert(key, extra);
        prop_assert!(s.parse(&v).is_ok());
    }

    /// A missing required field is reported whatever the other fields hold.
    #[test]
    fn missing_field_wins(other in json_value()) {
        let s = z::object([("first", z::number()), ("second", z::string())]);
        let v = serde_json::json!({ "first": other });
        let err = s.parse(&v).unwrap_err();
        prop_assert_eq!(err.kind(), &ErrorKind::MissingField { field: "second".into() });
    }

    /// The first bad element is the one reported; earlier ones are fine.
    #[test]
    fn array_fails_on_first_bad_index(good in prop::collection::vec(any::<i32>(), 0..8), tail in prop::collection::vec("[a-z]{0,4}", 1..4)) {
        let mut xs: Vec<Value> = good.iter().map(|n| serde_json::json!(n)).collect();
        xs.extend(tail.into_iter().map(Value::String));
        let err = z::array(z::number()).parse(&Value::Array(xs)).unwrap_err();
        prop_assert_eq!(err.path(), &[json_zod::PathSegment::Index(good.len())]);
    }
}
