//! Integration tests for rule translation.

use rule_schema::{
    translate, translate_all, translate_length, translate_one_of, translate_range, ChoiceRule,
    Field, FieldKind, Fragment, LengthRule, RangeRule, Rule, SchemaContext, TranslateError,
    TranslateOptions,
};
use serde_json::{json, Value};

fn fragment(value: Value) -> Fragment {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn ctx() -> SchemaContext {
    SchemaContext::named("Test")
}

// === Length Rules ===

mod length {
    use super::*;

    #[test]
    fn string_bounds() {
        let mut frag = fragment(json!({ "type": "string" }));
        translate_length(
            &mut frag,
            &Field::new("nick", FieldKind::String),
            &LengthRule::new().min(2).max(5),
            &ctx(),
        )
        .unwrap();

        assert_eq!(
            Value::Object(frag),
            json!({ "type": "string", "minLength": 2, "maxLength": 5 })
        );
    }

    #[test]
    fn list_equal_overrides_prior_bounds() {
        let mut frag = fragment(json!({ "type": "array", "minItems": 1, "maxItems": 8 }));
        translate_length(
            &mut frag,
            &Field::new("tags", FieldKind::List),
            &LengthRule::new().equal(3),
            &ctx(),
        )
        .unwrap();

        assert_eq!(frag["minItems"], json!(3));
        assert_eq!(frag["maxItems"], json!(3));
    }

    #[test]
    fn number_field_rejected_without_mutation() {
        let before = json!({ "type": "number", "minimum": 1 });
        let mut frag = fragment(before.clone());
        let err = translate_length(
            &mut frag,
            &Field::new("age", FieldKind::Number),
            &LengthRule::new().min(1).max(3),
            &ctx(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            TranslateError::UnsupportedCombination {
                rule: "Length",
                kind: FieldKind::Number,
                ..
            }
        ));
        assert_eq!(Value::Object(frag), before);
    }
}

// === Choice Rules ===

mod one_of {
    use super::*;

    #[test]
    fn enum_and_names() {
        let mut frag = fragment(json!({ "type": "string" }));
        translate_one_of(
            &mut frag,
            &Field::new("letter", FieldKind::Other),
            &ChoiceRule::new(["a", "b"]).labels(["Alpha", "Beta"]),
            &ctx(),
        )
        .unwrap();

        assert_eq!(frag["enum"], json!(["a", "b"]));
        assert_eq!(frag["enumNames"], json!(["Alpha", "Beta"]));
    }

    #[test]
    fn lists_are_not_shared_with_rule() {
        let mut rule = ChoiceRule::new(["a", "b"]).labels(["Alpha", "Beta"]);
        let mut frag = Fragment::new();
        translate_one_of(
            &mut frag,
            &Field::new("letter", FieldKind::String),
            &rule,
            &ctx(),
        )
        .unwrap();

        rule.choices.push(json!("c"));
        rule.labels.push("Gamma".into());
        assert_eq!(frag["enum"], json!(["a", "b"]));
        assert_eq!(frag["enumNames"], json!(["Alpha", "Beta"]));

        frag["enum"].as_array_mut().unwrap().clear();
        assert_eq!(rule.choices.len(), 3);
    }

    #[test]
    fn mixed_value_types() {
        let mut frag = Fragment::new();
        translate_one_of(
            &mut frag,
            &Field::new("code", FieldKind::Number),
            &ChoiceRule::new([json!(1), json!(2.5), json!(null)]),
            &ctx(),
        )
        .unwrap();

        assert_eq!(frag["enum"], json!([1, 2.5, null]));
        assert_eq!(frag["enumNames"], json!([]));
    }
}

// === Range Rules ===

mod range {
    use super::*;

    #[test]
    fn inclusive_min_exclusive_max() {
        let mut frag = fragment(json!({ "type": "number" }));
        translate_range(
            &mut frag,
            &Field::new("ratio", FieldKind::Number),
            &RangeRule::new().min(0).max(10).max_inclusive(false),
            &ctx(),
        )
        .unwrap();

        assert_eq!(
            Value::Object(frag.clone()),
            json!({ "type": "number", "minimum": 0, "exclusiveMaximum": 10 })
        );
        assert!(frag.get("maximum").is_none());
    }

    #[test]
    fn string_field_rejected_without_mutation() {
        let before = json!({ "type": "string", "minLength": 1 });
        let mut frag = fragment(before.clone());
        let err = translate_range(
            &mut frag,
            &Field::new("name", FieldKind::String),
            &RangeRule::new().min(1),
            &ctx(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            TranslateError::UnsupportedCombination { rule: "Range", .. }
        ));
        assert_eq!(Value::Object(frag), before);
    }

    #[test]
    fn deserialized_rule_defaults_inclusive() {
        let rule: Rule = serde_json::from_value(json!({
            "type": "range", "min": 1, "max": 2, "min_inclusive": false
        }))
        .unwrap();
        let mut frag = Fragment::new();
        translate(
            &mut frag,
            &Field::new("n", FieldKind::Integer),
            &rule,
            &ctx(),
        )
        .unwrap();

        assert_eq!(
            Value::Object(frag),
            json!({ "exclusiveMinimum": 1, "maximum": 2 })
        );
    }
}

// === Shared Properties ===

mod properties {
    use super::*;

    fn cases() -> Vec<(Field, Rule)> {
        vec![
            (
                Field::new("nick", FieldKind::String),
                LengthRule::new().min(2).max(5).into(),
            ),
            (
                Field::new("tags", FieldKind::Nested),
                LengthRule::new().equal(2).into(),
            ),
            (
                Field::new("color", FieldKind::String),
                ChoiceRule::new(["r", "g"]).labels(["Red", "Green"]).into(),
            ),
            (
                Field::new("age", FieldKind::Integer),
                RangeRule::new().min(0).max(99).min_inclusive(false).into(),
            ),
        ]
    }

    #[test]
    fn reapplying_is_idempotent() {
        for (field, rule) in cases() {
            let mut frag = Fragment::new();
            translate(&mut frag, &field, &rule, &ctx()).unwrap();
            let once = frag.clone();
            translate(&mut frag, &field, &rule, &ctx()).unwrap();
            assert_eq!(frag, once, "{} not idempotent", rule.name());
        }
    }

    #[test]
    fn unrelated_keywords_survive() {
        for (field, rule) in cases() {
            let mut frag = fragment(json!({
                "title": "Kept",
                "description": "untouched",
                "format": "custom"
            }));
            translate(&mut frag, &field, &rule, &ctx()).unwrap();
            assert_eq!(frag["title"], json!("Kept"));
            assert_eq!(frag["description"], json!("untouched"));
            assert_eq!(frag["format"], json!("custom"));
        }
    }

    #[test]
    fn declaration_order_decides_overwrites() {
        let field = Field::new("n", FieldKind::Number);
        let rules = vec![
            Rule::from(RangeRule::new().min(1).max(100)),
            Rule::from(RangeRule::new().max(50)),
        ];
        let mut frag = Fragment::new();
        let outcome =
            translate_all(&mut frag, &field, &rules, &ctx(), &TranslateOptions::new()).unwrap();

        assert_eq!(outcome.applied, 2);
        assert_eq!(Value::Object(frag), json!({ "minimum": 1, "maximum": 50 }));
    }
}

// === Emitted Constraints Hold ===

mod enforcement {
    use super::*;

    fn compile(field: &Field, base: Value, rule: &Rule) -> jsonschema::Validator {
        let mut frag = fragment(base);
        translate(&mut frag, field, rule, &ctx()).unwrap();
        jsonschema::validator_for(&Value::Object(frag)).unwrap()
    }

    #[test]
    fn string_length() {
        let v = compile(
            &Field::new("nick", FieldKind::String),
            json!({ "type": "string" }),
            &Rule::from(LengthRule::new().min(2).max(3)),
        );
        assert!(!v.is_valid(&json!("a")));
        assert!(v.is_valid(&json!("ab")));
        assert!(v.is_valid(&json!("abc")));
        assert!(!v.is_valid(&json!("abcd")));
    }

    #[test]
    fn list_items() {
        let v = compile(
            &Field::new("tags", FieldKind::List),
            json!({ "type": "array" }),
            &Rule::from(LengthRule::new().equal(2)),
        );
        assert!(!v.is_valid(&json!([1])));
        assert!(v.is_valid(&json!([1, 2])));
        assert!(!v.is_valid(&json!([1, 2, 3])));
    }

    #[test]
    fn exclusive_range() {
        let v = compile(
            &Field::new("ratio", FieldKind::Number),
            json!({ "type": "number" }),
            &Rule::from(RangeRule::new().min(0).max(10).max_inclusive(false)),
        );
        assert!(v.is_valid(&json!(0)));
        assert!(v.is_valid(&json!(9.99)));
        assert!(!v.is_valid(&json!(10)));
        assert!(!v.is_valid(&json!(-1)));
    }

    #[test]
    fn choices() {
        let v = compile(
            &Field::new("color", FieldKind::String),
            json!({ "type": "string" }),
            &Rule::from(ChoiceRule::new(["red", "green"]).labels(["Red", "Green"])),
        );
        assert!(v.is_valid(&json!("red")));
        assert!(!v.is_valid(&json!("blue")));
    }
}
