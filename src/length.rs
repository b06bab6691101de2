//! `Length` rules as `minLength`/`maxLength` or `minItems`/`maxItems`.

use serde_json::Value;

use crate::error::TranslateError;
use crate::rules::LengthRule;
use crate::types::{Field, FieldKind, Fragment, SchemaContext};

const REQUIRED: &str = "a string, list, or nested field";

/// Add size bounds for a string, list, or nested field.
///
/// Strings get `minLength`/`maxLength`; lists and nested collections get
/// `minItems`/`maxItems`. `equal` is applied last and sets both keywords.
/// A bound of `0` is emitted like any other value.
///
/// # Errors
///
/// Returns `TranslateError::UnsupportedCombination` for any other field kind.
/// The fragment is untouched in that case.
pub fn translate_length(
    fragment: &mut Fragment,
    field: &Field,
    rule: &LengthRule,
    _ctx: &SchemaContext,
) -> Result<(), TranslateError> {
    let (min_key, max_key) = keywords_for(field)?;

    if let Some(min) = rule.min {
        fragment.insert(min_key.to_string(), Value::from(min));
    }

    if let Some(max) = rule.max {
        fragment.insert(max_key.to_string(), Value::from(max));
    }

    if let Some(equal) = rule.equal {
        fragment.insert(min_key.to_string(), Value::from(equal));
        fragment.insert(max_key.to_string(), Value::from(equal));
    }

    Ok(())
}

fn keywords_for(field: &Field) -> Result<(&'static str, &'static str), TranslateError> {
    match field.kind {
        FieldKind::String => Ok(("minLength", "maxLength")),
        FieldKind::List | FieldKind::Nested => Ok(("minItems", "maxItems")),
        kind => Err(TranslateError::UnsupportedCombination {
            rule: LengthRule::NAME,
            required: REQUIRED,
            field: field.name.clone(),
            kind,
        }),
    }
}
