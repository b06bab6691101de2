//! `Range` rules as inclusive or exclusive numeric bounds.

use serde_json::Value;

use crate::error::TranslateError;
use crate::rules::RangeRule;
use crate::types::{Field, Fragment, SchemaContext};

const REQUIRED: &str = "a numeric field";

/// Add `minimum`/`maximum` or their exclusive forms to a numeric field.
///
/// Exclusive bounds are written as `exclusiveMinimum`/`exclusiveMaximum`
/// holding the bound itself, not as boolean modifiers. A bound of `0` counts
/// as present.
///
/// # Errors
///
/// Returns `TranslateError::UnsupportedCombination` if the field is not
/// `Number` or one of its subcategories.
pub fn translate_range(
    fragment: &mut Fragment,
    field: &Field,
    rule: &RangeRule,
    _ctx: &SchemaContext,
) -> Result<(), TranslateError> {
    if !field.kind.is_numeric() {
        return Err(TranslateError::UnsupportedCombination {
            rule: RangeRule::NAME,
            required: REQUIRED,
            field: field.name.clone(),
            kind: field.kind,
        });
    }

    if let Some(min) = &rule.min {
        let key = if rule.min_inclusive {
            "minimum"
        } else {
            "exclusiveMinimum"
        };
        fragment.insert(key.to_string(), Value::Number(min.clone()));
    }

    if let Some(max) = &rule.max {
        let key = if rule.max_inclusive {
            "maximum"
        } else {
            "exclusiveMaximum"
        };
        fragment.insert(key.to_string(), Value::Number(max.clone()));
    }

    Ok(())
}
