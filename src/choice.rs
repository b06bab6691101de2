//! `OneOf` rules as `enum` plus `enumNames`.

use serde_json::Value;

use crate::error::TranslateError;
use crate::rules::ChoiceRule;
use crate::types::{Field, Fragment, SchemaContext};

/// Set `enum` to the rule's choices and `enumNames` to its labels.
///
/// Both lists are copied, so the fragment shares nothing with the rule.
/// Applies to every field kind. A rule without labels yields an empty
/// `enumNames`.
///
/// # Errors
///
/// Returns `TranslateError::LabelMismatch` if labels are given but their
/// count differs from the number of choices.
pub fn translate_one_of(
    fragment: &mut Fragment,
    field: &Field,
    rule: &ChoiceRule,
    _ctx: &SchemaContext,
) -> Result<(), TranslateError> {
    if !rule.labels.is_empty() && rule.labels.len() != rule.choices.len() {
        return Err(TranslateError::LabelMismatch {
            field: field.name.clone(),
            choices: rule.choices.len(),
            labels: rule.labels.len(),
        });
    }

    fragment.insert("enum".to_string(), Value::Array(rule.choices.clone()));
    fragment.insert(
        "enumNames".to_string(),
        Value::Array(rule.labels.iter().cloned().map(Value::String).collect()),
    );

    Ok(())
}
