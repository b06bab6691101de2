//! Rule dispatch - routes each rule to its translator.

use crate::choice::translate_one_of;
use crate::error::TranslateError;
use crate::length::translate_length;
use crate::range::translate_range;
use crate::rules::Rule;
use crate::types::{Field, Fragment, SchemaContext, TranslateOptions, UnsupportedPolicy};

/// Result of applying a sequence of rules to one fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Number of rules translated into the fragment.
    pub applied: usize,
    /// Unsupported rules passed over under `UnsupportedPolicy::Skip`.
    pub skipped: Vec<TranslateError>,
}

/// Translate a single rule into `fragment`.
///
/// # Errors
///
/// Propagates the translator's error unchanged.
pub fn translate(
    fragment: &mut Fragment,
    field: &Field,
    rule: &Rule,
    ctx: &SchemaContext,
) -> Result<(), TranslateError> {
    match rule {
        Rule::Length(rule) => translate_length(fragment, field, rule, ctx),
        Rule::OneOf(rule) => translate_one_of(fragment, field, rule, ctx),
        Rule::Range(rule) => translate_range(fragment, field, rule, ctx),
    }
}

/// Translate `rules` into `fragment` in declaration order.
///
/// Later rules overwrite keywords set by earlier ones in the same namespace.
/// With `UnsupportedPolicy::Skip`, unsupported field/rule combinations are
/// collected in [`Outcome::skipped`]; any other error still aborts.
///
/// # Errors
///
/// Returns the first error that the policy does not allow skipping.
pub fn translate_all(
    fragment: &mut Fragment,
    field: &Field,
    rules: &[Rule],
    ctx: &SchemaContext,
    options: &TranslateOptions,
) -> Result<Outcome, TranslateError> {
    let mut outcome = Outcome::default();
    let schema = ctx.name.as_deref().unwrap_or("<anonymous>");

    for rule in rules {
        match translate(fragment, field, rule, ctx) {
            Ok(()) => {
                tracing::debug!(schema, field = %field.name, rule = rule.name(), "applied rule");
                outcome.applied += 1;
            }
            Err(err)
                if err.is_unsupported() && options.on_unsupported == UnsupportedPolicy::Skip =>
            {
                tracing::warn!(schema, field = %field.name, rule = rule.name(), "skipping rule: {}", err);
                outcome.skipped.push(err);
            }
            Err(err) => return Err(err),
        }
    }

    Ok(outcome)
}
