//! Declarative validation rules attached to a field.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A single validation rule, tagged by `"type"` in its JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rule {
    Length(LengthRule),
    OneOf(ChoiceRule),
    Range(RangeRule),
}

impl Rule {
    /// Validator name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Length(_) => LengthRule::NAME,
            Rule::OneOf(_) => ChoiceRule::NAME,
            Rule::Range(_) => RangeRule::NAME,
        }
    }
}

impl From<LengthRule> for Rule {
    fn from(rule: LengthRule) -> Self {
        Rule::Length(rule)
    }
}

impl From<ChoiceRule> for Rule {
    fn from(rule: ChoiceRule) -> Self {
        Rule::OneOf(rule)
    }
}

impl From<RangeRule> for Rule {
    fn from(rule: RangeRule) -> Self {
        Rule::Range(rule)
    }
}

/// Size bounds on a string, list, or nested collection.
///
/// `equal`, when set, wins over both `min` and `max`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equal: Option<u64>,
}

impl LengthRule {
    pub const NAME: &'static str = "Length";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, min: u64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: u64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn equal(mut self, equal: u64) -> Self {
        self.equal = Some(equal);
        self
    }
}

/// Membership in an ordered set of allowed values.
///
/// `labels[i]` is the display label for `choices[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoiceRule {
    pub choices: Vec<Value>,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl ChoiceRule {
    pub const NAME: &'static str = "OneOf";

    pub fn new<I, V>(choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
            labels: Vec::new(),
        }
    }

    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }
}

/// Numeric bounds, each inclusive unless its flag says otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Number>,
    #[serde(default = "inclusive")]
    pub min_inclusive: bool,
    #[serde(default = "inclusive")]
    pub max_inclusive: bool,
}

fn inclusive() -> bool {
    true
}

impl Default for RangeRule {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            min_inclusive: true,
            max_inclusive: true,
        }
    }
}

impl RangeRule {
    pub const NAME: &'static str = "Range";

    /// An unbounded range with both ends inclusive.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, min: impl Into<Number>) -> Self {
        self.min = Some(min.into());
        self
    }

    pub fn max(mut self, max: impl Into<Number>) -> Self {
        self.max = Some(max.into());
        self
    }

    pub fn min_inclusive(mut self, inclusive: bool) -> Self {
        self.min_inclusive = inclusive;
        self
    }

    pub fn max_inclusive(mut self, inclusive: bool) -> Self {
        self.max_inclusive = inclusive;
        self
    }
}
