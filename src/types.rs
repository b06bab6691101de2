//! Core types shared by the rule translators.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A partial JSON Schema object for one field, keyed by keyword.
pub type Fragment = Map<String, Value>;

/// Category of a model field.
///
/// Only the category decides which JSON Schema keywords a rule can map to.
/// Unknown tags deserialize to [`FieldKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    List,
    Nested,
    Number,
    Integer,
    Float,
    Decimal,
    #[serde(other)]
    Other,
}

impl FieldKind {
    /// True for `Number` and its subcategories.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FieldKind::Number | FieldKind::Integer | FieldKind::Float | FieldKind::Decimal
        )
    }

    /// Lowercase name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::List => "list",
            FieldKind::Nested => "nested",
            FieldKind::Number => "number",
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::Decimal => "decimal",
            FieldKind::Other => "other",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor of the field a rule is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// The schema that owns the field being translated.
///
/// Translators accept it but do not read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaContext {
    pub name: Option<String>,
}

impl SchemaContext {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// What the dispatcher does when a rule cannot be expressed for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsupportedPolicy {
    /// Stop at the first unsupported rule and return its error.
    #[default]
    Abort,
    /// Log the rule, record it, and continue with the next one.
    Skip,
}

/// Options for applying a sequence of rules.
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    pub on_unsupported: UnsupportedPolicy,
}

impl TranslateOptions {
    /// Options that abort on the first unsupported rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip unsupported field/rule combinations instead of aborting.
    pub fn skip_unsupported(mut self, skip: bool) -> Self {
        self.on_unsupported = if skip {
            UnsupportedPolicy::Skip
        } else {
            UnsupportedPolicy::Abort
        };
        self
    }
}
