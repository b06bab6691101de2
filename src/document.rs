//! Field documents - JSON descriptions of fields, base fragments, and rules.
//!
//! ```json
//! {
//!   "name": "User",
//!   "fields": [
//!     { "name": "nick", "kind": "string", "schema": { "type": "string" },
//!       "rules": [{ "type": "length", "min": 2, "max": 5 }] }
//!   ]
//! }
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::dispatch::translate_all;
use crate::error::{LoadError, TranslateError};
use crate::rules::Rule;
use crate::types::{Field, FieldKind, Fragment, SchemaContext, TranslateOptions};

/// A schema's worth of fields to annotate.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDocument {
    #[serde(default)]
    pub name: Option<String>,
    pub fields: Vec<FieldSpec>,
}

/// One field: its category, the base fragment derived for it, and its rules.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub schema: Fragment,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// Annotated fragments keyed by field name, in document order.
#[derive(Debug, Clone, Default)]
pub struct Annotated {
    pub fragments: Map<String, Value>,
    /// Rules skipped under `UnsupportedPolicy::Skip`, keyed by field name.
    /// Fields with nothing skipped have no entry.
    pub skipped: BTreeMap<String, Vec<TranslateError>>,
}

/// Load a field document from a file path.
///
/// # Errors
///
/// Returns `LoadError::FileNotFound` if the file doesn't exist,
/// or `LoadError::InvalidJson` if it isn't a valid document.
pub fn load_document(path: &Path) -> Result<FieldDocument, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    load_document_str(&content)
}

/// Load a field document from a JSON string.
///
/// # Errors
///
/// Returns `LoadError::InvalidJson` if the string isn't a valid document.
pub fn load_document_str(content: &str) -> Result<FieldDocument, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::InvalidJson { source })
}

/// Apply every field's rules to a copy of its base fragment.
///
/// # Errors
///
/// Returns `TranslateError::DuplicateField` before translating anything if two
/// fields share a name, otherwise the first `TranslateError` that `options`
/// does not allow skipping.
pub fn annotate_document(
    doc: &FieldDocument,
    options: &TranslateOptions,
) -> Result<Annotated, TranslateError> {
    let mut seen = HashSet::new();
    if let Some(dup) = doc.fields.iter().find(|spec| !seen.insert(spec.name.as_str())) {
        return Err(TranslateError::DuplicateField {
            field: dup.name.clone(),
        });
    }

    let ctx = SchemaContext {
        name: doc.name.clone(),
    };
    let mut annotated = Annotated::default();

    for spec in &doc.fields {
        let field = Field::new(spec.name.clone(), spec.kind);
        let mut fragment = spec.schema.clone();
        let outcome = translate_all(&mut fragment, &field, &spec.rules, &ctx, options)?;
        if !outcome.skipped.is_empty() {
            annotated.skipped.insert(spec.name.clone(), outcome.skipped);
        }
        annotated
            .fragments
            .insert(spec.name.clone(), Value::Object(fragment));
    }

    Ok(annotated)
}
