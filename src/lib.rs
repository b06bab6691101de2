//! Rule Schema
//!
//! Translates declarative field validation rules into JSON Schema constraint
//! keywords.
//!
//! A schema walker derives a base fragment (`type`, `format`, ...) for each
//! field and then hands each of the field's rules to a translator, which
//! annotates the fragment in place.
//!
//! # Example
//!
//! ```
//! use rule_schema::{translate, Field, FieldKind, Fragment, LengthRule, Rule, SchemaContext};
//! use serde_json::{json, Value};
//!
//! let mut fragment = Fragment::new();
//! fragment.insert("type".into(), json!("string"));
//!
//! let field = Field::new("nick", FieldKind::String);
//! let rule = Rule::from(LengthRule::new().min(2).max(5));
//! translate(&mut fragment, &field, &rule, &SchemaContext::default()).unwrap();
//!
//! assert_eq!(
//!     Value::Object(fragment),
//!     json!({ "type": "string", "minLength": 2, "maxLength": 5 })
//! );
//! ```
//!
//! # Keywords
//!
//! | Rule | Field kind | Keywords |
//! |------|------------|----------|
//! | `Length` | string | `minLength`, `maxLength` |
//! | `Length` | list, nested | `minItems`, `maxItems` |
//! | `OneOf` | any | `enum`, `enumNames` |
//! | `Range` | number, integer, float, decimal | `minimum`/`exclusiveMinimum`, `maximum`/`exclusiveMaximum` |
//!
//! Any other combination fails with
//! [`TranslateError::UnsupportedCombination`] and leaves the fragment as it was.

mod choice;
mod dispatch;
mod document;
mod error;
mod length;
mod range;
mod rules;
mod types;

pub use choice::translate_one_of;
pub use dispatch::{translate, translate_all, Outcome};
pub use document::{
    annotate_document, load_document, load_document_str, Annotated, FieldDocument, FieldSpec,
};
pub use error::{LoadError, TranslateError};
pub use length::translate_length;
pub use range::translate_range;
pub use rules::{ChoiceRule, LengthRule, RangeRule, Rule};
pub use types::{Field, FieldKind, Fragment, SchemaContext, TranslateOptions, UnsupportedPolicy};
