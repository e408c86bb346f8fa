//! Placeholder substitution for document templates.
//!
//! Rendering is a total function: any template body combined with any value
//! map produces output, and no `{placeholder}` token ever survives into the
//! final text. Failures here would be unrecoverable mid-form, so the design
//! keeps this pass infallible and pushes all validation upstream.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Sentinel rendered in place of a placeholder that has no value.
pub const MISSING_VALUE: &str = "N/A";

/// Sentinel rendered for an empty list value.
pub const EMPTY_LIST: &str = "None";

/// Grammar of a placeholder token: braces around one or more non-brace characters.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^{}]+\}").expect("placeholder pattern is valid"));

/// A collected field value ready for substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A plain scalar value, rendered verbatim.
    Text(String),
    /// An ordered list, rendered as a bulleted block.
    Lines(Vec<String>),
}

impl FieldValue {
    /// Formats the value as it appears in the rendered document.
    fn to_rendered(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Lines(items) if items.is_empty() => EMPTY_LIST.to_string(),
            FieldValue::Lines(items) => items
                .iter()
                .map(|item| format!("- {item}"))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Substitutes collected values into a template body.
///
/// Every `{name}` token with a matching key in `values` is replaced (all
/// occurrences). Tokens left over afterwards, whatever their origin, are
/// replaced with [`MISSING_VALUE`] so schema/template drift never leaks a raw
/// placeholder to the end user.
///
/// Substitution order across keys is unspecified; schemas keep field names
/// non-overlapping so the result does not depend on it.
pub fn render(template: &str, values: &HashMap<String, FieldValue>) -> String {
    let mut document = template.to_string();

    for (name, value) in values {
        let token = format!("{{{name}}}");
        if document.contains(&token) {
            document = document.replace(&token, &value.to_rendered());
        }
    }

    PLACEHOLDER
        .replace_all(&document, MISSING_VALUE)
        .into_owned()
}

/// Returns the set of placeholder names appearing in a template body.
pub fn placeholder_names(template: &str) -> BTreeSet<String> {
    PLACEHOLDER
        .find_iter(template)
        .map(|token| {
            let inner = &token.as_str()[1..token.as_str().len() - 1];
            inner.to_string()
        })
        .collect()
}
