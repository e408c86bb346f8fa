//! Form schema domain models.

use crate::error::{QuillError, Result};
use crate::render::FieldValue;
use serde::Serialize;

/// Fallback applied to an empty optional field that does not declare its own.
pub const GENERIC_EMPTY_FALLBACK: &str = "Contact server administrators";

/// A single field of a document form.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDefinition {
    /// Field name, doubling as the `{name}` placeholder key in templates.
    pub name: &'static str,
    /// Human-readable prompt label shown by the presentation layer.
    pub label: &'static str,
    /// Whether a non-empty value must be collected before rendering.
    pub required: bool,
    /// Whether submitted text is split into an ordered list of lines.
    pub multiline: bool,
    /// Input length cap, enforced by the presentation layer.
    pub max_length: usize,
    /// Replacement text for an empty optional value.
    pub empty_fallback: Option<&'static str>,
}

impl FieldDefinition {
    /// Creates a new field definition.
    pub const fn new(
        name: &'static str,
        label: &'static str,
        required: bool,
        multiline: bool,
        max_length: usize,
        empty_fallback: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            label,
            required,
            multiline,
            max_length,
            empty_fallback,
        }
    }

    /// Validates and normalizes a submitted raw value.
    ///
    /// A required field rejects values that are empty after trimming. An
    /// optional empty value is replaced by the field's fallback text before
    /// storage. Multiline fields split on line breaks into ordered, trimmed,
    /// non-empty lines. Values beyond `max_length` are accepted as-is: input
    /// clamping belongs to the presentation layer and overlong input must
    /// never fail here.
    pub fn normalize(&self, raw: &str) -> Result<FieldValue> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            if self.required {
                return Err(QuillError::validation(
                    self.name,
                    "required field must not be empty",
                ));
            }
            return Ok(self.fallback_value());
        }

        if self.multiline {
            let lines = raw
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect();
            return Ok(FieldValue::Lines(lines));
        }

        Ok(FieldValue::Text(trimmed.to_string()))
    }

    /// The value used when an optional field is never submitted at all.
    pub fn fallback_value(&self) -> FieldValue {
        FieldValue::Text(
            self.empty_fallback
                .unwrap_or(GENERIC_EMPTY_FALLBACK)
                .to_string(),
        )
    }
}

/// Ordered field definitions for one document type.
///
/// Field order defines presentation order only; rendering does not depend on
/// it.
#[derive(Debug, Clone, Serialize)]
pub struct FormSchema {
    /// Document type identifier, unique across the registry and the catalog.
    pub document_type: &'static str,
    /// Display title for the selection prompt.
    pub title: &'static str,
    /// Fields in presentation order.
    pub fields: Vec<FieldDefinition>,
}

impl FormSchema {
    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Iterates the required fields in presentation order.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter().filter(|field| field.required)
    }

    /// Iterates the optional fields in presentation order.
    pub fn optional_fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter().filter(|field| !field.required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED_SCALAR: FieldDefinition =
        FieldDefinition::new("server_name", "Server Name", true, false, 100, None);
    const OPTIONAL_SCALAR: FieldDefinition =
        FieldDefinition::new("contact_info", "Contact Information", false, false, 200, None);
    const REQUIRED_MULTILINE: FieldDefinition =
        FieldDefinition::new("rules", "Rules (one per line)", true, true, 2000, None);

    #[test]
    fn test_required_field_rejects_empty_value() {
        let err = REQUIRED_SCALAR.normalize("   ").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("server_name"));
    }

    #[test]
    fn test_optional_field_falls_back_when_empty() {
        let value = OPTIONAL_SCALAR.normalize("").unwrap();
        assert_eq!(value, FieldValue::Text(GENERIC_EMPTY_FALLBACK.to_string()));
    }

    #[test]
    fn test_optional_field_keeps_explicit_fallback() {
        let field = FieldDefinition::new(
            "consequences",
            "Consequences",
            false,
            false,
            500,
            Some("Staff discretion applies."),
        );
        let value = field.normalize(" \n ").unwrap();
        assert_eq!(value, FieldValue::Text("Staff discretion applies.".to_string()));
    }

    #[test]
    fn test_multiline_splitting_drops_blank_lines_and_trims() {
        let value = REQUIRED_MULTILINE.normalize("a\n\nb\n ").unwrap();
        assert_eq!(
            value,
            FieldValue::Lines(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_scalar_value_is_trimmed() {
        let value = REQUIRED_SCALAR.normalize("  Foo  ").unwrap();
        assert_eq!(value, FieldValue::Text("Foo".to_string()));
    }

    #[test]
    fn test_overlong_value_is_accepted() {
        let long = "x".repeat(REQUIRED_SCALAR.max_length * 3);
        let value = REQUIRED_SCALAR.normalize(&long).unwrap();
        assert_eq!(value, FieldValue::Text(long));
    }
}
