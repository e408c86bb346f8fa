//! Template loading abstraction.

use crate::error::Result;
use crate::render;
use async_trait::async_trait;
use std::collections::BTreeSet;

/// A raw document template, loaded fresh per render.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    /// Document type this template belongs to.
    pub document_type: String,
    /// Raw body containing zero or more `{placeholder}` tokens.
    pub body: String,
}

impl Template {
    /// Returns the placeholder names found in the body.
    pub fn placeholders(&self) -> BTreeSet<String> {
        render::placeholder_names(&self.body)
    }
}

/// An abstract store for template bodies.
///
/// This trait decouples the form controller from the backing catalog (a
/// directory of flat files in the shipped implementation). Loads are bounded,
/// awaited reads; there is no retry logic, a load failure is terminal for
/// that render attempt.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Loads the template for a document type.
    ///
    /// # Errors
    ///
    /// - [`QuillError::TemplateUnavailable`] if the backing resource is
    ///   missing (catalog drift; distinct from an unknown document type)
    /// - [`QuillError::Io`] for any other read failure
    ///
    /// [`QuillError::TemplateUnavailable`]: crate::QuillError::TemplateUnavailable
    /// [`QuillError::Io`]: crate::QuillError::Io
    async fn load(&self, document_type: &str) -> Result<Template>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_are_extracted_from_body() {
        let template = Template {
            document_type: "rules".to_string(),
            body: "# {server_name}\n{rules}\n{server_name}".to_string(),
        };
        let names: Vec<String> = template.placeholders().into_iter().collect();
        assert_eq!(names, vec!["rules".to_string(), "server_name".to_string()]);
    }
}
