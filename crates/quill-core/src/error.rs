//! Error types for the Quill engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Quill engine.
///
/// Every failure is recovered at the form controller boundary and handed to
/// the presentation layer as one of these typed variants, so the variants
/// distinguish user errors (bad document type, bad field value) from
/// operator-actionable faults (missing template file).
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum QuillError {
    /// The requested document type has no schema entry.
    #[error("Unknown document type '{requested}' (valid types: {})", .available.join(", "))]
    UnknownDocumentType {
        requested: String,
        available: Vec<String>,
    },

    /// A submitted field value failed validation.
    #[error("Invalid value for field '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// The backing template resource for a known document type is missing.
    ///
    /// Distinct from [`QuillError::UnknownDocumentType`]: the schema exists
    /// but the catalog has drifted, which is an operator problem rather than
    /// a user mistake.
    #[error("Template unavailable for document type '{document_type}'")]
    TemplateUnavailable { document_type: String },

    /// Fields were submitted without an open form session.
    #[error("No open form session for owner {owner}")]
    SessionNotFound { owner: u64 },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl QuillError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an UnknownDocumentType error
    pub fn unknown_document_type(
        requested: impl Into<String>,
        available: Vec<String>,
    ) -> Self {
        Self::UnknownDocumentType {
            requested: requested.into(),
            available,
        }
    }

    /// Creates a Validation error
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a TemplateUnavailable error
    pub fn template_unavailable(document_type: impl Into<String>) -> Self {
        Self::TemplateUnavailable {
            document_type: document_type.into(),
        }
    }

    /// Creates a SessionNotFound error
    pub fn session_not_found(owner: u64) -> Self {
        Self::SessionNotFound { owner }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an UnknownDocumentType error
    pub fn is_unknown_document_type(&self) -> bool {
        matches!(self, Self::UnknownDocumentType { .. })
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a TemplateUnavailable error
    pub fn is_template_unavailable(&self) -> bool {
        matches!(self, Self::TemplateUnavailable { .. })
    }

    /// Check if this is a SessionNotFound error
    pub fn is_session_not_found(&self) -> bool {
        matches!(self, Self::SessionNotFound { .. })
    }

    /// Check if this error is a user mistake rather than an engine fault.
    ///
    /// User errors are recoverable by resubmitting corrected input; everything
    /// else should be surfaced to an operator.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownDocumentType { .. }
                | Self::Validation { .. }
                | Self::SessionNotFound { .. }
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for QuillError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for QuillError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for QuillError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for QuillError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error (transitional, should be removed eventually)
impl From<anyhow::Error> for QuillError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Conversion from String (for error messages)
impl From<String> for QuillError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, QuillError>`.
pub type Result<T> = std::result::Result<T, QuillError>;
