//! Field schema definitions and the document type registry.
//!
//! Each supported document type is described by a declarative [`FormSchema`]:
//! an ordered list of field definitions driving prompt order, validation and
//! empty-value fallbacks. Adding a document type means adding one registry
//! entry and one template file; no control flow changes anywhere else.

pub mod builtin;
pub mod model;

pub use builtin::{document_schemas, document_type_ids, document_types, schema_for, DocumentTypeInfo};
pub use model::{FieldDefinition, FormSchema, GENERIC_EMPTY_FALLBACK};
