//! Builtin document schemas shipped with the engine.
//!
//! These are loaded once on first access and cached for the lifetime of the
//! process. Presentation order of the fields matches the order users are
//! prompted in.

use super::model::{FieldDefinition, FormSchema};
use serde::Serialize;
use std::sync::OnceLock;

/// A document type entry for the selection prompt.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentTypeInfo {
    /// Document type identifier.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
}

/// Static storage for the document schemas (initialized once).
static DOCUMENT_SCHEMAS: OnceLock<Vec<FormSchema>> = OnceLock::new();

/// Returns all supported document schemas.
///
/// The schemas are initialized on first access and cached for subsequent
/// calls. Adding a document type means adding one entry here and one
/// template file to the catalog.
pub fn document_schemas() -> &'static [FormSchema] {
    DOCUMENT_SCHEMAS.get_or_init(|| {
        vec![
            FormSchema {
                document_type: "rules",
                title: "Server Rules",
                fields: vec![
                    FieldDefinition::new("server_name", "Server Name", true, false, 100, None),
                    FieldDefinition::new(
                        "contact_info",
                        "Contact Information",
                        false,
                        false,
                        200,
                        None,
                    ),
                    FieldDefinition::new("rules", "Rules (one per line)", true, true, 2000, None),
                    FieldDefinition::new(
                        "consequences",
                        "Consequences for Violations",
                        false,
                        false,
                        500,
                        Some(
                            "Violations may result in warnings, mutes, or bans at staff discretion.",
                        ),
                    ),
                ],
            },
            FormSchema {
                document_type: "privacy_policy",
                title: "Privacy Policy",
                fields: vec![
                    FieldDefinition::new("server_name", "Server Name", true, false, 100, None),
                    FieldDefinition::new("contact_email", "Contact Email", false, false, 200, None),
                    FieldDefinition::new(
                        "data_collected",
                        "Data Collected (one per line)",
                        true,
                        true,
                        1000,
                        None,
                    ),
                    FieldDefinition::new("data_usage", "How Data is Used", true, false, 1000, None),
                ],
            },
            FormSchema {
                document_type: "terms_of_service",
                title: "Terms of Service",
                fields: vec![
                    FieldDefinition::new("server_name", "Server Name", true, false, 100, None),
                    FieldDefinition::new(
                        "contact_info",
                        "Contact Information",
                        false,
                        false,
                        200,
                        None,
                    ),
                    FieldDefinition::new(
                        "prohibited_activities",
                        "Prohibited Activities (one per line)",
                        true,
                        true,
                        1500,
                        None,
                    ),
                    FieldDefinition::new(
                        "user_obligations",
                        "User Obligations",
                        true,
                        false,
                        1000,
                        None,
                    ),
                ],
            },
            FormSchema {
                document_type: "code_of_conduct",
                title: "Code of Conduct",
                fields: vec![
                    FieldDefinition::new("server_name", "Server Name", true, false, 100, None),
                    FieldDefinition::new(
                        "expected_behavior",
                        "Expected Behavior (one per line)",
                        true,
                        true,
                        1500,
                        None,
                    ),
                    FieldDefinition::new(
                        "reporting_process",
                        "Reporting Process",
                        true,
                        false,
                        500,
                        None,
                    ),
                    FieldDefinition::new(
                        "contact_info",
                        "Contact Information",
                        false,
                        false,
                        200,
                        None,
                    ),
                ],
            },
            FormSchema {
                document_type: "staff_sops",
                title: "Staff SOPs",
                fields: vec![
                    FieldDefinition::new("server_name", "Server Name", true, false, 100, None),
                    FieldDefinition::new(
                        "staff_roles",
                        "Staff Roles (one per line)",
                        true,
                        true,
                        500,
                        None,
                    ),
                    FieldDefinition::new(
                        "procedures",
                        "Key Procedures (one per line)",
                        true,
                        true,
                        1500,
                        None,
                    ),
                    FieldDefinition::new(
                        "escalation_path",
                        "Escalation Path",
                        true,
                        false,
                        500,
                        None,
                    ),
                ],
            },
            FormSchema {
                document_type: "moderation_guidelines",
                title: "Moderation Guidelines",
                fields: vec![
                    FieldDefinition::new("server_name", "Server Name", true, false, 100, None),
                    FieldDefinition::new(
                        "moderation_actions",
                        "Moderation Actions (one per line)",
                        true,
                        true,
                        500,
                        None,
                    ),
                    FieldDefinition::new(
                        "warning_system",
                        "Warning System",
                        true,
                        false,
                        500,
                        None,
                    ),
                    FieldDefinition::new("ban_criteria", "Ban Criteria", true, false, 500, None),
                ],
            },
            FormSchema {
                document_type: "appeal_process",
                title: "Appeal Process",
                fields: vec![
                    FieldDefinition::new("server_name", "Server Name", true, false, 100, None),
                    FieldDefinition::new(
                        "appeal_requirements",
                        "Appeal Requirements",
                        true,
                        false,
                        500,
                        None,
                    ),
                    FieldDefinition::new(
                        "review_process",
                        "Review Process",
                        true,
                        false,
                        500,
                        None,
                    ),
                    FieldDefinition::new("timelines", "Timelines", true, false, 500, None),
                    FieldDefinition::new(
                        "contact_info",
                        "Contact Information",
                        false,
                        false,
                        200,
                        None,
                    ),
                ],
            },
        ]
    })
}

/// Finds the schema for a document type.
pub fn schema_for(document_type: &str) -> Option<&'static FormSchema> {
    document_schemas()
        .iter()
        .find(|schema| schema.document_type == document_type)
}

/// Returns the valid document type identifiers.
pub fn document_type_ids() -> Vec<String> {
    document_schemas()
        .iter()
        .map(|schema| schema.document_type.to_string())
        .collect()
}

/// Returns the document types available for selection.
pub fn document_types() -> Vec<DocumentTypeInfo> {
    document_schemas()
        .iter()
        .map(|schema| DocumentTypeInfo {
            id: schema.document_type,
            title: schema.title,
        })
        .collect()
}
