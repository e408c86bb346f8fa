//! Parity checks between the schema registry and the shipped template
//! catalog. These catch drift before it surfaces to a user as a broken
//! document type.

use quill_core::schema;
use quill_core::template::TemplateStore;
use quill_infrastructure::DirTemplateStore;
use std::collections::BTreeSet;
use std::path::PathBuf;

fn shipped_catalog() -> DirTemplateStore {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../templates");
    DirTemplateStore::new(dir)
}

#[tokio::test]
async fn test_every_schema_has_a_loadable_template() {
    let store = shipped_catalog();

    for schema in schema::document_schemas() {
        let template = store
            .load(schema.document_type)
            .await
            .unwrap_or_else(|e| panic!("template for '{}' failed to load: {e}", schema.document_type));
        assert!(
            !template.body.trim().is_empty(),
            "template for '{}' is empty",
            schema.document_type
        );
    }
}

#[tokio::test]
async fn test_template_placeholders_are_schema_fields() {
    let store = shipped_catalog();

    for schema in schema::document_schemas() {
        let template = store.load(schema.document_type).await.unwrap();
        let field_names: BTreeSet<String> = schema
            .fields
            .iter()
            .map(|field| field.name.to_string())
            .collect();

        for placeholder in template.placeholders() {
            assert!(
                field_names.contains(&placeholder),
                "template '{}' references '{{{}}}' which is not a schema field",
                schema.document_type,
                placeholder
            );
        }
    }
}

#[tokio::test]
async fn test_catalog_has_no_orphan_templates() {
    let store = shipped_catalog();
    let shipped = store.available_document_types().await.unwrap();
    assert!(!shipped.is_empty(), "shipped catalog should not be empty");

    let registered: BTreeSet<String> = schema::document_type_ids().into_iter().collect();
    for document_type in shipped {
        assert!(
            registered.contains(&document_type),
            "catalog ships '{document_type}' but no schema is registered for it"
        );
    }
}
