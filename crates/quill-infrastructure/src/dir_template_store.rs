//! Directory-backed TemplateStore implementation.
//!
//! One document type = one flat file, `<base_dir>/<document_type>.md`. Loads
//! are plain awaited reads; templates are read fresh per render and never
//! cached here, so catalog edits take effect on the next render.

use async_trait::async_trait;
use quill_core::config::QuillConfig;
use quill_core::error::{QuillError, Result};
use quill_core::template::{Template, TemplateStore};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Default catalog location relative to the working directory.
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Template store reading `.md` files from a catalog directory.
///
/// Directory structure:
/// ```text
/// templates/
/// ├── rules.md
/// ├── privacy_policy.md
/// └── ...
/// ```
pub struct DirTemplateStore {
    base_dir: PathBuf,
}

impl DirTemplateStore {
    /// Creates a store over the given catalog directory.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Creates a store at the configured catalog location, falling back to
    /// [`DEFAULT_TEMPLATES_DIR`].
    pub fn from_config(config: &QuillConfig) -> Self {
        let base_dir = config
            .templates_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATES_DIR));
        Self::new(base_dir)
    }

    /// Path of the backing file for a document type.
    pub fn template_path(&self, document_type: &str) -> PathBuf {
        self.base_dir.join(format!("{document_type}.md"))
    }

    /// Lists the document types present in the catalog directory (`.md`
    /// stems), sorted.
    ///
    /// The schema registry is the authority on which types are supported;
    /// this listing exists for drift diagnostics (a schema without a file,
    /// or an orphaned file without a schema).
    pub async fn available_document_types(&self) -> Result<Vec<String>> {
        let mut entries = match fs::read_dir(&self.base_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(QuillError::io(format!(
                    "Failed to read template catalog {}: {}",
                    self.base_dir.display(),
                    e
                )));
            }
        };

        let mut types = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| QuillError::io(format!("Failed to read catalog entry: {}", e)))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("md") {
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    types.push(stem.to_string());
                }
            }
        }
        types.sort();
        Ok(types)
    }
}

#[async_trait]
impl TemplateStore for DirTemplateStore {
    async fn load(&self, document_type: &str) -> Result<Template> {
        let path = self.template_path(document_type);

        match fs::read_to_string(&path).await {
            Ok(body) => Ok(Template {
                document_type: document_type.to_string(),
                body,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    document_type,
                    path = %path.display(),
                    "template file missing from catalog"
                );
                Err(QuillError::template_unavailable(document_type))
            }
            Err(e) => Err(QuillError::io(format!(
                "Failed to read template {}: {}",
                path.display(),
                e
            ))),
        }
    }
}
