//! Form controller use case.
//!
//! This module implements the form lifecycle state machine:
//!
//! ```text
//! Idle -> AwaitingSelection -> AwaitingFields -> Completed
//!                                   |        \-> Failed
//!                                   \--------->  Cancelled
//! ```
//!
//! Terminal transitions always remove the session, so a user is never stuck
//! mid-form: after a render, a cancel, or a template fault they can simply
//! start over. The presentation layer drives the transitions and renders the
//! typed outcomes; nothing platform-specific lives here.

use quill_core::config::QuillConfig;
use quill_core::error::{QuillError, Result};
use quill_core::render;
use quill_core::render::FieldValue;
use quill_core::schema::{self, DocumentTypeInfo, FormSchema};
use quill_core::session::{FormSession, OwnerId, SessionStore};
use quill_core::template::TemplateStore;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Outcome of opening a form.
#[derive(Debug, Clone, Serialize)]
pub enum BeginForm {
    /// No document type was given; the caller should present the available
    /// types and follow up with a concrete choice.
    SelectionPrompt { available: Vec<DocumentTypeInfo> },
    /// A session is open; the caller should collect the schema's fields.
    FormPrompt { schema: &'static FormSchema },
}

/// Outcome of a field submission.
#[derive(Debug, Clone, Serialize)]
pub enum Submission {
    /// All required fields were present; the document was rendered and the
    /// session closed.
    Rendered(RenderedDocument),
    /// The submission was merged but required fields are still missing; the
    /// session stays open for the next partial submission.
    NeedsMoreFields { missing: Vec<String> },
}

/// A finished document, not retained by the engine after being returned.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedDocument {
    /// Document type that was rendered.
    pub document_type: String,
    /// Final text.
    pub text: String,
    /// Whether the text exceeds the configured inline delivery limit. The
    /// caller chooses the alternate delivery mode (e.g. a file attachment);
    /// the engine only signals length.
    pub oversize: bool,
}

/// Use case for running document forms.
///
/// `FormUseCase` owns the session store and coordinates the schema registry,
/// the template store and the renderer. All failures are returned as typed
/// [`QuillError`] values; no fault escapes unhandled.
pub struct FormUseCase {
    /// Backing store for template bodies
    template_store: Arc<dyn TemplateStore>,
    /// Live form sessions, one per owner
    sessions: SessionStore,
    /// Engine configuration (TTL, inline limit, catalog location)
    config: QuillConfig,
}

impl FormUseCase {
    /// Creates a new `FormUseCase` instance.
    ///
    /// # Arguments
    ///
    /// * `template_store` - Backing store for template bodies
    /// * `config` - Engine configuration
    pub fn new(template_store: Arc<dyn TemplateStore>, config: QuillConfig) -> Self {
        Self {
            template_store,
            sessions: SessionStore::new(),
            config,
        }
    }

    /// Creates a `FormUseCase` over the configured directory catalog.
    pub fn from_config(config: QuillConfig) -> Self {
        let store = quill_infrastructure::DirTemplateStore::from_config(&config);
        Self::new(Arc::new(store), config)
    }

    /// Opens a form for an owner, replacing any session they already have.
    ///
    /// With no document type this opens a selection session and returns the
    /// available types. With a valid document type it opens a field
    /// collection session. An unknown document type is a validation failure
    /// listing the valid identifiers and does not create or replace a
    /// session.
    pub async fn begin_form(
        &self,
        owner_id: OwnerId,
        document_type: Option<&str>,
    ) -> Result<BeginForm> {
        match document_type {
            None => {
                self.sessions
                    .open(FormSession::awaiting_selection(owner_id))
                    .await;
                tracing::debug!(owner_id, "opened document type selection");
                Ok(BeginForm::SelectionPrompt {
                    available: schema::document_types(),
                })
            }
            Some(requested) => {
                let Some(schema) = schema::schema_for(requested) else {
                    return Err(QuillError::unknown_document_type(
                        requested,
                        schema::document_type_ids(),
                    ));
                };
                self.sessions
                    .open(FormSession::for_document_type(owner_id, schema.document_type))
                    .await;
                tracing::debug!(
                    owner_id,
                    document_type = schema.document_type,
                    "opened form session"
                );
                Ok(BeginForm::FormPrompt { schema })
            }
        }
    }

    /// Merges submitted field values into the owner's open session,
    /// rendering the document once every required field has been collected.
    ///
    /// Every submitted entry is validated and normalized against the schema
    /// before anything is merged, so a rejected submission leaves the
    /// session exactly as it was.
    pub async fn submit_fields(
        &self,
        owner_id: OwnerId,
        values: HashMap<String, String>,
    ) -> Result<Submission> {
        let session = self
            .sessions
            .get(owner_id)
            .await
            .ok_or(QuillError::SessionNotFound { owner: owner_id })?;

        let Some(document_type) = session.document_type else {
            return Err(QuillError::validation(
                "document_type",
                "no document type selected yet",
            ));
        };
        let schema = schema::schema_for(&document_type).ok_or_else(|| {
            QuillError::unknown_document_type(&document_type, schema::document_type_ids())
        })?;

        // Validate and normalize the whole submission before touching the
        // session.
        let mut normalized: Vec<(&'static str, FieldValue)> = Vec::with_capacity(values.len());
        for (name, raw) in &values {
            let field = schema.field(name).ok_or_else(|| {
                QuillError::validation(name, "unknown field for this document type")
            })?;
            normalized.push((field.name, field.normalize(raw)?));
        }

        let merged = self
            .sessions
            .update(owner_id, |session| {
                for (name, value) in normalized {
                    session.values.insert(name.to_string(), value);
                }
                session.values.clone()
            })
            .await?;

        let missing: Vec<String> = schema
            .required_fields()
            .filter(|field| !merged.contains_key(field.name))
            .map(|field| field.name.to_string())
            .collect();
        if !missing.is_empty() {
            tracing::debug!(owner_id, ?missing, "required fields still missing");
            return Ok(Submission::NeedsMoreFields { missing });
        }

        self.complete(owner_id, schema, merged)
            .await
            .map(Submission::Rendered)
    }

    /// Cancels any open session for the owner. Returns whether a session was
    /// actually open; cancelling nothing is a harmless no-op.
    pub async fn cancel_form(&self, owner_id: OwnerId) -> bool {
        let removed = self.sessions.remove(owner_id).await.is_some();
        if removed {
            tracing::debug!(owner_id, "form cancelled");
        }
        removed
    }

    /// Starts the background stale-session sweeper.
    ///
    /// The sweeper ticks at the given interval and deletes sessions inactive
    /// past the configured TTL. It only ever deletes; deletion of an
    /// already-gone session is a no-op, so it is safe to run alongside form
    /// mutations.
    ///
    /// # Arguments
    ///
    /// * `interval_secs` - Seconds between sweeps
    pub fn start_session_sweeper(self: &Arc<Self>, interval_secs: u64) {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::time::Duration;
        use tokio::time::interval;

        // Prevent multiple sweeper instances
        static SWEEPER_RUNNING: AtomicBool = AtomicBool::new(false);
        if SWEEPER_RUNNING.swap(true, Ordering::SeqCst) {
            tracing::warn!("session sweeper already running, skipping");
            return;
        }

        let usecase = Arc::clone(self);

        tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(interval_secs));
            tracing::info!(interval_secs, "session sweeper started");

            loop {
                ticker.tick().await;
                let swept = usecase
                    .sessions
                    .sweep_stale(usecase.config.session_ttl())
                    .await;
                if swept > 0 {
                    tracing::info!(swept, "stale form sessions removed");
                }
            }
        });
    }

    /// Renders the finished document and closes the session.
    ///
    /// Optional fields that were never submitted resolve to their fallback
    /// text. A template load failure also closes the session: the catalog
    /// fault is terminal for this attempt and the user restarts cleanly.
    async fn complete(
        &self,
        owner_id: OwnerId,
        schema: &FormSchema,
        mut values: HashMap<String, FieldValue>,
    ) -> Result<RenderedDocument> {
        for field in schema.optional_fields() {
            values
                .entry(field.name.to_string())
                .or_insert_with(|| field.fallback_value());
        }

        let template = match self.template_store.load(schema.document_type).await {
            Ok(template) => template,
            Err(err) => {
                self.sessions.remove(owner_id).await;
                tracing::warn!(
                    owner_id,
                    document_type = schema.document_type,
                    %err,
                    "template load failed, session closed"
                );
                return Err(err);
            }
        };

        let text = render::render(&template.body, &values);
        self.sessions.remove(owner_id).await;

        let oversize = text.chars().count() > self.config.inline_limit;
        tracing::info!(
            owner_id,
            document_type = schema.document_type,
            length = text.len(),
            oversize,
            "document rendered"
        );

        Ok(RenderedDocument {
            document_type: schema.document_type.to_string(),
            text,
            oversize,
        })
    }
}
