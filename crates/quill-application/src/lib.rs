//! Application layer for Quill.
//!
//! This crate provides the form controller use case that coordinates the
//! schema registry, session store, template store and renderer to implement
//! the document generation lifecycle.

pub mod form_usecase;

pub use form_usecase::{BeginForm, FormUseCase, RenderedDocument, Submission};
