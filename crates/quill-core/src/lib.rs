//! Core domain for the Quill document generation engine.
//!
//! Quill turns structured user input, collected through a multi-step form,
//! into a finished document by substituting the collected values into a named
//! template. This crate holds the parts with real state and logic: the field
//! schema registry, the per-owner session store, the placeholder renderer and
//! the template store abstraction. Transport and presentation live outside.

pub mod config;
pub mod error;
pub mod render;
pub mod schema;
pub mod session;
pub mod template;

// Re-export common error type
pub use error::QuillError;
