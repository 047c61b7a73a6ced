//! Environment injection.
//!
//! Values are converted to their string form only here; documents keep
//! JSON types until this point.

pub mod applier;

pub use applier::{apply_document, EnvSink, ProcessEnv};
