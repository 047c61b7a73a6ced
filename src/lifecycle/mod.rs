//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Settings → for each profile: fetch → decode → apply → LoadReport
//!
//! Failure policy:
//!     optional = false → first failure returns BootstrapError
//!     optional = true  → failure logged, profile skipped, run continues
//! ```
//!
//! # Design Decisions
//! - Ordered startup: profiles in configured order, never concurrently
//! - Process exit is left to the entry point

pub mod startup;

pub use startup::{Bootstrap, BootstrapError, LoadReport, ProfileOutcome};
