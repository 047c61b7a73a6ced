//! Observability subsystem.
//!
//! # Design Decisions
//! - The library only emits `tracing` events; installing a subscriber is
//!   the binary's job
//! - Log level configurable via `RUST_LOG`

pub mod logging;
