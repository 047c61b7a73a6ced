//! Settings subsystem.
//!
//! # Data Flow
//! ```text
//! .env file (optional, never overrides)
//!     → process environment
//!     → loader.rs (read the four fixed variables)
//!     → Settings (immutable, passed by reference to the orchestrator)
//! ```
//!
//! # Design Decisions
//! - No global state: every run receives its own `Settings` value
//! - No validation: malformed input surfaces as a fetch failure
//! - Lookup is injectable so tests never mutate the process environment

pub mod loader;
pub mod schema;

pub use loader::{load_dotenv, load_dotenv_from, EnvFileError};
pub use schema::Settings;
