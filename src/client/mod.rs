//! Config server client subsystem.
//!
//! # Data Flow
//! ```text
//! Settings + profile
//!     → fetcher.rs (GET {server}/{app}/{profile}, raw body)
//!     → decoder.rs (strict JSON → ConfigDocument)
//!     → document.rs types handed to the environment applier
//! ```

pub mod decoder;
pub mod document;
pub mod fetcher;
pub mod types;

pub use decoder::decode;
pub use document::{ConfigDocument, ConfigValue, PropertySource};
pub use fetcher::ConfigClient;
pub use types::{DecodeError, FetchError, LoadError};
