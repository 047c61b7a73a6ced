//! Remote configuration bootstrap.
//!
//! Fetches configuration for the active profiles from a config server and
//! injects the returned properties into the process environment.
//!
//! ```text
//!   environment ──▶ config::Settings
//!                        │
//!                        ▼  for each profile, in order
//!   GET {server}/{app}/{profile} ──▶ client::decode ──▶ environment::apply_document
//! ```

pub mod client;
pub mod config;
pub mod environment;
pub mod lifecycle;
pub mod observability;

pub use client::{ConfigClient, ConfigDocument, ConfigValue, PropertySource};
pub use config::Settings;
pub use environment::{EnvSink, ProcessEnv};
pub use lifecycle::{Bootstrap, BootstrapError, LoadReport, ProfileOutcome};

/// Load remote config into the process environment.
///
/// Reads `./.env` if present, resolves [`Settings`] from the environment,
/// and runs the [`Bootstrap`] against [`ProcessEnv`]. Call this early, before
/// other threads read the environment.
pub async fn load() -> Result<LoadReport, BootstrapError> {
    config::load_dotenv();
    let settings = Settings::from_env();
    Bootstrap::new(settings).run(&mut ProcessEnv).await
}
