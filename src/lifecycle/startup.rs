//! Startup orchestration.
//!
//! # Responsibilities
//! - Walk the active profiles in order
//! - Fetch, decode and apply each profile's document
//! - Apply the failure policy: fatal by default, skip in optional mode
//!
//! # Design Decisions
//! - Strictly sequential: one request in flight, profiles never overlap
//! - A fatal failure returns immediately; earlier profiles stay applied
//! - The caller decides how to exit; nothing here terminates the process

use thiserror::Error;

use crate::client::{decode, ConfigClient, ConfigDocument, LoadError};
use crate::config::Settings;
use crate::environment::{apply_document, EnvSink};

/// Fatal bootstrap failure.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to load config for profile '{profile}': {source}")]
    Profile {
        profile: String,
        #[source]
        source: LoadError,
    },
}

/// What happened to one profile.
#[derive(Debug)]
pub enum ProfileOutcome {
    /// Document applied; `keys` lists the variables the sink accepted, in order.
    Applied { profile: String, keys: Vec<String> },
    /// Load failed in optional mode; nothing was applied.
    Skipped { profile: String, error: LoadError },
}

impl ProfileOutcome {
    pub fn profile(&self) -> &str {
        match self {
            ProfileOutcome::Applied { profile, .. } | ProfileOutcome::Skipped { profile, .. } => {
                profile
            }
        }
    }
}

/// Per-profile results of a completed run, in profile order.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub outcomes: Vec<ProfileOutcome>,
}

impl LoadReport {
    /// Every key written, in application order, repeats included.
    pub fn applied_keys(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().flat_map(|outcome| match outcome {
            ProfileOutcome::Applied { keys, .. } => keys.as_slice(),
            ProfileOutcome::Skipped { .. } => &[][..],
        })
        .map(String::as_str)
    }

    /// Profiles skipped in optional mode.
    pub fn skipped(&self) -> impl Iterator<Item = &ProfileOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, ProfileOutcome::Skipped { .. }))
    }
}

/// Fetches remote config for each active profile and applies it.
#[derive(Debug, Clone)]
pub struct Bootstrap {
    settings: Settings,
    client: ConfigClient,
}

impl Bootstrap {
    pub fn new(settings: Settings) -> Self {
        Self::with_client(settings, ConfigClient::new())
    }

    pub fn with_client(settings: Settings, client: ConfigClient) -> Self {
        Self { settings, client }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run the load sequence against `sink`.
    ///
    /// In non-optional mode the first failing profile aborts the run and
    /// later profiles are never fetched.
    pub async fn run<S>(&self, sink: &mut S) -> Result<LoadReport, BootstrapError>
    where
        S: EnvSink + ?Sized,
    {
        let mut report = LoadReport::default();

        for profile in &self.settings.profiles {
            match self.load_profile(profile).await {
                Ok(document) => {
                    let keys = apply_document(&document, sink);
                    tracing::info!(
                        profile = %profile,
                        sources = document.property_sources.len(),
                        keys = keys.len(),
                        "Config applied"
                    );
                    report.outcomes.push(ProfileOutcome::Applied {
                        profile: profile.clone(),
                        keys,
                    });
                }
                Err(error) if self.settings.optional => {
                    tracing::warn!(profile = %profile, error = %error, "Error fetching config");
                    report.outcomes.push(ProfileOutcome::Skipped {
                        profile: profile.clone(),
                        error,
                    });
                }
                Err(error) => {
                    return Err(BootstrapError::Profile {
                        profile: profile.clone(),
                        source: error,
                    });
                }
            }
        }

        Ok(report)
    }

    async fn load_profile(&self, profile: &str) -> Result<ConfigDocument, LoadError> {
        let body = self.client.fetch_profile(&self.settings, profile).await?;
        Ok(decode(&body)?)
    }
}
