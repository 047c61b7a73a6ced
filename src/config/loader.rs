//! Settings resolution from the process environment.

use std::path::Path;

use thiserror::Error;

use crate::config::schema::{
    Settings, APP_NAME_VAR, OPTIONAL_VAR, PROFILES_ACTIVE_VAR, SERVER_URL_VAR,
};

/// Error type for explicit `.env` loading.
#[derive(Debug, Error)]
pub enum EnvFileError {
    #[error("failed to load env file {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: dotenvy::Error,
    },
}

impl Settings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary key lookup.
    ///
    /// Missing keys read as the empty string. No validation happens here;
    /// a bad server URL surfaces later as a fetch failure.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).unwrap_or_default();

        let settings = Self {
            profiles: read(PROFILES_ACTIVE_VAR)
                .split(',')
                .map(str::to_string)
                .collect(),
            app_name: read(APP_NAME_VAR),
            server_url: read(SERVER_URL_VAR),
            optional: read(OPTIONAL_VAR) == "true",
        };

        tracing::info!(
            app_name = %settings.app_name,
            optional = settings.optional,
            "Active profiles [{}]",
            settings.profiles.join(",")
        );

        settings
    }
}

/// Load `./.env` into the process environment if it exists.
///
/// Variables already set in the process win over the file.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => tracing::warn!(error = %e, "Failed to load .env file"),
    }
}

/// Load an explicit env file. Unlike [`load_dotenv`], a missing file is an error.
pub fn load_dotenv_from(path: &Path) -> Result<(), EnvFileError> {
    dotenvy::from_path(path).map_err(|source| EnvFileError::Load {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "Loaded env file");
    Ok(())
}
