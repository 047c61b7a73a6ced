//! Client error definitions.

use thiserror::Error;

/// Transport failure while fetching a config document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, URL or body-read failure.
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Response body could not be decoded into a config document.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Body is not valid JSON.
    #[error("invalid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    /// Top-level JSON value is not an object.
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// A field has the wrong JSON type.
    #[error("unexpected document shape: {0}")]
    Shape(#[source] serde_json::Error),
}

/// Any failure loading a single profile. The orchestrator treats both kinds
/// the same way.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
