//! Bootstrap settings schema.
//!
//! The settings are read from four fixed, dot-separated environment
//! variables. They are resolved once, before any fetch, and never change
//! afterwards.

/// Comma-separated list of profiles to fetch, in order.
pub const PROFILES_ACTIVE_VAR: &str = "app.config.profiles.active";

/// Application identifier, used as a URL path segment.
pub const APP_NAME_VAR: &str = "app.name";

/// Base URL of the config server.
pub const SERVER_URL_VAR: &str = "app.config.server.url";

/// `"true"` downgrades fetch/decode failures to logged skips.
pub const OPTIONAL_VAR: &str = "app.config.optional";

/// Resolved bootstrap settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    /// Active profiles in fetch order. Never empty once resolved: an unset
    /// variable yields a single empty-string profile.
    pub profiles: Vec<String>,

    /// Config server base URL, used verbatim (no trailing-slash handling).
    pub server_url: String,

    /// Application name.
    pub app_name: String,

    /// When set, failures are logged and the profile is skipped.
    pub optional: bool,
}

impl Settings {
    /// URL of the config document for `profile`.
    ///
    /// Segments are joined with `/` and not escaped.
    pub fn url_for(&self, profile: &str) -> String {
        format!("{}/{}/{}", self.server_url, self.app_name, profile)
    }
}
