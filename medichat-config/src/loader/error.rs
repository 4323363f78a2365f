//! Errors raised while building a [`SupabaseConfig`](super::SupabaseConfig).

use super::guard_rails::ConfigGuardRailError;

use thiserror::Error;

/// Why a connection config could not be built.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// A required variable is absent or blank.
    #[error("{key} is missing or empty")]
    MissingVar { key: &'static str },
    /// The URL does not parse.
    #[error("invalid {key}")]
    InvalidUrl {
        key: &'static str,
        #[source]
        source: url::ParseError,
    },
    /// The URL is neither http nor https.
    #[error("{key} must use http or https (got `{scheme}`)")]
    UnsupportedScheme { key: &'static str, scheme: String },
    /// The key was refused by a guard rail.
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    /// The env file is missing or not valid dotenv syntax.
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
