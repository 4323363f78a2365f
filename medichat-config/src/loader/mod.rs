//! Explicit connection settings for the hosted database.
//!
//! Callers build a [`SupabaseConfig`] once, from an env file, from the
//! process environment, or from pairs they already hold, and pass it to the
//! data client. Nothing downstream reads environment variables on its own.

pub mod error;
pub mod guard_rails;

use std::{collections::HashMap, fmt, path::Path};

use tracing::debug;
use url::Url;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{SUPABASE_ANON_KEY_KEY, SUPABASE_URL_KEY};

use error::ConfigLoadError;
use guard_rails::ensure_public_key;

/// Public API key of the project. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct AnonKey(String);

impl AnonKey {
    /// The raw key, for request headers only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AnonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AnonKey(<redacted>)")
    }
}

/// Validated connection settings for the Remote Data Service.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    url: Url,
    anon_key: AnonKey,
}

impl SupabaseConfig {
    /// Validate and assemble a config from raw values.
    pub fn new(url: &str, anon_key: &str) -> Result<Self, ConfigLoadError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ConfigLoadError::MissingVar {
                key: SUPABASE_URL_KEY,
            });
        }
        let anon_key = anon_key.trim();
        if anon_key.is_empty() {
            return Err(ConfigLoadError::MissingVar {
                key: SUPABASE_ANON_KEY_KEY,
            });
        }

        let parsed = Url::parse(url).map_err(|source| {
            ConfigLoadError::InvalidUrl {
                key: SUPABASE_URL_KEY,
                source,
            }
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigLoadError::UnsupportedScheme {
                key: SUPABASE_URL_KEY,
                scheme: parsed.scheme().to_string(),
            });
        }

        ensure_public_key(anon_key)?;

        Ok(Self {
            url: parsed,
            anon_key: AnonKey(anon_key.to_string()),
        })
    }

    /// Build from already-parsed `KEY=VALUE` pairs; unrelated keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigLoadError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map: HashMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let url = map.get(SUPABASE_URL_KEY).ok_or(ConfigLoadError::MissingVar {
            key: SUPABASE_URL_KEY,
        })?;
        let anon_key =
            map.get(SUPABASE_ANON_KEY_KEY)
                .ok_or(ConfigLoadError::MissingVar {
                    key: SUPABASE_ANON_KEY_KEY,
                })?;

        Self::new(url, anon_key)
    }

    /// Load from an env file using dotenv syntax (quotes, `export`, comments).
    ///
    /// Later duplicates win, matching how the file is applied at startup.
    pub fn from_env_file(path: &Path) -> Result<Self, ConfigLoadError> {
        debug!(path = %path.display(), "loading supabase config");
        let mut pairs = Vec::new();
        for entry in dotenvy::from_path_iter(path)? {
            pairs.push(entry?);
        }
        Self::from_pairs(pairs)
    }

    /// Load from variables exported in the process environment.
    pub fn from_process_env() -> Result<Self, ConfigLoadError> {
        Self::from_pairs(
            [SUPABASE_URL_KEY, SUPABASE_ANON_KEY_KEY]
                .into_iter()
                .filter_map(|key| std::env::var(key).ok().map(|v| (key, v))),
        )
    }

    /// Project URL as configured.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The public API key.
    pub fn anon_key(&self) -> &AnonKey {
        &self.anon_key
    }

    /// Base URL of the REST (PostgREST) endpoint, always ending in `/`.
    pub fn rest_url(&self) -> Result<Url, url::ParseError> {
        let mut base = self.url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join("rest/v1/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::guard_rails::{ConfigGuardRailError, fake_jwt};

    #[test]
    fn builds_from_pairs() {
        let key = fake_jwt("anon");
        let config = SupabaseConfig::from_pairs([
            (SUPABASE_URL_KEY, "https://proj.supabase.co"),
            (SUPABASE_ANON_KEY_KEY, key.as_str()),
            ("UNRELATED", "x"),
        ])
        .expect("config");
        assert_eq!(config.url().as_str(), "https://proj.supabase.co/");
        assert_eq!(config.anon_key().expose(), key);
    }

    #[test]
    fn missing_url_is_reported() {
        let err = SupabaseConfig::from_pairs([(SUPABASE_ANON_KEY_KEY, "eyabc")])
            .expect_err("missing url");
        assert!(matches!(
            err,
            ConfigLoadError::MissingVar {
                key: SUPABASE_URL_KEY
            }
        ));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let err = SupabaseConfig::new("https://proj.supabase.co", "  ")
            .expect_err("blank key");
        assert!(matches!(
            err,
            ConfigLoadError::MissingVar {
                key: SUPABASE_ANON_KEY_KEY
            }
        ));
    }

    #[test]
    fn rejects_unparseable_and_non_http_urls() {
        assert!(matches!(
            SupabaseConfig::new("proj.supabase.co", "eyabc"),
            Err(ConfigLoadError::InvalidUrl { .. })
        ));
        assert!(matches!(
            SupabaseConfig::new("ftp://proj.supabase.co", "eyabc"),
            Err(ConfigLoadError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn rejects_service_role_key() {
        let err = SupabaseConfig::new(
            "https://proj.supabase.co",
            &fake_jwt("service_role"),
        )
        .expect_err("service role");
        assert!(matches!(
            err,
            ConfigLoadError::GuardRail(ConfigGuardRailError::ServiceRoleKey)
        ));
    }

    #[test]
    fn debug_output_redacts_key() {
        let config =
            SupabaseConfig::new("https://proj.supabase.co", "eysecretvalue")
                .expect("config");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("eysecretvalue"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn rest_url_appends_versioned_path() {
        let config = SupabaseConfig::new("http://localhost:54321", "eyabc")
            .expect("config");
        assert_eq!(
            config.rest_url().expect("rest url").as_str(),
            "http://localhost:54321/rest/v1/"
        );

        let prefixed =
            SupabaseConfig::new("https://gw.example.com/supabase", "eyabc")
                .expect("config");
        assert_eq!(
            prefixed.rest_url().expect("rest url").as_str(),
            "https://gw.example.com/supabase/rest/v1/"
        );
    }

    #[test]
    fn loads_quoted_values_from_env_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(".env.local");
        std::fs::write(
            &path,
            "# local settings\nNEXT_PUBLIC_SUPABASE_URL=\"https://proj.supabase.co\"\nNEXT_PUBLIC_SUPABASE_ANON_KEY='eyabc123def456'\n",
        )
        .expect("write");

        let config = SupabaseConfig::from_env_file(&path).expect("config");
        assert_eq!(config.url().host_str(), Some("proj.supabase.co"));
        assert_eq!(config.anon_key().expose(), "eyabc123def456");
    }

    #[test]
    fn missing_env_file_is_an_env_file_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = SupabaseConfig::from_env_file(&dir.path().join("nope"))
            .expect_err("missing file");
        assert!(matches!(err, ConfigLoadError::EnvFile(_)));
    }
}
