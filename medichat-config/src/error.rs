//! Errors surfaced by `check-env`.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal outcomes of an env-file check.
#[derive(Debug, Error)]
pub enum CheckEnvError {
    /// The env file does not exist.
    #[error("{} file not found!", display_name(path))]
    ConfigMissing { path: PathBuf },
    /// The env file exists but could not be read as UTF-8 text.
    #[error("Error reading {}: {source}", display_name(path))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// One or more required keys never appeared.
    #[error("missing required variables: {}", missing.join(", "))]
    ConfigIncomplete { missing: Vec<&'static str> },
}

/// File name used in operator-facing messages; falls back to the full path.
pub(crate) fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_message_uses_file_name() {
        let err = CheckEnvError::ConfigMissing {
            path: PathBuf::from("/srv/app/.env.local"),
        };
        assert_eq!(err.to_string(), ".env.local file not found!");
    }

    #[test]
    fn incomplete_message_lists_keys() {
        let err = CheckEnvError::ConfigIncomplete {
            missing: vec!["A", "B"],
        };
        assert_eq!(err.to_string(), "missing required variables: A, B");
    }
}
