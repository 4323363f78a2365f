//! Options for the `check-env` run.

use std::path::PathBuf;

use crate::constants::DEFAULT_ENV_FILE;

#[derive(Debug, Clone)]
/// Options for env-file validation (`check-env`).
pub struct CheckOptions {
    /// Env file to validate.
    pub env_file: PathBuf,
    /// Report missing required keys without failing the run.
    pub advisory: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            advisory: false,
        }
    }
}

impl CheckOptions {
    /// Check `<dir>/.env.local`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            env_file: dir.into().join(DEFAULT_ENV_FILE),
            ..Self::default()
        }
    }

    /// Check `.env.local` in the current working directory.
    pub fn from_current_dir() -> std::io::Result<Self> {
        Ok(Self::in_dir(std::env::current_dir()?))
    }
}
