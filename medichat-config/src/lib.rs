//! Shared configuration library for medichat.
//!
//! This crate owns everything about `.env.local`: the `check-env` validator
//! that lints the file before a build, and the loader that turns it into an
//! explicit [`SupabaseConfig`] for the data client. Both read the same key
//! names from [`constants`] so there is a single source of truth.

pub mod cli;
pub mod constants;
pub mod env_file;
pub mod error;
pub mod loader;
pub mod validation;

pub use cli::{CheckOptions, CheckOutcome, check_env_file, run_check};
pub use env_file::ConfigEntry;
pub use error::CheckEnvError;
pub use loader::{
    AnonKey, SupabaseConfig, error::ConfigLoadError,
    guard_rails::ConfigGuardRailError,
};
pub use validation::{
    ConfigWarning, ConfigWarnings, ValidationReport, WarningKind,
    validate_env_contents,
};
