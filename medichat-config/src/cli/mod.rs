//! CLI-facing check helpers behind the `check-env` binary.
//!
//! The checks read the env file once, validate it, and render a plain-text
//! report to caller-supplied writers so the binary and the tests share the
//! exact same output path.

pub mod options;

use std::{fs, io::Write, path::Path};

use tracing::{debug, info};

pub use options::*;

use crate::{
    error::{CheckEnvError, display_name},
    validation::{ValidationReport, WarningKind, validate_env_contents},
};

/// Exit status of a `check-env` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Both required keys present; warnings may still have been printed.
    Passed,
    /// Required keys missing. `advisory` runs do not fail on this.
    Incomplete { advisory: bool },
    /// The env file does not exist.
    Missing,
    /// The env file exists but could not be read.
    Unreadable,
}

impl CheckOutcome {
    /// Process exit status for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            CheckOutcome::Passed => 0,
            CheckOutcome::Incomplete { advisory: true } => 0,
            CheckOutcome::Incomplete { advisory: false } => 2,
            CheckOutcome::Missing | CheckOutcome::Unreadable => 1,
        }
    }

    /// The run exits with status 0.
    pub fn is_success(self) -> bool {
        self.exit_code() == 0
    }
}

/// Read and validate the env file at `path`.
pub fn check_env_file(path: &Path) -> Result<ValidationReport, CheckEnvError> {
    if !path.exists() {
        return Err(CheckEnvError::ConfigMissing {
            path: path.to_path_buf(),
        });
    }

    let contents =
        fs::read_to_string(path).map_err(|source| CheckEnvError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(validate_env_contents(&contents))
}

/// Run a full check and render it: verdicts to `out`, errors and warnings to
/// `err`.
pub fn run_check<O: Write, E: Write>(
    opts: &CheckOptions,
    out: &mut O,
    err: &mut E,
) -> std::io::Result<CheckOutcome> {
    info!(path = %opts.env_file.display(), "checking env file");

    let report = match check_env_file(&opts.env_file) {
        Ok(report) => report,
        Err(e @ CheckEnvError::ConfigMissing { .. }) => {
            writeln!(err, "[error] {e}")?;
            return Ok(CheckOutcome::Missing);
        }
        Err(e) => {
            writeln!(err, "[error] {e}")?;
            return Ok(CheckOutcome::Unreadable);
        }
    };

    render_report(&report, &display_name(&opts.env_file), opts, out, err)
}

fn render_report<O: Write, E: Write>(
    report: &ValidationReport,
    file_name: &str,
    opts: &CheckOptions,
    out: &mut O,
    err: &mut E,
) -> std::io::Result<CheckOutcome> {
    let (leaks, line_warnings): (Vec<_>, Vec<_>) = report
        .warnings()
        .iter()
        .partition(|w| w.kind == WarningKind::ServiceRoleLeak);

    for warning in line_warnings {
        write_warning(err, &warning.message, warning.hint.as_deref())?;
    }

    if let Err(e) = report.ensure_complete() {
        debug!(error = %e, advisory = opts.advisory, "env file incomplete");
        writeln!(err, "[error] Missing required variables in {file_name}")?;
        for line in report.errors() {
            writeln!(err, "   - {line}")?;
        }
        return Ok(CheckOutcome::Incomplete {
            advisory: opts.advisory,
        });
    }

    writeln!(out, "[ok] {file_name} format looks correct.")?;
    for warning in leaks {
        write_warning(err, &warning.message, warning.hint.as_deref())?;
    }

    Ok(CheckOutcome::Passed)
}

fn write_warning<E: Write>(
    err: &mut E,
    message: &str,
    hint: Option<&str>,
) -> std::io::Result<()> {
    match hint {
        Some(hint) => writeln!(err, "[warn] {message} (hint: {hint})"),
        None => writeln!(err, "[warn] {message}"),
    }
}
