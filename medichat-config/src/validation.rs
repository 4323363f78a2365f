//! Validation of the public Supabase keys in an env file.

use tracing::debug;

use crate::{
    constants::{
        JWT_PREFIX, MIN_VALUE_LEN, REQUIRED_KEYS, SERVICE_ROLE_MARKER,
        SUPABASE_ANON_KEY_KEY, SUPABASE_URL_KEY,
    },
    env_file::ConfigEntry,
    error::CheckEnvError,
};

/// Category of an advisory finding. Warnings never fail a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A required value is empty or shorter than [`MIN_VALUE_LEN`].
    ShortValue,
    /// The anon key does not look like an encoded JWT.
    UnexpectedPrefix,
    /// Something that looks like the service_role key was found in the file.
    ServiceRoleLeak,
}

/// One advisory finding, printed as `[warn] message (hint: ...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// What was detected.
    pub kind: WarningKind,
    /// Operator-facing message.
    pub message: String,
    /// Suggested fix, if any.
    pub hint: Option<String>,
}

/// Warnings in the order they were found.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigWarnings {
    /// Collected warnings.
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    /// Record a warning without a hint.
    pub fn push<S: Into<String>>(&mut self, kind: WarningKind, message: S) {
        self.items.push(ConfigWarning {
            kind,
            message: message.into(),
            hint: None,
        });
    }

    /// Record a warning with a hint.
    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        kind: WarningKind,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            kind,
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    /// No warnings were recorded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of warnings.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, ConfigWarning> {
        self.items.iter()
    }

    /// Number of warnings of the given kind.
    pub fn count(&self, kind: WarningKind) -> usize {
        self.items.iter().filter(|w| w.kind == kind).count()
    }
}

/// Outcome of one validation pass over an env file.
///
/// Built once by [`validate_env_contents`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    has_url: bool,
    has_key: bool,
    has_service_key_leak: bool,
    warnings: ConfigWarnings,
    errors: Vec<String>,
}

impl ValidationReport {
    /// `NEXT_PUBLIC_SUPABASE_URL` appeared, even with an empty value.
    pub fn has_url(&self) -> bool {
        self.has_url
    }

    /// `NEXT_PUBLIC_SUPABASE_ANON_KEY` appeared, even with an empty value.
    pub fn has_key(&self) -> bool {
        self.has_key
    }

    /// Some line mentions `service_role`.
    pub fn has_service_key_leak(&self) -> bool {
        self.has_service_key_leak
    }

    /// Advisory findings.
    pub fn warnings(&self) -> &ConfigWarnings {
        &self.warnings
    }

    /// Error lines, one per missing required key, URL first.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Both required keys were found.
    pub fn is_complete(&self) -> bool {
        self.has_url && self.has_key
    }

    /// Required keys that never appeared, in reporting order.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        REQUIRED_KEYS
            .into_iter()
            .zip([self.has_url, self.has_key])
            .filter_map(|(key, present)| (!present).then_some(key))
            .collect()
    }

    /// Turn an incomplete report into [`CheckEnvError::ConfigIncomplete`].
    pub fn ensure_complete(&self) -> Result<(), CheckEnvError> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(CheckEnvError::ConfigIncomplete {
                missing: self.missing_keys(),
            })
        }
    }
}

/// Validate the text of an env file.
///
/// Every line is inspected on its own: recognized keys set their flag and may
/// add warnings, and any line mentioning `service_role` (comments included)
/// marks a possible leak. The leak warning itself is only reported once both
/// required keys are present; otherwise the missing keys take precedence.
pub fn validate_env_contents(contents: &str) -> ValidationReport {
    let mut has_url = false;
    let mut has_key = false;
    let mut has_service_key_leak = false;
    let mut warnings = ConfigWarnings::default();

    for line in contents.lines() {
        if let Some(entry) = ConfigEntry::parse(line) {
            match entry.key {
                SUPABASE_URL_KEY => {
                    has_url = true;
                    debug!(key = entry.key, len = entry.value.len(), "found");
                    check_length(entry.key, entry.value, &mut warnings);
                }
                SUPABASE_ANON_KEY_KEY => {
                    has_key = true;
                    debug!(key = entry.key, len = entry.value.len(), "found");
                    check_length(entry.key, entry.value, &mut warnings);
                    if !entry.value.is_empty()
                        && !entry.value.starts_with(JWT_PREFIX)
                    {
                        warnings.push_with_hint(
                            WarningKind::UnexpectedPrefix,
                            format!(
                                "{SUPABASE_ANON_KEY_KEY} does not start with \"{JWT_PREFIX}\""
                            ),
                            "Are you sure it is the right key?",
                        );
                    }
                }
                _ => {}
            }
        }

        if line.contains(SERVICE_ROLE_MARKER) {
            has_service_key_leak = true;
        }
    }

    let mut errors = Vec::new();
    if has_url && has_key {
        if has_service_key_leak {
            warnings.push_with_hint(
                WarningKind::ServiceRoleLeak,
                "It looks like you might have pasted the service_role key description or key itself",
                format!(
                    "Make sure {SUPABASE_ANON_KEY_KEY} uses the \"anon\" key"
                ),
            );
        }
    } else {
        for (key, present) in REQUIRED_KEYS.into_iter().zip([has_url, has_key])
        {
            if !present {
                errors.push(format!("Missing {key}"));
            }
        }
    }

    debug!(
        has_url,
        has_key,
        has_service_key_leak,
        warnings = warnings.len(),
        "env file validated"
    );

    ValidationReport {
        has_url,
        has_key,
        has_service_key_leak,
        warnings,
        errors,
    }
}

fn check_length(key: &str, value: &str, warnings: &mut ConfigWarnings) {
    if value.chars().count() < MIN_VALUE_LEN {
        warnings.push(
            WarningKind::ShortValue,
            format!("{key} seems too short or empty"),
        );
    }
}
