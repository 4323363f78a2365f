//! Typed identifiers.

/// Identifier of a row in the `doctors` table.
///
/// The hosted database hands ids out as opaque strings (usually UUIDs), so
/// the model keeps them verbatim instead of parsing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DoctorId(pub String);

impl DoctorId {
    /// Wrap a raw id.
    pub fn new(id: impl Into<String>) -> Self {
        DoctorId(id.into())
    }

    /// The raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DoctorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DoctorId {
    fn from(value: &str) -> Self {
        DoctorId(value.to_string())
    }
}

impl From<String> for DoctorId {
    fn from(value: String) -> Self {
        DoctorId(value)
    }
}

impl std::fmt::Display for DoctorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
