//! Line-level parsing of `KEY=VALUE` env files.
//!
//! This is deliberately looser than `dotenvy`: no quote handling, no escape
//! processing and no failure on malformed lines. The validator needs to see
//! values exactly as they were typed, and a line it cannot parse is simply
//! not an entry.

/// One `KEY=VALUE` line of an env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry<'a> {
    /// Text left of the first `=`.
    pub key: &'a str,
    /// Text right of the first `=`, possibly empty.
    pub value: &'a str,
}

impl<'a> ConfigEntry<'a> {
    /// Parse a single line, splitting on the first `=`.
    ///
    /// The line is trimmed as a whole; key and value are kept verbatim.
    /// Blank lines, lines without `=` and lines with an empty key yield `None`.
    pub fn parse(line: &'a str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let (key, value) = trimmed.split_once('=')?;
        if key.is_empty() {
            return None;
        }

        Some(ConfigEntry { key, value })
    }
}
