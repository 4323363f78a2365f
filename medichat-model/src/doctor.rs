//! Doctors as listed in the directory.

use chrono::{DateTime, Utc};

use crate::ids::DoctorId;

/// A doctor row as stored in the `doctors` table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Doctor {
    /// Row id.
    pub id: DoctorId,
    /// Contact address; its local part is the public handle.
    pub email: String,
    /// Chat room the doctor answers in.
    pub chat_id: String,
    /// Insertion time; older rows may lack it.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Doctor {
    /// Local part of the email address, used as the doctor's public handle.
    pub fn handle(&self) -> &str {
        self.email
            .split_once('@')
            .map(|(local, _)| local)
            .unwrap_or(&self.email)
    }

    /// Name shown in listings and chat headers, e.g. `Dr. jane`.
    pub fn display_name(&self) -> String {
        format!("Dr. {}", self.handle())
    }

    /// Avatar letter: first character of the email, upper-cased.
    pub fn initial(&self) -> Option<char> {
        self.email.chars().next().map(|c| {
            c.to_uppercase().next().unwrap_or(c)
        })
    }

    /// Route of the per-doctor chat screen.
    pub fn chat_path(&self) -> String {
        format!("/doctor/{}/chat", self.id)
    }
}
