//! Checks that keep privileged credentials out of client config.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::Deserialize;
use thiserror::Error;

/// A key that must never reach the client.
#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    /// The anon key slot holds a `service_role` JWT.
    #[error(
        "NEXT_PUBLIC_SUPABASE_ANON_KEY carries the service_role claim; use the anon (public) key instead"
    )]
    ServiceRoleKey,
}

#[derive(Deserialize)]
struct Claims {
    role: Option<String>,
}

/// Reject keys that are JWTs minted for the `service_role`.
///
/// Keys that do not decode as a JWT are let through: newer projects hand out
/// opaque publishable keys, and the `check-env` warnings already cover the
/// obviously malformed cases.
pub fn ensure_public_key(key: &str) -> Result<(), ConfigGuardRailError> {
    match jwt_role(key).as_deref() {
        Some("service_role") => Err(ConfigGuardRailError::ServiceRoleKey),
        _ => Ok(()),
    }
}

fn jwt_role(token: &str) -> Option<String> {
    let mut parts = token.split('.');
    let (_header, payload, _signature) =
        (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let decoded = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice::<Claims>(&decoded).ok()?.role
}

#[cfg(test)]
pub(crate) fn fake_jwt(role: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        format!(r#"{{"iss":"supabase","ref":"proj","role":"{role}"}}"#)
            .as_bytes(),
    );
    format!("{header}.{payload}.c2lnbmF0dXJl")
}
