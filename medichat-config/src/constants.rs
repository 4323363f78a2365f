//! Key names and thresholds shared by the validator and the config loader.

/// Env file checked by `check-env` when no path is given.
pub const DEFAULT_ENV_FILE: &str = ".env.local";

/// Public URL of the hosted database project.
pub const SUPABASE_URL_KEY: &str = "NEXT_PUBLIC_SUPABASE_URL";

/// Public (anon) API key of the hosted database project.
pub const SUPABASE_ANON_KEY_KEY: &str = "NEXT_PUBLIC_SUPABASE_ANON_KEY";

/// Keys that must be present for the front-end to reach the database, in
/// reporting order.
pub const REQUIRED_KEYS: [&str; 2] = [SUPABASE_URL_KEY, SUPABASE_ANON_KEY_KEY];

/// Values shorter than this (in characters) are flagged as suspicious.
pub const MIN_VALUE_LEN: usize = 10;

/// Encoded JWTs start with the base64 form of `{"`.
pub const JWT_PREFIX: &str = "ey";

/// Marker of the privileged key anywhere in a line.
pub const SERVICE_ROLE_MARKER: &str = "service_role";
