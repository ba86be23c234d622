use std::env;

const DEFAULT_ACCESS_EXPIRY: u64 = 3600; // 1 hour

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Seconds until an issued token expires.
    pub access_token_expiry: u64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, access_token_expiry: u64) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry,
        }
    }

    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            access_token_expiry: parse_expiry(env::var("JWT_ACCESS_EXPIRY").ok().as_deref()),
        }
    }
}

/// Anything that is not a positive number of seconds falls back to the default.
fn parse_expiry(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_ACCESS_EXPIRY)
}
