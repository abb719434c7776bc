use std::env;

/// Session token and cookie configuration.
///
/// A single TTL drives both the token's `exp` claim and the cookie's
/// `Max-Age`, so the two can never disagree about when a session ends.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// Shared secret used to sign and verify session tokens.
    pub secret: String,
    /// Session lifetime in seconds.
    pub session_ttl: i64,
    /// Whether the session cookie is marked `Secure` (HTTPS only).
    pub secure_cookies: bool,
}

impl AuthConfig {
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set. The gateway cannot issue or verify
    /// a single token without it, so refusing to start is the only safe move.
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            session_ttl: env::var("SESSION_TTL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(604800), // 7 days
            secure_cookies: env::var("ENVIRONMENT")
                .map(|e| e == "production")
                .unwrap_or(false),
        }
    }
}
