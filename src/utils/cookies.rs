//! The session cookie: the browser-held carrier of the session token.
//!
//! The cookie is `HttpOnly` so script can never read it, `SameSite=Lax` for
//! CSRF protection, and scoped to `/` so the transport attaches it to every
//! request automatically.

use axum::http::{HeaderMap, HeaderValue, header::InvalidHeaderValue};

use crate::config::auth::AuthConfig;

pub const SESSION_COOKIE_NAME: &str = "auth-token";

/// Builds the `Set-Cookie` value carrying a session token.
///
/// `Max-Age` equals the token's own TTL, so cookie and token expire together.
pub fn session_cookie(token: &str, config: &AuthConfig) -> Result<HeaderValue, InvalidHeaderValue> {
    let ttl = config.session_ttl;
    let mut cookie =
        format!("{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={ttl}");
    if config.secure_cookies {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// Builds the `Set-Cookie` value that deletes the session cookie.
pub fn clear_session_cookie(config: &AuthConfig) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    if config.secure_cookies {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// Extracts the session token from the request's `Cookie` header, if present.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(axum::http::header::COOKIE)?;
    let value = header.to_str().ok()?;
    for pair in value.split(';') {
        let trimmed = pair.trim();
        let mut parts = trimmed.splitn(2, '=');
        let key = parts.next()?.trim();
        let val = parts.next()?.trim();
        if key == SESSION_COOKIE_NAME {
            return Some(val.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::COOKIE;

    fn test_config(secure: bool) -> AuthConfig {
        AuthConfig {
            secret: "test-secret".to_string(),
            session_ttl: 604800,
            secure_cookies: secure,
        }
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc.def.ghi", &test_config(false)).unwrap();
        let cookie = cookie.to_str().unwrap();
        assert!(cookie.starts_with("auth-token=abc.def.ghi;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=604800"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_session_cookie_secure_in_production() {
        let cookie = session_cookie("abc", &test_config(true)).unwrap();
        assert!(cookie.to_str().unwrap().ends_with("; Secure"));
    }

    #[test]
    fn test_clear_session_cookie_zeroes_max_age() {
        let cookie = clear_session_cookie(&test_config(false)).unwrap();
        let cookie = cookie.to_str().unwrap();
        assert!(cookie.starts_with("auth-token=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn test_extract_session_token_single_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("auth-token=tok123"));
        assert_eq!(extract_session_token(&headers), Some("tok123".to_string()));
    }

    #[test]
    fn test_extract_session_token_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; auth-token=tok456; lang=en"),
        );
        assert_eq!(extract_session_token(&headers), Some("tok456".to_string()));
    }

    #[test]
    fn test_extract_session_token_missing() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark"));
        assert_eq!(extract_session_token(&headers), None);
        assert_eq!(extract_session_token(&HeaderMap::new()), None);
    }
}
