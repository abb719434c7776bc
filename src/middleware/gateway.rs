//! The request gateway: per-request authorization, evaluated before any page
//! renders.
//!
//! Ordered rules, first match wins:
//!
//! 1. Path outside the protected prefixes and not the login page → allow.
//! 2. No session cookie → allow the login page, otherwise redirect to it.
//! 3. Cookie present but the token fails verification (tampered, malformed
//!    or expired, all identical) → clear the cookie and redirect to login.
//! 4. Verified: role's prefix set decides; denial redirects to the role's
//!    own landing page, never to an error page.
//! 5. Login page with a valid session → redirect to the role's landing page.
//!
//! Verification is pure CPU work on the claims already in the cookie; this
//! path performs no I/O and holds no locks.

use axum::{
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::middleware::policy;
use crate::state::AppState;
use crate::utils::cookies::{clear_session_cookie, extract_session_token};
use crate::utils::jwt::verify_session_token;

pub async fn route_gateway(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    let at_login = path == policy::LOGIN_PATH;

    if !policy::is_protected(&path) && !at_login {
        return next.run(req).await;
    }

    let Some(token) = extract_session_token(req.headers()) else {
        if at_login {
            return next.run(req).await;
        }
        debug!(path = %path, "No session cookie, redirecting to login");
        return redirect(policy::LOGIN_PATH);
    };

    let claims = match verify_session_token(&token, &state.auth_config) {
        Ok(claims) => claims,
        Err(_) => {
            // Tampered, malformed and expired tokens all collapse to the
            // same outcome: drop the cookie, back to login.
            warn!(path = %path, "Session token failed verification, clearing cookie");
            return redirect_clearing_cookie(policy::LOGIN_PATH, &state);
        }
    };

    if at_login {
        // Already authenticated, no reason to show the login form again.
        return redirect(policy::landing_path(claims.role));
    }

    if policy::allows(claims.role, &path) {
        debug!(email = %claims.email, role = %claims.role, path = %path, "Access granted");
        next.run(req).await
    } else {
        debug!(email = %claims.email, role = %claims.role, path = %path, "Access denied, redirecting to landing page");
        redirect(policy::landing_path(claims.role))
    }
}

fn redirect(to: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, to)]).into_response()
}

fn redirect_clearing_cookie(to: &'static str, state: &AppState) -> Response {
    let mut response = redirect(to);
    if let Ok(cookie) = clear_session_cookie(&state.auth_config) {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    response
}
