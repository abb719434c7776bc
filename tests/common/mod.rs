use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use classgate::config::auth::AuthConfig;
use classgate::config::cors::CorsConfig;
use classgate::directory::memory::InMemoryDirectory;
use classgate::directory::model::{Role, UserRecord};
use classgate::router::init_router;
use classgate::state::AppState;
use classgate::utils::jwt::create_session_token;
use tower::ServiceExt;
use uuid::Uuid;

// Low bcrypt cost keeps the test suite fast; production uses DEFAULT_COST.
const TEST_BCRYPT_COST: u32 = 4;

pub const ADMIN_EMAIL: &str = "admin@school.com";
pub const TEACHER_EMAIL: &str = "teacher@school.com";
pub const STUDENT_EMAIL: &str = "student@school.com";
pub const PASSWORD: &str = "portal-pass-123";

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        secret: "test-secret-key-at-least-32-characters-long".to_string(),
        session_ttl: 604800,
        secure_cookies: false,
    }
}

#[allow(dead_code)]
pub fn test_user(email: &str, role: Role) -> UserRecord {
    UserRecord {
        id: Uuid::new_v4(),
        email: email.to_string(),
        password_hash: bcrypt::hash(PASSWORD, TEST_BCRYPT_COST).unwrap(),
        display_name: format!("{role} User"),
        role,
    }
}

pub fn seeded_directory() -> InMemoryDirectory {
    let mut directory = InMemoryDirectory::new();
    directory.insert(test_user(ADMIN_EMAIL, Role::Admin));
    directory.insert(test_user(TEACHER_EMAIL, Role::Teacher));
    directory.insert(test_user(STUDENT_EMAIL, Role::Student));
    directory
}

pub fn test_app() -> Router {
    let state = AppState {
        directory: Arc::new(seeded_directory()),
        auth_config: test_auth_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    };
    init_router(state)
}

/// A signed session token for an arbitrary user with the given role.
#[allow(dead_code)]
pub fn session_token_for(role: Role) -> String {
    let user = test_user("someone@school.com", role);
    create_session_token(&user, &test_auth_config()).unwrap()
}

/// Sends a GET request, optionally carrying a session cookie.
#[allow(dead_code)]
pub async fn get_with_cookie(app: &Router, path: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("auth-token={token}"));
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Extracts the token value from a `Set-Cookie: auth-token=...` header.
#[allow(dead_code)]
pub fn cookie_token(response: &Response<Body>) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response should carry a Set-Cookie header")
        .to_str()
        .unwrap();
    set_cookie
        .split(';')
        .next()
        .unwrap()
        .strip_prefix("auth-token=")
        .expect("cookie should be named auth-token")
        .to_string()
}
