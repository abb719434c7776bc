use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::instrument;
use utoipa::ToSchema;

use crate::middleware::policy::LOGIN_PATH;
use crate::state::AppState;
use crate::utils::cookies::{clear_session_cookie, session_cookie};
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{LoginRequest, LoginResponse, PublicUser};
use super::service::AuthService;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Login and receive a session cookie
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, session cookie set", body = LoginResponse),
        (status = 400, description = "Missing email or password", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "User directory failure", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Response, AppError> {
    let (token, user) = AuthService::login(state.directory.as_ref(), dto, &state.auth_config).await?;

    let cookie = session_cookie(&token, &state.auth_config)?;

    let mut response = Json(LoginResponse {
        success: true,
        user: PublicUser::from(&user),
    })
    .into_response();
    response.headers_mut().insert(header::SET_COOKIE, cookie);

    Ok(response)
}

/// Logout: clear the session cookie and return to the login page
///
/// Stateless by design. A token copied elsewhere stays valid until its own
/// expiry; there is no server-side revocation list.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    responses(
        (status = 302, description = "Session cookie cleared, redirected to login")
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn logout_user(State(state): State<AppState>) -> Result<Response, AppError> {
    let cookie = clear_session_cookie(&state.auth_config)?;

    let mut response =
        (StatusCode::FOUND, [(header::LOCATION, LOGIN_PATH)]).into_response();
    response.headers_mut().insert(header::SET_COOKIE, cookie);

    Ok(response)
}
