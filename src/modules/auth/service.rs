use anyhow::anyhow;
use tracing::instrument;

use crate::config::auth::AuthConfig;
use crate::directory::UserDirectory;
use crate::directory::model::UserRecord;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_session_token;
use crate::utils::password::verify_password;

use super::model::LoginRequest;

pub struct AuthService;

impl AuthService {
    /// Validates credentials and issues a session token.
    ///
    /// Returns the token together with the matched record so the caller can
    /// build both the cookie and the response body.
    #[instrument(skip_all)]
    pub async fn login(
        directory: &dyn UserDirectory,
        dto: LoginRequest,
        auth_config: &AuthConfig,
    ) -> Result<(String, UserRecord), AppError> {
        let user = Self::validate_credentials(directory, &dto.email, &dto.password).await?;
        let token = create_session_token(&user, auth_config)?;
        Ok((token, user))
    }

    /// Checks an email/password pair against the directory.
    ///
    /// An unknown email and a wrong password return the exact same error, so
    /// a caller probing the login endpoint cannot enumerate accounts. A
    /// directory failure surfaces as a 500 and is not retried.
    #[instrument(skip_all)]
    async fn validate_credentials(
        directory: &dyn UserDirectory,
        email: &str,
        password: &str,
    ) -> Result<UserRecord, AppError> {
        if email.is_empty() || password.is_empty() {
            return Err(AppError::bad_request(anyhow!(
                "Email and password are required"
            )));
        }

        let user = directory
            .lookup(email)
            .await?
            .ok_or_else(|| AppError::unauthorized(anyhow!("Invalid email or password")))?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::unauthorized(anyhow!("Invalid email or password")));
        }

        Ok(user)
    }
}
