use std::sync::Arc;

use crate::config::auth::AuthConfig;
use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::directory::UserDirectory;
use crate::directory::postgres::PgDirectory;

#[derive(Clone, Debug)]
pub struct AppState {
    pub directory: Arc<dyn UserDirectory>,
    pub auth_config: AuthConfig,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        directory: Arc::new(PgDirectory::new(init_db_pool().await)),
        auth_config: AuthConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
