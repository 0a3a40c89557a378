use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::TokenVerifier;
use crate::config::AppConfig;

/// Shared application state available to all handlers via `State<AppState>`
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    pub fn new(pool: PgPool, config: AppConfig, verifier: TokenVerifier) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            verifier: Arc::new(verifier),
        }
    }
}
