use std::sync::Arc;

use sea_orm::DatabaseConnection;

use bobatcal_auth_types::identity::SessionSecret;

use crate::config::ApiConfig;
use crate::infra::db::{
    DbDrinkRepository, DbRatingRepository, DbShopRepository, DbUserRepository,
};
use crate::infra::oauth::HttpIdentityProvider;

/// Shared application state passed to every handler via axum `State`.
///
/// The `DatabaseConnection` is the process-wide store handle: created once at
/// startup, cloned per request, never explicitly torn down.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub http: reqwest::Client,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: ApiConfig) -> Self {
        Self {
            db,
            http: reqwest::Client::new(),
            config: Arc::new(config),
        }
    }

    pub fn shop_repo(&self) -> DbShopRepository {
        DbShopRepository {
            db: self.db.clone(),
        }
    }

    pub fn drink_repo(&self) -> DbDrinkRepository {
        DbDrinkRepository {
            db: self.db.clone(),
        }
    }

    pub fn rating_repo(&self) -> DbRatingRepository {
        DbRatingRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn identity_provider(&self) -> HttpIdentityProvider {
        HttpIdentityProvider {
            http: self.http.clone(),
            client_id: self.config.oauth_client_id.clone(),
            client_secret: self.config.oauth_client_secret.clone(),
            redirect_url: self.config.oauth_redirect_url.clone(),
            token_url: self.config.oauth_token_url.clone(),
            userinfo_url: self.config.oauth_userinfo_url.clone(),
        }
    }
}

impl SessionSecret for AppState {
    fn session_secret(&self) -> &str {
        &self.config.session_secret
    }
}
