/// API service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3420). Env var: `API_PORT`.
    pub api_port: u16,
    /// HS256 signing secret for session tokens.
    pub session_secret: String,
    /// Domain attribute on the session cookie (default "localhost").
    pub cookie_domain: String,
    /// OAuth client id registered with the identity provider.
    pub oauth_client_id: String,
    /// OAuth client secret.
    pub oauth_client_secret: String,
    /// Redirect URL the authorization code was issued against.
    pub oauth_redirect_url: String,
    /// Provider token endpoint (defaults to Google's).
    pub oauth_token_url: String,
    /// Provider userinfo endpoint (defaults to Google's).
    pub oauth_userinfo_url: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            api_port: std::env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3420),
            session_secret: std::env::var("SESSION_SECRET").expect("SESSION_SECRET"),
            cookie_domain: std::env::var("COOKIE_DOMAIN").unwrap_or_else(|_| "localhost".into()),
            oauth_client_id: std::env::var("OAUTH_CLIENT_ID").expect("OAUTH_CLIENT_ID"),
            oauth_client_secret: std::env::var("OAUTH_CLIENT_SECRET")
                .expect("OAUTH_CLIENT_SECRET"),
            oauth_redirect_url: std::env::var("OAUTH_REDIRECT_URL").expect("OAUTH_REDIRECT_URL"),
            oauth_token_url: std::env::var("OAUTH_TOKEN_URL")
                .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".into()),
            oauth_userinfo_url: std::env::var("OAUTH_USERINFO_URL")
                .unwrap_or_else(|_| "https://openidconnect.googleapis.com/v1/userinfo".into()),
        }
    }
}
