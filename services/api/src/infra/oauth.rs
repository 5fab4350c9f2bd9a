use anyhow::Context as _;
use serde::Deserialize;

use crate::domain::repository::IdentityProviderPort;
use crate::domain::types::ProviderProfile;
use crate::error::ApiServiceError;

/// OAuth code-exchange client against the external identity provider.
///
/// Two round-trips: the token endpoint turns the authorization code into an
/// access token, the userinfo endpoint turns that into a profile. A non-2xx
/// from either means the provider refused the sign-in (401), not that we
/// failed (500).
#[derive(Clone)]
pub struct HttpIdentityProvider {
    pub http: reqwest::Client,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct UserInfoResponse {
    sub: String,
    name: Option<String>,
    email: String,
    picture: Option<String>,
}

impl IdentityProviderPort for HttpIdentityProvider {
    async fn exchange_code(&self, code: &str) -> Result<ProviderProfile, ApiServiceError> {
        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("redirect_uri", self.redirect_url.as_str()),
        ];
        let response = self
            .http
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .context("identity provider token request")?;
        if !response.status().is_success() {
            return Err(ApiServiceError::SignInRejected);
        }
        let token: TokenResponse = response
            .json()
            .await
            .context("decode token response")?;

        let response = self
            .http
            .get(&self.userinfo_url)
            .bearer_auth(&token.access_token)
            .send()
            .await
            .context("identity provider userinfo request")?;
        if !response.status().is_success() {
            return Err(ApiServiceError::SignInRejected);
        }
        let info: UserInfoResponse = response
            .json()
            .await
            .context("decode userinfo response")?;

        let name = info.name.unwrap_or_else(|| info.email.clone());
        Ok(ProviderProfile {
            subject: info.sub,
            name,
            email: info.email,
            picture: info.picture,
        })
    }
}
