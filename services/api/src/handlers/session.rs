use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use bobatcal_auth_types::cookie::{
    BOBATCAL_SESSION, clear_session_cookie, set_session_cookie,
};
use bobatcal_auth_types::token::validate_session_token;
use bobatcal_domain::user::UserRole;

use crate::domain::types::User;
use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::session::{SignInInput, SignInUseCase};

// ── POST /auth/session ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignInRequest {
    /// Authorization code from the identity provider redirect.
    pub code: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub role: UserRole,
}

impl From<User> for SessionUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            image: user.image,
            role: user.role,
        }
    }
}

pub async fn create_session(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<SignInRequest>,
) -> Result<impl IntoResponse, ApiServiceError> {
    let usecase = SignInUseCase {
        users: state.user_repo(),
        provider: state.identity_provider(),
        session_secret: state.config.session_secret.clone(),
    };
    let out = usecase.execute(SignInInput { code: body.code }).await?;

    let jar = set_session_cookie(jar, out.session_token, state.config.cookie_domain.clone());
    Ok((
        StatusCode::OK,
        jar,
        Json(SessionUserResponse::from(out.user)),
    ))
}

// ── GET /auth/session ────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user_id: String,
    pub role: UserRole,
    pub expires_at: u64,
}

pub async fn get_session(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<SessionResponse>, ApiServiceError> {
    let token_value = jar
        .get(BOBATCAL_SESSION)
        .map(|c| c.value().to_owned())
        .ok_or(ApiServiceError::Unauthorized)?;

    let info = validate_session_token(&token_value, &state.config.session_secret)
        .map_err(|_| ApiServiceError::Unauthorized)?;
    let role = UserRole::from_u8(info.user_role).ok_or(ApiServiceError::Unauthorized)?;

    Ok(Json(SessionResponse {
        user_id: info.user_id.to_string(),
        role,
        expires_at: info.expires_at,
    }))
}

// ── DELETE /auth/session ─────────────────────────────────────────────────────

pub async fn delete_session(
    State(state): State<AppState>,
    jar: CookieJar,
) -> impl IntoResponse {
    let jar = clear_session_cookie(jar, state.config.cookie_domain.clone());
    (StatusCode::NO_CONTENT, jar)
}
