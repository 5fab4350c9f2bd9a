//! Session-cookie identity extractor.

use axum::extract::FromRequestParts;
use axum_extra::extract::CookieJar;
use bobatcal_domain::user::UserRole;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

use crate::cookie::BOBATCAL_SESSION;
use crate::token::validate_session_token;

/// Gives the extractor access to the signing secret held in application
/// state. The API service implements this on its `AppState`.
pub trait SessionSecret {
    fn session_secret(&self) -> &str;
}

/// Caller identity resolved from the `bobatcal_session` cookie.
///
/// Returns 401 if the cookie is absent, the token fails validation, or the
/// role claim is not a known [`UserRole`]. Role enforcement (403) is done by
/// handlers after extraction.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl<S> FromRequestParts<S> for Identity
where
    S: SessionSecret + Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let jar = CookieJar::from_headers(&parts.headers);
        let identity = jar
            .get(BOBATCAL_SESSION)
            .and_then(|cookie| validate_session_token(cookie.value(), state.session_secret()).ok())
            .and_then(|info| {
                let role = UserRole::from_u8(info.user_role)?;
                Some(Identity {
                    user_id: info.user_id,
                    role,
                })
            });

        async move { identity.ok_or(StatusCode::UNAUTHORIZED) }
    }
}
