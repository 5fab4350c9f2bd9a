use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiServiceError {
    #[error("shop not found")]
    ShopNotFound,
    #[error("drink not found")]
    DrinkNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("{field} {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("sign-in rejected by identity provider")]
    SignInRejected,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ShopNotFound => "SHOP_NOT_FOUND",
            Self::DrinkNotFound => "DRINK_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::InvalidField { .. } => "INVALID_FIELD",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::SignInRejected => "SIGN_IN_REJECTED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::ShopNotFound | Self::DrinkNotFound | Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::InvalidField { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized | Self::SignInRejected => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = match &self {
            Self::InvalidField { field, .. } => serde_json::json!({
                "kind": self.kind(),
                "message": self.to_string(),
                "field": field,
            }),
            _ => serde_json::json!({
                "kind": self.kind(),
                "message": self.to_string(),
            }),
        };
        (status, axum::Json(body)).into_response()
    }
}
