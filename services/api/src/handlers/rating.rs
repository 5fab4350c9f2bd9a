use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bobatcal_auth_types::identity::Identity;

use crate::domain::types::{Rating, RatingWithAuthor, RatingsSummary};
use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::rating::{
    GetDrinkRatingsUseCase, SubmitRatingInput, SubmitRatingUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct RatingAuthorResponse {
    pub name: String,
    pub image: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingResponse {
    pub id: String,
    pub rating_value: f64,
    pub review_text: Option<String>,
    #[serde(serialize_with = "bobatcal_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub user: RatingAuthorResponse,
}

impl From<RatingWithAuthor> for RatingResponse {
    fn from(item: RatingWithAuthor) -> Self {
        Self {
            id: item.rating.id.to_string(),
            rating_value: item.rating.value,
            review_text: item.rating.review,
            created_at: item.rating.created_at,
            user: RatingAuthorResponse {
                name: item.author_name,
                image: item.author_image,
            },
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingsSummaryResponse {
    pub average_rating: f64,
    pub rating_count: u64,
    pub ratings: Vec<RatingResponse>,
}

impl From<RatingsSummary> for RatingsSummaryResponse {
    fn from(summary: RatingsSummary) -> Self {
        Self {
            average_rating: summary.average_rating,
            rating_count: summary.rating_count,
            ratings: summary
                .ratings
                .into_iter()
                .map(RatingResponse::from)
                .collect(),
        }
    }
}

/// The stored row returned by the upsert.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedRatingResponse {
    pub id: String,
    pub user_id: String,
    pub drink_id: String,
    pub rating_value: f64,
    pub review_text: Option<String>,
    #[serde(serialize_with = "bobatcal_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Rating> for SubmittedRatingResponse {
    fn from(rating: Rating) -> Self {
        Self {
            id: rating.id.to_string(),
            user_id: rating.user_id.to_string(),
            drink_id: rating.drink_id.to_string(),
            rating_value: rating.value,
            review_text: rating.review,
            created_at: rating.created_at,
        }
    }
}

// ── GET /drinks/{drink_id}/ratings ───────────────────────────────────────────

pub async fn get_drink_ratings(
    State(state): State<AppState>,
    Path(drink_id): Path<Uuid>,
) -> Result<Json<RatingsSummaryResponse>, ApiServiceError> {
    let usecase = GetDrinkRatingsUseCase {
        ratings: state.rating_repo(),
        drinks: state.drink_repo(),
    };
    let summary = usecase.execute(drink_id).await?;
    Ok(Json(summary.into()))
}

// ── POST /drinks/{drink_id}/ratings ──────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRatingRequest {
    pub rating_value: f64,
    pub review_text: Option<String>,
}

/// Any authenticated role may rate; the session itself is the gate.
pub async fn submit_rating(
    identity: Identity,
    State(state): State<AppState>,
    Path(drink_id): Path<Uuid>,
    Json(body): Json<SubmitRatingRequest>,
) -> Result<Json<SubmittedRatingResponse>, ApiServiceError> {
    let usecase = SubmitRatingUseCase {
        ratings: state.rating_repo(),
        drinks: state.drink_repo(),
    };
    let rating = usecase
        .execute(
            identity.user_id,
            drink_id,
            SubmitRatingInput {
                value: body.rating_value,
                review: body.review_text,
            },
        )
        .await?;
    Ok(Json(rating.into()))
}
