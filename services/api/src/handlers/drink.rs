use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bobatcal_auth_types::identity::Identity;

use crate::domain::types::{Drink, DrinkWithStats};
use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::drink::{CreateDrinkInput, CreateDrinkUseCase, ListShopDrinksUseCase};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkResponse {
    pub id: String,
    pub shop_id: String,
    pub name: String,
    #[serde(serialize_with = "bobatcal_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Drink> for DrinkResponse {
    fn from(drink: Drink) -> Self {
        Self {
            id: drink.id.to_string(),
            shop_id: drink.shop_id.to_string(),
            name: drink.name,
            created_at: drink.created_at,
        }
    }
}

/// List item: the drink plus its derived aggregates.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkListItemResponse {
    pub id: String,
    pub shop_id: String,
    pub name: String,
    #[serde(serialize_with = "bobatcal_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub average_rating: f64,
    pub rating_count: u64,
}

impl From<DrinkWithStats> for DrinkListItemResponse {
    fn from(item: DrinkWithStats) -> Self {
        Self {
            id: item.drink.id.to_string(),
            shop_id: item.drink.shop_id.to_string(),
            name: item.drink.name,
            created_at: item.drink.created_at,
            average_rating: item.average_rating,
            rating_count: item.rating_count,
        }
    }
}

// ── GET /shops/{shop_id}/drinks ──────────────────────────────────────────────

pub async fn get_shop_drinks(
    State(state): State<AppState>,
    Path(shop_id): Path<Uuid>,
) -> Result<Json<Vec<DrinkListItemResponse>>, ApiServiceError> {
    let usecase = ListShopDrinksUseCase {
        drinks: state.drink_repo(),
        shops: state.shop_repo(),
        ratings: state.rating_repo(),
    };
    let drinks = usecase.execute(shop_id).await?;
    Ok(Json(
        drinks.into_iter().map(DrinkListItemResponse::from).collect(),
    ))
}

// ── POST /shops/{shop_id}/drinks ─────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDrinkRequest {
    pub name: String,
}

pub async fn create_drink(
    identity: Identity,
    State(state): State<AppState>,
    Path(shop_id): Path<Uuid>,
    Json(body): Json<CreateDrinkRequest>,
) -> Result<(StatusCode, Json<DrinkResponse>), ApiServiceError> {
    if !identity.role.can_manage_catalog() {
        return Err(ApiServiceError::Forbidden);
    }
    let usecase = CreateDrinkUseCase {
        drinks: state.drink_repo(),
        shops: state.shop_repo(),
    };
    let drink = usecase
        .execute(shop_id, CreateDrinkInput { name: body.name })
        .await?;
    Ok((StatusCode::CREATED, Json(drink.into())))
}
