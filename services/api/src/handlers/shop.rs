use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bobatcal_auth_types::identity::Identity;

use crate::domain::types::Shop;
use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::shop::{
    CreateShopInput, CreateShopUseCase, GetShopUseCase, ListShopsUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopResponse {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
    pub hours: Option<String>,
    pub place_id: Option<String>,
    #[serde(serialize_with = "bobatcal_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Shop> for ShopResponse {
    fn from(shop: Shop) -> Self {
        Self {
            id: shop.id.to_string(),
            name: shop.name,
            address: shop.address,
            city: shop.city,
            zip_code: shop.zip_code,
            phone: shop.phone,
            hours: shop.hours,
            place_id: shop.place_id,
            created_at: shop.created_at,
        }
    }
}

// ── GET /shops ───────────────────────────────────────────────────────────────

pub async fn get_shops(
    State(state): State<AppState>,
) -> Result<Json<Vec<ShopResponse>>, ApiServiceError> {
    let usecase = ListShopsUseCase {
        repo: state.shop_repo(),
    };
    let shops = usecase.execute().await?;
    Ok(Json(shops.into_iter().map(ShopResponse::from).collect()))
}

// ── POST /shops ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShopRequest {
    pub name: String,
    pub address: String,
    pub city: Option<String>,
    pub zip_code: Option<String>,
}

pub async fn create_shop(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateShopRequest>,
) -> Result<(StatusCode, Json<ShopResponse>), ApiServiceError> {
    if !identity.role.can_manage_catalog() {
        return Err(ApiServiceError::Forbidden);
    }
    let usecase = CreateShopUseCase {
        repo: state.shop_repo(),
    };
    let shop = usecase
        .execute(CreateShopInput {
            name: body.name,
            address: body.address,
            city: body.city,
            zip_code: body.zip_code,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(shop.into())))
}

// ── GET /shops/{shop_id} ─────────────────────────────────────────────────────

pub async fn get_shop(
    State(state): State<AppState>,
    Path(shop_id): Path<Uuid>,
) -> Result<Json<ShopResponse>, ApiServiceError> {
    let usecase = GetShopUseCase {
        repo: state.shop_repo(),
    };
    let shop = usecase.execute(shop_id).await?;
    Ok(Json(shop.into()))
}
