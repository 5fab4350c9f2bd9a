use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, sea_query::OnConflict,
};
use uuid::Uuid;

use bobatcal_api_schema::{drinks, ratings, shops, users};
use bobatcal_domain::user::UserRole;

use crate::domain::repository::{
    DrinkRepository, RatingRepository, ShopRepository, UserRepository,
};
use crate::domain::types::{Drink, Rating, RatingWithAuthor, Shop, User};
use crate::error::ApiServiceError;

// ── Shop repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbShopRepository {
    pub db: DatabaseConnection,
}

impl ShopRepository for DbShopRepository {
    async fn list(&self) -> Result<Vec<Shop>, ApiServiceError> {
        let models = shops::Entity::find()
            .order_by_asc(shops::Column::Name)
            .all(&self.db)
            .await
            .context("list shops")?;
        Ok(models.into_iter().map(shop_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Shop>, ApiServiceError> {
        let model = shops::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find shop by id")?;
        Ok(model.map(shop_from_model))
    }

    async fn create(&self, shop: &Shop) -> Result<(), ApiServiceError> {
        shops::ActiveModel {
            id: Set(shop.id),
            name: Set(shop.name.clone()),
            address: Set(shop.address.clone()),
            city: Set(shop.city.clone()),
            zip_code: Set(shop.zip_code.clone()),
            phone: Set(shop.phone.clone()),
            hours: Set(shop.hours.clone()),
            place_id: Set(shop.place_id.clone()),
            created_at: Set(shop.created_at),
        }
        .insert(&self.db)
        .await
        .context("create shop")?;
        Ok(())
    }
}

fn shop_from_model(model: shops::Model) -> Shop {
    Shop {
        id: model.id,
        name: model.name,
        address: model.address,
        city: model.city,
        zip_code: model.zip_code,
        phone: model.phone,
        hours: model.hours,
        place_id: model.place_id,
        created_at: model.created_at,
    }
}

// ── Drink repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbDrinkRepository {
    pub db: DatabaseConnection,
}

impl DrinkRepository for DbDrinkRepository {
    async fn list_by_shop(&self, shop_id: Uuid) -> Result<Vec<Drink>, ApiServiceError> {
        let models = drinks::Entity::find()
            .filter(drinks::Column::ShopId.eq(shop_id))
            .order_by_asc(drinks::Column::Name)
            .all(&self.db)
            .await
            .context("list drinks by shop")?;
        Ok(models.into_iter().map(drink_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Drink>, ApiServiceError> {
        let model = drinks::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find drink by id")?;
        Ok(model.map(drink_from_model))
    }

    async fn create(&self, drink: &Drink) -> Result<(), ApiServiceError> {
        drinks::ActiveModel {
            id: Set(drink.id),
            shop_id: Set(drink.shop_id),
            name: Set(drink.name.clone()),
            created_at: Set(drink.created_at),
        }
        .insert(&self.db)
        .await
        .context("create drink")?;
        Ok(())
    }
}

fn drink_from_model(model: drinks::Model) -> Drink {
    Drink {
        id: model.id,
        shop_id: model.shop_id,
        name: model.name,
        created_at: model.created_at,
    }
}

// ── Rating repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRatingRepository {
    pub db: DatabaseConnection,
}

impl RatingRepository for DbRatingRepository {
    async fn list_for_drink(
        &self,
        drink_id: Uuid,
    ) -> Result<Vec<RatingWithAuthor>, ApiServiceError> {
        let rows = ratings::Entity::find()
            .filter(ratings::Column::DrinkId.eq(drink_id))
            .find_also_related(users::Entity)
            .order_by_desc(ratings::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list ratings for drink")?;
        Ok(rows
            .into_iter()
            .map(|(model, user)| {
                let (author_name, author_image) =
                    user.map(|u| (u.name, u.image)).unwrap_or_default();
                RatingWithAuthor {
                    rating: rating_from_model(model),
                    author_name,
                    author_image,
                }
            })
            .collect())
    }

    async fn list_values_by_drink_ids(
        &self,
        drink_ids: &[Uuid],
    ) -> Result<Vec<(Uuid, f64)>, ApiServiceError> {
        let models = ratings::Entity::find()
            .filter(ratings::Column::DrinkId.is_in(drink_ids.iter().copied()))
            .all(&self.db)
            .await
            .context("list rating values by drink ids")?;
        Ok(models.into_iter().map(|m| (m.drink_id, m.value)).collect())
    }

    async fn upsert(&self, rating: &Rating) -> Result<Rating, ApiServiceError> {
        let row = ratings::ActiveModel {
            id: Set(rating.id),
            user_id: Set(rating.user_id),
            drink_id: Set(rating.drink_id),
            value: Set(rating.value),
            review: Set(rating.review.clone()),
            created_at: Set(rating.created_at),
        };
        ratings::Entity::insert(row)
            .on_conflict(
                OnConflict::columns([ratings::Column::UserId, ratings::Column::DrinkId])
                    .update_columns([ratings::Column::Value, ratings::Column::Review])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("upsert rating")?;

        // Re-read through the unique pair: on the update path the stored row
        // keeps its original id and created_at.
        let stored = ratings::Entity::find()
            .filter(ratings::Column::UserId.eq(rating.user_id))
            .filter(ratings::Column::DrinkId.eq(rating.drink_id))
            .one(&self.db)
            .await
            .context("load stored rating")?
            .ok_or_else(|| {
                ApiServiceError::Internal(anyhow::anyhow!("rating missing after upsert"))
            })?;
        Ok(rating_from_model(stored))
    }
}

fn rating_from_model(model: ratings::Model) -> Rating {
    Rating {
        id: model.id,
        user_id: model.user_id,
        drink_id: model.drink_id,
        value: model.value,
        review: model.review,
        created_at: model.created_at,
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_provider_account(
        &self,
        provider_account_id: &str,
    ) -> Result<Option<User>, ApiServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::ProviderAccountId.eq(provider_account_id))
            .one(&self.db)
            .await
            .context("find user by provider account")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), ApiServiceError> {
        users::ActiveModel {
            id: Set(user.id),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            image: Set(user.image.clone()),
            role: Set(user.role.as_u8() as i16),
            provider_account_id: Set(user.provider_account_id.clone()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        image: model.image,
        // An out-of-band edit may leave an unknown role value; degrade to the
        // non-privileged role rather than fail the read.
        role: UserRole::from_u8(model.role as u8).unwrap_or(UserRole::User),
        provider_account_id: model.provider_account_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
