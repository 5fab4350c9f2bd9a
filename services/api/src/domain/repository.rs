#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{
    Drink, ProviderProfile, Rating, RatingWithAuthor, Shop, User,
};
use crate::error::ApiServiceError;

/// Repository for shops.
pub trait ShopRepository: Send + Sync {
    /// All shops, alphabetical by name.
    async fn list(&self) -> Result<Vec<Shop>, ApiServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Shop>, ApiServiceError>;
    async fn create(&self, shop: &Shop) -> Result<(), ApiServiceError>;
}

/// Repository for drinks.
pub trait DrinkRepository: Send + Sync {
    /// Drinks belonging to a shop, alphabetical by name.
    async fn list_by_shop(&self, shop_id: Uuid) -> Result<Vec<Drink>, ApiServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Drink>, ApiServiceError>;
    async fn create(&self, drink: &Drink) -> Result<(), ApiServiceError>;
}

/// Repository for ratings.
pub trait RatingRepository: Send + Sync {
    /// Ratings for one drink with author profile fields, newest first.
    async fn list_for_drink(
        &self,
        drink_id: Uuid,
    ) -> Result<Vec<RatingWithAuthor>, ApiServiceError>;

    /// One batched read of `(drink_id, value)` pairs across the given drinks;
    /// the caller folds them per drink.
    async fn list_values_by_drink_ids(
        &self,
        drink_ids: &[Uuid],
    ) -> Result<Vec<(Uuid, f64)>, ApiServiceError>;

    /// Insert-or-overwrite keyed on the `(user_id, drink_id)` unique index.
    /// Returns the stored row. This is the only write path for ratings; its
    /// atomicity under concurrent same-pair submissions comes from the
    /// store's `ON CONFLICT` handling, not from any application lock.
    async fn upsert(&self, rating: &Rating) -> Result<Rating, ApiServiceError>;
}

/// Repository for user profiles.
pub trait UserRepository: Send + Sync {
    async fn find_by_provider_account(
        &self,
        provider_account_id: &str,
    ) -> Result<Option<User>, ApiServiceError>;
    async fn create(&self, user: &User) -> Result<(), ApiServiceError>;
}

/// Port for the external OAuth identity provider.
pub trait IdentityProviderPort: Send + Sync {
    /// Exchange an authorization code for the signed-in profile.
    async fn exchange_code(&self, code: &str) -> Result<ProviderProfile, ApiServiceError>;
}
