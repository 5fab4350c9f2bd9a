use chrono::Utc;
use uuid::Uuid;

use bobatcal_domain::rating::{
    average_rating, rating_value_in_range, review_within_limit,
};

use crate::domain::repository::{DrinkRepository, RatingRepository};
use crate::domain::types::{Rating, RatingsSummary};
use crate::error::ApiServiceError;

// ── SubmitRating (upsert) ────────────────────────────────────────────────────

pub struct SubmitRatingInput {
    pub value: f64,
    /// `None` clears any previously stored review.
    pub review: Option<String>,
}

pub struct SubmitRatingUseCase<R: RatingRepository, D: DrinkRepository> {
    pub ratings: R,
    pub drinks: D,
}

impl<R: RatingRepository, D: DrinkRepository> SubmitRatingUseCase<R, D> {
    /// Create-or-overwrite the caller's rating for a drink.
    ///
    /// Input is validated before any store access, so a rejected submission
    /// writes nothing. The write itself is a single conditional statement
    /// keyed on the `(user_id, drink_id)` unique index.
    pub async fn execute(
        &self,
        user_id: Uuid,
        drink_id: Uuid,
        input: SubmitRatingInput,
    ) -> Result<Rating, ApiServiceError> {
        if !rating_value_in_range(input.value) {
            return Err(ApiServiceError::InvalidField {
                field: "ratingValue",
                reason: "must be between 1 and 5",
            });
        }
        if let Some(ref review) = input.review {
            if !review_within_limit(review) {
                return Err(ApiServiceError::InvalidField {
                    field: "reviewText",
                    reason: "must be at most 1000 characters",
                });
            }
        }
        if self.drinks.find_by_id(drink_id).await?.is_none() {
            return Err(ApiServiceError::DrinkNotFound);
        }
        let rating = Rating {
            id: Uuid::now_v7(),
            user_id,
            drink_id,
            value: input.value,
            review: input.review,
            created_at: Utc::now(),
        };
        self.ratings.upsert(&rating).await
    }
}

// ── GetDrinkRatings (aggregation) ────────────────────────────────────────────

pub struct GetDrinkRatingsUseCase<R: RatingRepository, D: DrinkRepository> {
    pub ratings: R,
    pub drinks: D,
}

impl<R: RatingRepository, D: DrinkRepository> GetDrinkRatingsUseCase<R, D> {
    /// All ratings for a drink, newest first, with the derived average and
    /// count. A pure fold over the current rating set — nothing is cached.
    pub async fn execute(&self, drink_id: Uuid) -> Result<RatingsSummary, ApiServiceError> {
        if self.drinks.find_by_id(drink_id).await?.is_none() {
            return Err(ApiServiceError::DrinkNotFound);
        }
        let ratings = self.ratings.list_for_drink(drink_id).await?;
        let values: Vec<f64> = ratings.iter().map(|r| r.rating.value).collect();
        Ok(RatingsSummary {
            average_rating: average_rating(&values),
            rating_count: ratings.len() as u64,
            ratings,
        })
    }
}
