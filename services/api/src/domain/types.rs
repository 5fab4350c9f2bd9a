use chrono::{DateTime, Utc};
use uuid::Uuid;

use bobatcal_domain::user::UserRole;

/// A boba-tea shop. Immutable after creation in normal flow.
#[derive(Debug, Clone)]
pub struct Shop {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
    pub hours: Option<String>,
    pub place_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A menu item belonging to exactly one shop.
#[derive(Debug, Clone)]
pub struct Drink {
    pub id: Uuid,
    pub shop_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A drink annotated with its derived rating aggregates.
///
/// Aggregates are recomputed from the live rating set on every read.
#[derive(Debug, Clone)]
pub struct DrinkWithStats {
    pub drink: Drink,
    pub average_rating: f64,
    pub rating_count: u64,
}

/// User profile, created on first sign-in through the identity provider.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub role: UserRole,
    pub provider_account_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user's opinion of a drink.
#[derive(Debug, Clone)]
pub struct Rating {
    pub id: Uuid,
    pub user_id: Uuid,
    pub drink_id: Uuid,
    pub value: f64,
    pub review: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A rating joined with the author's public profile fields.
#[derive(Debug, Clone)]
pub struct RatingWithAuthor {
    pub rating: Rating,
    pub author_name: String,
    pub author_image: Option<String>,
}

/// Everything the ratings read endpoint returns for one drink.
#[derive(Debug, Clone)]
pub struct RatingsSummary {
    pub average_rating: f64,
    pub rating_count: u64,
    pub ratings: Vec<RatingWithAuthor>,
}

/// Profile returned by the identity provider after a code exchange.
#[derive(Debug, Clone)]
pub struct ProviderProfile {
    /// Stable subject identifier at the provider.
    pub subject: String,
    pub name: String,
    pub email: String,
    pub picture: Option<String>,
}

/// Normalize optional text input: blank values are stored as absent,
/// never as empty strings.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_non_blank_optional_values() {
        assert_eq!(
            normalize_optional(Some("Austin".into())),
            Some("Austin".to_owned())
        );
    }

    #[test]
    fn should_drop_empty_optional_values() {
        assert_eq!(normalize_optional(Some("".into())), None);
        assert_eq!(normalize_optional(Some("   ".into())), None);
        assert_eq!(normalize_optional(None), None);
    }
}
