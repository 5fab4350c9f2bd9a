use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use bobatcal_domain::rating::average_rating;

use crate::domain::repository::{DrinkRepository, RatingRepository, ShopRepository};
use crate::domain::types::{Drink, DrinkWithStats};
use crate::error::ApiServiceError;

// ── CreateDrink ──────────────────────────────────────────────────────────────

pub struct CreateDrinkInput {
    pub name: String,
}

pub struct CreateDrinkUseCase<D: DrinkRepository, S: ShopRepository> {
    pub drinks: D,
    pub shops: S,
}

impl<D: DrinkRepository, S: ShopRepository> CreateDrinkUseCase<D, S> {
    pub async fn execute(
        &self,
        shop_id: Uuid,
        input: CreateDrinkInput,
    ) -> Result<Drink, ApiServiceError> {
        if input.name.trim().is_empty() {
            return Err(ApiServiceError::InvalidField {
                field: "name",
                reason: "must not be empty",
            });
        }
        if self.shops.find_by_id(shop_id).await?.is_none() {
            return Err(ApiServiceError::ShopNotFound);
        }
        let drink = Drink {
            id: Uuid::now_v7(),
            shop_id,
            name: input.name,
            created_at: Utc::now(),
        };
        self.drinks.create(&drink).await?;
        Ok(drink)
    }
}

// ── ListShopDrinks ───────────────────────────────────────────────────────────

pub struct ListShopDrinksUseCase<D: DrinkRepository, S: ShopRepository, R: RatingRepository> {
    pub drinks: D,
    pub shops: S,
    pub ratings: R,
}

impl<D: DrinkRepository, S: ShopRepository, R: RatingRepository>
    ListShopDrinksUseCase<D, S, R>
{
    /// Drinks for a shop, each annotated with its derived average and count.
    ///
    /// An empty result triggers a shop-existence check so that an empty menu
    /// (200, `[]`) is distinguishable from an unknown shop (404).
    pub async fn execute(&self, shop_id: Uuid) -> Result<Vec<DrinkWithStats>, ApiServiceError> {
        let drinks = self.drinks.list_by_shop(shop_id).await?;
        if drinks.is_empty() {
            if self.shops.find_by_id(shop_id).await?.is_none() {
                return Err(ApiServiceError::ShopNotFound);
            }
            return Ok(vec![]);
        }

        // One batched read across all listed drinks, folded per drink here.
        let drink_ids: Vec<Uuid> = drinks.iter().map(|d| d.id).collect();
        let mut values_by_drink: HashMap<Uuid, Vec<f64>> = HashMap::new();
        for (drink_id, value) in self.ratings.list_values_by_drink_ids(&drink_ids).await? {
            values_by_drink.entry(drink_id).or_default().push(value);
        }

        Ok(drinks
            .into_iter()
            .map(|drink| {
                let values = values_by_drink.remove(&drink.id).unwrap_or_default();
                DrinkWithStats {
                    average_rating: average_rating(&values),
                    rating_count: values.len() as u64,
                    drink,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::domain::types::{Rating, RatingWithAuthor, Shop};

    struct MockDrinkRepo {
        drinks: Vec<Drink>,
        created: Mutex<Option<Drink>>,
    }

    impl DrinkRepository for MockDrinkRepo {
        async fn list_by_shop(&self, _shop_id: Uuid) -> Result<Vec<Drink>, ApiServiceError> {
            Ok(self.drinks.clone())
        }
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Drink>, ApiServiceError> {
            Ok(self.drinks.iter().find(|d| d.id == id).cloned())
        }
        async fn create(&self, drink: &Drink) -> Result<(), ApiServiceError> {
            *self.created.lock().unwrap() = Some(drink.clone());
            Ok(())
        }
    }

    struct MockShopRepo {
        shop: Option<Shop>,
    }

    impl ShopRepository for MockShopRepo {
        async fn list(&self) -> Result<Vec<Shop>, ApiServiceError> {
            Ok(self.shop.clone().into_iter().collect())
        }
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Shop>, ApiServiceError> {
            Ok(self.shop.clone())
        }
        async fn create(&self, _shop: &Shop) -> Result<(), ApiServiceError> {
            Ok(())
        }
    }

    struct MockRatingRepo {
        values: Vec<(Uuid, f64)>,
    }

    impl RatingRepository for MockRatingRepo {
        async fn list_for_drink(
            &self,
            _drink_id: Uuid,
        ) -> Result<Vec<RatingWithAuthor>, ApiServiceError> {
            Ok(vec![])
        }
        async fn list_values_by_drink_ids(
            &self,
            _drink_ids: &[Uuid],
        ) -> Result<Vec<(Uuid, f64)>, ApiServiceError> {
            Ok(self.values.clone())
        }
        async fn upsert(&self, rating: &Rating) -> Result<Rating, ApiServiceError> {
            Ok(rating.clone())
        }
    }

    fn test_shop() -> Shop {
        Shop {
            id: Uuid::now_v7(),
            name: "Boba Bliss".into(),
            address: "123 Pearl St".into(),
            city: None,
            zip_code: None,
            phone: None,
            hours: None,
            place_id: None,
            created_at: Utc::now(),
        }
    }

    fn test_drink(shop_id: Uuid, name: &str) -> Drink {
        Drink {
            id: Uuid::now_v7(),
            shop_id,
            name: name.into(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn should_reject_drink_with_empty_name() {
        let uc = CreateDrinkUseCase {
            drinks: MockDrinkRepo {
                drinks: vec![],
                created: Mutex::new(None),
            },
            shops: MockShopRepo {
                shop: Some(test_shop()),
            },
        };
        let result = uc
            .execute(Uuid::now_v7(), CreateDrinkInput { name: "  ".into() })
            .await;
        assert!(matches!(
            result,
            Err(ApiServiceError::InvalidField { field: "name", .. })
        ));
    }

    #[tokio::test]
    async fn should_reject_drink_for_unknown_shop() {
        let uc = CreateDrinkUseCase {
            drinks: MockDrinkRepo {
                drinks: vec![],
                created: Mutex::new(None),
            },
            shops: MockShopRepo { shop: None },
        };
        let result = uc
            .execute(
                Uuid::now_v7(),
                CreateDrinkInput {
                    name: "Taro Milk Tea".into(),
                },
            )
            .await;
        assert!(matches!(result, Err(ApiServiceError::ShopNotFound)));
    }

    #[tokio::test]
    async fn should_create_drink_under_existing_shop() {
        let shop = test_shop();
        let uc = CreateDrinkUseCase {
            drinks: MockDrinkRepo {
                drinks: vec![],
                created: Mutex::new(None),
            },
            shops: MockShopRepo {
                shop: Some(shop.clone()),
            },
        };
        let drink = uc
            .execute(
                shop.id,
                CreateDrinkInput {
                    name: "Taro Milk Tea".into(),
                },
            )
            .await
            .unwrap();
        assert_eq!(drink.shop_id, shop.id);
        assert_eq!(drink.name, "Taro Milk Tea");

        let created = uc.drinks.created.lock().unwrap().clone().unwrap();
        assert_eq!(created.id, drink.id);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_shop_listing() {
        let uc = ListShopDrinksUseCase {
            drinks: MockDrinkRepo {
                drinks: vec![],
                created: Mutex::new(None),
            },
            shops: MockShopRepo { shop: None },
            ratings: MockRatingRepo { values: vec![] },
        };
        let result = uc.execute(Uuid::now_v7()).await;
        assert!(matches!(result, Err(ApiServiceError::ShopNotFound)));
    }

    #[tokio::test]
    async fn should_return_empty_list_for_shop_with_no_drinks() {
        let shop = test_shop();
        let uc = ListShopDrinksUseCase {
            drinks: MockDrinkRepo {
                drinks: vec![],
                created: Mutex::new(None),
            },
            shops: MockShopRepo { shop: Some(shop) },
            ratings: MockRatingRepo { values: vec![] },
        };
        let listed = uc.execute(Uuid::now_v7()).await.unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn should_annotate_each_drink_with_its_own_aggregates() {
        let shop = test_shop();
        let rated = test_drink(shop.id, "Brown Sugar Boba");
        let unrated = test_drink(shop.id, "Jasmine Green Tea");
        let uc = ListShopDrinksUseCase {
            drinks: MockDrinkRepo {
                drinks: vec![rated.clone(), unrated.clone()],
                created: Mutex::new(None),
            },
            shops: MockShopRepo {
                shop: Some(shop.clone()),
            },
            ratings: MockRatingRepo {
                values: vec![(rated.id, 5.0), (rated.id, 3.0), (rated.id, 4.0)],
            },
        };
        let listed = uc.execute(shop.id).await.unwrap();
        assert_eq!(listed.len(), 2);

        let rated_stats = listed.iter().find(|d| d.drink.id == rated.id).unwrap();
        assert_eq!(rated_stats.average_rating, 4.0);
        assert_eq!(rated_stats.rating_count, 3);

        let unrated_stats = listed.iter().find(|d| d.drink.id == unrated.id).unwrap();
        assert_eq!(unrated_stats.average_rating, 0.0);
        assert_eq!(unrated_stats.rating_count, 0);
    }
}
