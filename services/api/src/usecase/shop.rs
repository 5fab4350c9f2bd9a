use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::ShopRepository;
use crate::domain::types::{Shop, normalize_optional};
use crate::error::ApiServiceError;

// ── CreateShop ───────────────────────────────────────────────────────────────

pub struct CreateShopInput {
    pub name: String,
    pub address: String,
    pub city: Option<String>,
    pub zip_code: Option<String>,
}

pub struct CreateShopUseCase<R: ShopRepository> {
    pub repo: R,
}

impl<R: ShopRepository> CreateShopUseCase<R> {
    pub async fn execute(&self, input: CreateShopInput) -> Result<Shop, ApiServiceError> {
        if input.name.trim().is_empty() {
            return Err(ApiServiceError::InvalidField {
                field: "name",
                reason: "must not be empty",
            });
        }
        if input.address.trim().is_empty() {
            return Err(ApiServiceError::InvalidField {
                field: "address",
                reason: "must not be empty",
            });
        }
        let shop = Shop {
            id: Uuid::now_v7(),
            name: input.name,
            address: input.address,
            city: normalize_optional(input.city),
            zip_code: normalize_optional(input.zip_code),
            phone: None,
            hours: None,
            place_id: None,
            created_at: Utc::now(),
        };
        self.repo.create(&shop).await?;
        Ok(shop)
    }
}

// ── GetShop ──────────────────────────────────────────────────────────────────

pub struct GetShopUseCase<R: ShopRepository> {
    pub repo: R,
}

impl<R: ShopRepository> GetShopUseCase<R> {
    pub async fn execute(&self, shop_id: Uuid) -> Result<Shop, ApiServiceError> {
        self.repo
            .find_by_id(shop_id)
            .await?
            .ok_or(ApiServiceError::ShopNotFound)
    }
}

// ── ListShops ────────────────────────────────────────────────────────────────

pub struct ListShopsUseCase<R: ShopRepository> {
    pub repo: R,
}

impl<R: ShopRepository> ListShopsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Shop>, ApiServiceError> {
        self.repo.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MockShopRepo {
        shop: Option<Shop>,
        created: Mutex<Option<Shop>>,
    }

    impl MockShopRepo {
        fn empty() -> Self {
            Self {
                shop: None,
                created: Mutex::new(None),
            }
        }
    }

    impl ShopRepository for MockShopRepo {
        async fn list(&self) -> Result<Vec<Shop>, ApiServiceError> {
            Ok(self.shop.clone().into_iter().collect())
        }
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Shop>, ApiServiceError> {
            Ok(self.shop.clone())
        }
        async fn create(&self, shop: &Shop) -> Result<(), ApiServiceError> {
            *self.created.lock().unwrap() = Some(shop.clone());
            Ok(())
        }
    }

    fn test_shop() -> Shop {
        Shop {
            id: Uuid::now_v7(),
            name: "Boba Bliss".into(),
            address: "123 Pearl St".into(),
            city: Some("Austin".into()),
            zip_code: Some("78701".into()),
            phone: None,
            hours: None,
            place_id: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn should_reject_empty_name() {
        let uc = CreateShopUseCase {
            repo: MockShopRepo::empty(),
        };
        let result = uc
            .execute(CreateShopInput {
                name: "".into(),
                address: "123 Pearl St".into(),
                city: None,
                zip_code: None,
            })
            .await;
        assert!(matches!(
            result,
            Err(ApiServiceError::InvalidField { field: "name", .. })
        ));
    }

    #[tokio::test]
    async fn should_reject_blank_address() {
        let uc = CreateShopUseCase {
            repo: MockShopRepo::empty(),
        };
        let result = uc
            .execute(CreateShopInput {
                name: "Boba Bliss".into(),
                address: "   ".into(),
                city: None,
                zip_code: None,
            })
            .await;
        assert!(matches!(
            result,
            Err(ApiServiceError::InvalidField {
                field: "address",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn should_store_blank_city_and_zip_as_absent() {
        let repo = MockShopRepo::empty();
        let uc = CreateShopUseCase { repo };
        let shop = uc
            .execute(CreateShopInput {
                name: "Boba Bliss".into(),
                address: "123 Pearl St".into(),
                city: Some("".into()),
                zip_code: Some("  ".into()),
            })
            .await
            .unwrap();
        assert_eq!(shop.city, None);
        assert_eq!(shop.zip_code, None);

        let created = uc.repo.created.lock().unwrap().clone().unwrap();
        assert_eq!(created.city, None);
        assert_eq!(created.zip_code, None);
    }

    #[tokio::test]
    async fn should_create_shop_and_return_it() {
        let uc = CreateShopUseCase {
            repo: MockShopRepo::empty(),
        };
        let shop = uc
            .execute(CreateShopInput {
                name: "Boba Bliss".into(),
                address: "123 Pearl St".into(),
                city: Some("Austin".into()),
                zip_code: Some("78701".into()),
            })
            .await
            .unwrap();
        assert_eq!(shop.name, "Boba Bliss");
        assert_eq!(shop.address, "123 Pearl St");
        assert_eq!(shop.city.as_deref(), Some("Austin"));

        let created = uc.repo.created.lock().unwrap().clone().unwrap();
        assert_eq!(created.id, shop.id);
    }

    #[tokio::test]
    async fn should_return_shop_not_found() {
        let uc = GetShopUseCase {
            repo: MockShopRepo::empty(),
        };
        let result = uc.execute(Uuid::now_v7()).await;
        assert!(matches!(result, Err(ApiServiceError::ShopNotFound)));
    }

    #[tokio::test]
    async fn should_return_shop_by_id() {
        let shop = test_shop();
        let uc = GetShopUseCase {
            repo: MockShopRepo {
                shop: Some(shop.clone()),
                created: Mutex::new(None),
            },
        };
        let found = uc.execute(shop.id).await.unwrap();
        assert_eq!(found.id, shop.id);
        assert_eq!(found.name, shop.name);
    }
}
