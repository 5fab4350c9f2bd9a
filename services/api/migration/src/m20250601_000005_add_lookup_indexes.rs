use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Menu listing filters drinks by shop.
        manager
            .create_index(
                Index::create()
                    .name("ix_drinks_shop_id")
                    .table(Drinks::Table)
                    .col(Drinks::ShopId)
                    .to_owned(),
            )
            .await?;

        // Rating reads (per drink and batched) filter by drink.
        manager
            .create_index(
                Index::create()
                    .name("ix_ratings_drink_id")
                    .table(Ratings::Table)
                    .col(Ratings::DrinkId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("ix_ratings_drink_id")
                    .table(Ratings::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_drinks_shop_id")
                    .table(Drinks::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Drinks {
    Table,
    ShopId,
}

#[derive(Iden)]
enum Ratings {
    Table,
    DrinkId,
}
