use sea_orm_migration::prelude::*;

mod m20250601_000001_create_users;
mod m20250601_000002_create_shops;
mod m20250601_000003_create_drinks;
mod m20250601_000004_create_ratings;
mod m20250601_000005_add_lookup_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_users::Migration),
            Box::new(m20250601_000002_create_shops::Migration),
            Box::new(m20250601_000003_create_drinks::Migration),
            Box::new(m20250601_000004_create_ratings::Migration),
            Box::new(m20250601_000005_add_lookup_indexes::Migration),
        ]
    }
}
