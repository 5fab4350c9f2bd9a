#[tokio::main]
async fn main() {
    sea_orm_migration::cli::run_cli(bobatcal_api_migration::Migrator).await;
}
