use sea_orm::Database;
use tracing::info;

use bobatcal_api::config::ApiConfig;
use bobatcal_api::router::build_router;
use bobatcal_api::state::AppState;
use bobatcal_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let http_addr = format!("0.0.0.0:{}", config.api_port);
    let state = AppState::new(db, config);

    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("bobatcal api listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
