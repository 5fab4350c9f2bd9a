use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use bobatcal_core::health::{healthz, readyz};
use bobatcal_core::middleware::request_id_layer;

use crate::handlers::{
    drink::{create_drink, get_shop_drinks},
    rating::{get_drink_ratings, submit_rating},
    session::{create_session, delete_session, get_session},
    shop::{create_shop, get_shop, get_shops},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Shops
        .route("/shops", get(get_shops))
        .route("/shops", post(create_shop))
        .route("/shops/{shop_id}", get(get_shop))
        // Drinks
        .route("/shops/{shop_id}/drinks", get(get_shop_drinks))
        .route("/shops/{shop_id}/drinks", post(create_drink))
        // Ratings
        .route("/drinks/{drink_id}/ratings", get(get_drink_ratings))
        .route("/drinks/{drink_id}/ratings", post(submit_rating))
        // Session
        .route("/auth/session", post(create_session))
        .route("/auth/session", get(get_session))
        .route("/auth/session", delete(delete_session))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
