pub mod compliance;
pub mod error;
pub mod health;
pub mod suppliers;

use axum::{
    routing::{get, post},
    Router,
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::welcome))
        // Health check
        .route("/health", get(health::health_check))
        // Suppliers
        .route(
            "/suppliers",
            get(suppliers::list_suppliers).post(suppliers::create_supplier),
        )
        .route("/suppliers/:id", get(suppliers::get_supplier))
        // Compliance
        .route(
            "/suppliers/check-compliance",
            post(compliance::check_compliance),
        )
        .route("/suppliers/insights/:id", get(compliance::get_insights))
        .with_state(state)
}
