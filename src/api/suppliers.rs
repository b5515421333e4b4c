//! Supplier API handlers using repository pattern

use axum::{
    extract::{Path, State},
    Json,
};

use super::error::ApiError;
use crate::domain::{DomainError, NewSupplier, Supplier};
use crate::infrastructure::AppState;

#[utoipa::path(
    post,
    path = "/suppliers",
    request_body = NewSupplier,
    responses(
        (status = 200, description = "Supplier created", body = Supplier),
        (status = 422, description = "Malformed supplier payload")
    )
)]
pub async fn create_supplier(
    State(state): State<AppState>,
    Json(payload): Json<NewSupplier>,
) -> Result<Json<Supplier>, ApiError> {
    let supplier = state.supplier_repo.create(payload).await?;
    tracing::info!(supplier_id = supplier.id, name = %supplier.name, "Supplier created");
    Ok(Json(supplier))
}

#[utoipa::path(
    get,
    path = "/suppliers",
    responses(
        (status = 200, description = "All suppliers", body = [Supplier])
    )
)]
pub async fn list_suppliers(State(state): State<AppState>) -> Result<Json<Vec<Supplier>>, ApiError> {
    Ok(Json(state.supplier_repo.find_all().await?))
}

#[utoipa::path(
    get,
    path = "/suppliers/{id}",
    params(("id" = i32, Path, description = "Supplier id")),
    responses(
        (status = 200, description = "Supplier found", body = Supplier),
        (status = 404, description = "Supplier not found")
    )
)]
pub async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Supplier>, ApiError> {
    state
        .supplier_repo
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| DomainError::supplier_not_found().into())
}
