//! Compliance check and insight handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use super::error::ApiError;
use crate::domain::NewComplianceRecord;
use crate::infrastructure::AppState;
use crate::services::compliance_service::{self, ANALYZED_MESSAGE};

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckComplianceResponse {
    pub message: String,
    /// Raw text returned by the insight service
    pub insights: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SupplierInsightsResponse {
    pub supplier_id: i32,
    pub supplier_name: String,
    /// Raw text returned by the insight service, or a fixed notice when the
    /// supplier has no records
    pub insights: String,
}

#[utoipa::path(
    post,
    path = "/suppliers/check-compliance",
    request_body = NewComplianceRecord,
    responses(
        (status = 200, description = "Record stored and analyzed", body = CheckComplianceResponse),
        (status = 404, description = "Supplier not found"),
        (status = 500, description = "Insight service or database failure")
    )
)]
pub async fn check_compliance(
    State(state): State<AppState>,
    Json(payload): Json<NewComplianceRecord>,
) -> Result<Json<CheckComplianceResponse>, ApiError> {
    let outcome = compliance_service::check_compliance(
        state.supplier_repo.as_ref(),
        state.compliance_repo.as_ref(),
        state.insights.as_ref(),
        payload,
    )
    .await?;

    tracing::info!(record_id = outcome.record.id, "Compliance record analyzed");

    Ok(Json(CheckComplianceResponse {
        message: ANALYZED_MESSAGE.to_string(),
        insights: outcome.insights,
    }))
}

#[utoipa::path(
    get,
    path = "/suppliers/insights/{id}",
    params(("id" = i32, Path, description = "Supplier id")),
    responses(
        (status = 200, description = "Insights for the supplier's history", body = SupplierInsightsResponse),
        (status = 404, description = "Supplier not found"),
        (status = 500, description = "Insight service or database failure")
    )
)]
pub async fn get_insights(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SupplierInsightsResponse>, ApiError> {
    let result = compliance_service::supplier_insights(
        state.supplier_repo.as_ref(),
        state.compliance_repo.as_ref(),
        state.insights.as_ref(),
        id,
    )
    .await?;

    Ok(Json(SupplierInsightsResponse {
        supplier_id: result.supplier.id,
        supplier_name: result.supplier.name,
        insights: result.insights,
    }))
}
