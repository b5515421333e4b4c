//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::DomainError;

/// Free-form contract terms. Keys are not validated; values may be any JSON.
pub type ContractTerms = serde_json::Map<String, serde_json::Value>;

/// Supplier data for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub country: String,
    #[schema(value_type = Option<Object>)]
    pub contract_terms: Option<ContractTerms>,
    pub compliance_score: Option<i32>,
    pub last_audit: Option<NaiveDate>,
}

/// Input for creating a supplier
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewSupplier {
    pub name: String,
    pub country: String,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub contract_terms: Option<ContractTerms>,
    #[serde(default)]
    pub compliance_score: Option<i32>,
    #[serde(default)]
    pub last_audit: Option<NaiveDate>,
}

/// Repository trait for Supplier entity
#[async_trait]
pub trait SupplierRepository: Send + Sync {
    /// Find all suppliers
    async fn find_all(&self) -> Result<Vec<Supplier>, DomainError>;

    /// Find a supplier by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Supplier>, DomainError>;

    /// Create a new supplier
    async fn create(&self, input: NewSupplier) -> Result<Supplier, DomainError>;
}

/// Analysis state of a compliance record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplianceStatus {
    #[serde(rename = "Pending Analysis")]
    PendingAnalysis,
    #[serde(rename = "Analyzed")]
    Analyzed,
}

impl ComplianceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceStatus::PendingAnalysis => "Pending Analysis",
            ComplianceStatus::Analyzed => "Analyzed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending Analysis" => Some(ComplianceStatus::PendingAnalysis),
            "Analyzed" => Some(ComplianceStatus::Analyzed),
            _ => None,
        }
    }
}

/// One measured compliance metric for a supplier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceRecord {
    pub id: i32,
    pub supplier_id: i32,
    pub metric: String,
    pub result: f64,
    pub date_recorded: NaiveDate,
    pub status: ComplianceStatus,
    pub insights: Option<String>,
}

/// Input for recording a compliance measurement
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewComplianceRecord {
    pub supplier_id: i32,
    pub metric: String,
    pub result: f64,
    pub date_recorded: NaiveDate,
}

/// Repository trait for ComplianceRecord entity
#[async_trait]
pub trait ComplianceRepository: Send + Sync {
    /// Insert a record in the "Pending Analysis" state
    async fn create_pending(
        &self,
        input: NewComplianceRecord,
    ) -> Result<ComplianceRecord, DomainError>;

    /// Move a record to "Analyzed" and attach the generated insights
    async fn mark_analyzed(
        &self,
        id: i32,
        insights: String,
    ) -> Result<ComplianceRecord, DomainError>;

    /// All records for a supplier, oldest first
    async fn find_by_supplier(
        &self,
        supplier_id: i32,
    ) -> Result<Vec<ComplianceRecord>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_strings_round_trip_through_parse() {
        for status in [ComplianceStatus::PendingAnalysis, ComplianceStatus::Analyzed] {
            assert_eq!(ComplianceStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ComplianceStatus::parse("analyzed"), None);
    }

    #[test]
    fn new_supplier_optional_fields_default_to_none() {
        let input: NewSupplier =
            serde_json::from_str(r#"{"name":"Acme","country":"US"}"#).unwrap();
        assert_eq!(input.name, "Acme");
        assert!(input.contract_terms.is_none());
        assert!(input.compliance_score.is_none());
        assert!(input.last_audit.is_none());
    }

    #[test]
    fn status_serializes_with_spaces() {
        let json = serde_json::to_string(&ComplianceStatus::PendingAnalysis).unwrap();
        assert_eq!(json, "\"Pending Analysis\"");
    }
}
