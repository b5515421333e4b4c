//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{ComplianceRepository, InsightGenerator, SupplierRepository};
use crate::infrastructure::{SeaOrmComplianceRepository, SeaOrmSupplierRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Pooled database connection, exposed to handlers through `FromRef`
    db: DatabaseConnection,
    /// Supplier repository
    pub supplier_repo: Arc<dyn SupplierRepository>,
    /// Compliance record repository
    pub compliance_repo: Arc<dyn ComplianceRepository>,
    /// Text-generation backend used for compliance insights
    pub insights: Arc<dyn InsightGenerator>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection, insights: Arc<dyn InsightGenerator>) -> Self {
        let supplier_repo = Arc::new(SeaOrmSupplierRepository::new(db.clone()));
        let compliance_repo = Arc::new(SeaOrmComplianceRepository::new(db.clone()));

        Self {
            db,
            supplier_repo,
            compliance_repo,
            insights,
        }
    }
}

// Implement FromRef to allow extracting DatabaseConnection from AppState
impl axum::extract::FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
