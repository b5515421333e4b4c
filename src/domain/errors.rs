//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Resource not found, with a message naming what was missing
    #[error("{0}")]
    NotFound(String),
    /// Database/persistence error
    #[error("Database error: {0}")]
    Database(String),
    /// Insight service failure
    #[error("Insight service error: {0}")]
    External(String),
    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn supplier_not_found() -> Self {
        DomainError::NotFound("Supplier not found".to_string())
    }
}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_bare_message() {
        assert_eq!(
            DomainError::supplier_not_found().to_string(),
            "Supplier not found"
        );
    }

    #[test]
    fn db_errors_become_database_variant() {
        let err: DomainError = sea_orm::DbErr::Custom("disk full".to_string()).into();
        assert!(matches!(err, DomainError::Database(_)));
        let message = err.to_string();
        assert!(message.starts_with("Database error: "));
        assert!(message.contains("disk full"));
    }
}
