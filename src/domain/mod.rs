//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no SeaORM, no Axum).
//! Only trait definitions, data shapes and domain error types.

pub mod errors;
pub mod insights;
pub mod repositories;

pub use errors::DomainError;
pub use insights::InsightGenerator;
pub use repositories::*;
