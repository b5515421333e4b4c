//! Services Layer
//!
//! This module contains pure business logic extracted from HTTP handlers.

pub mod compliance_service;

// Re-export for convenience
pub use compliance_service::*;
