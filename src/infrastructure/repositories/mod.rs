//! Repository implementations using SeaORM

pub mod compliance_repository;
pub mod supplier_repository;

pub use compliance_repository::SeaOrmComplianceRepository;
pub use supplier_repository::SeaOrmSupplierRepository;
