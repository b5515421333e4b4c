pub mod compliance_record;
pub mod supplier;
