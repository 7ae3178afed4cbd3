//! Data-transfer objects and their rule sets

pub mod salesperson;
pub mod supplier;

pub use salesperson::SalespersonDto;
pub use supplier::SupplierDto;
