//! Service layer for `DataProcessor` records.
//! - Separates business rules from data access.
//! - Persistence goes through the `DataProcessorRepository` trait; the
//!   SeaORM implementation reuses the entity in the `models` crate.

pub mod errors;
pub mod data_processor;
