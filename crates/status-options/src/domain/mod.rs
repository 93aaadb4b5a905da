//! Domain Layer - the option record and its pure transforms
//!
//! This layer contains:
//! - The wire schema (field ↔ key table)
//! - `StatusOptions`, the option record
//! - Default stripping and filling
//! - Record validation
//!
//! RULES:
//! - No I/O operations
//! - No shared mutable state
//! - Pure functions where possible

pub mod defaults;
pub mod options;
pub mod schema;
pub mod validation;

pub use defaults::DEFAULT_POW_REQUIREMENT;
pub use options::StatusOptions;
pub use schema::{FieldSpec, OptionField, FIELD_COUNT, SCHEMA};
pub use validation::MAX_TOPIC_INTEREST;
