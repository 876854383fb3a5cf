pub mod animal;
pub mod error;
pub mod field;
pub mod types;
