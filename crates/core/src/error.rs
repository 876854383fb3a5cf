use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A `sex` or `size` string that maps to no known variant. `value` is the
    /// raw input as sent by the client.
    #[error("Invalid {field}: {value}")]
    InvalidEnumValue { field: &'static str, value: String },
}
