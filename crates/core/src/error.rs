use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Component '{component}' failed to render: {message}")]
    Render { component: String, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}
