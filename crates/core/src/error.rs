use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("No {entity} found for ID:{id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("No {entity} available to pick from")]
    NothingToPick { entity: &'static str },

    #[error("{0}")]
    Validation(String),
}
