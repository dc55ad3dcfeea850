use thiserror::Error;
use crate::database::errors::DatabaseError;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Game not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] DatabaseError),

    #[error("Mirror error: {0}")]
    Mirror(String),
}
