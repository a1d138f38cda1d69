use crate::model::RecordId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Record not found: {0}")]
    NotFound(RecordId),

    #[error("Duplicate record id: {0}")]
    DuplicateId(RecordId),

    #[error("Record ids exhausted")]
    IdsExhausted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl RosterError {
    /// Store-level rejections that leave the store untouched and can be
    /// surfaced to the user as a message.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RosterError::InvalidInput(_) | RosterError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
