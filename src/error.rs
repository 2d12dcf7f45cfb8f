use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors raised at the parsing and configuration boundary.
///
/// Board mutations never produce these; they degrade to an
/// [`Outcome::NoOp`](crate::domain::board::Outcome) instead.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Invalid column id: {0}")]
    InvalidColumnId(String),

    #[error("Invalid move direction: {0}")]
    InvalidDirection(String),

    #[error("Invalid task id: {0:?}")]
    InvalidTaskId(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
