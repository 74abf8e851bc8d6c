use crate::day::ParseDayError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("streak name must not be empty")]
    EmptyName,

    #[error("emoji must be a single character, got {0:?}")]
    InvalidEmoji(String),

    #[error("no free streak id left")]
    IdsExhausted,

    #[error("no streak with id {0}")]
    NotFound(i64),

    #[error("invalid date: {0}")]
    InvalidDay(#[from] ParseDayError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
