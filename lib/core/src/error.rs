use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Model not trained: call train() first")]
    NotTrained,

    #[error("Not enough players to train on: got {actual}, need at least 2")]
    NotEnoughPlayers { actual: usize },

    #[error("Invalid feature dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("Non-finite feature value at row {row}, column {column}")]
    NonFinite { row: usize, column: usize },

    #[error("Player index {index} out of range: roster has {len} players")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Similar-player limit must be at least 1")]
    InvalidLimit,
}
