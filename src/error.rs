use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("negative value {value} at index {index} cannot be digit shift sorted")]
    NegativeValue { index: usize, value: i128 },

    #[error("sorted output differs from the reference sort at index {index}: expected {expected}, found {actual}")]
    Mismatch {
        index: usize,
        expected: u128,
        actual: u128,
    },

    #[error("sorted output has {actual} values but the input had {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
