use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoinError {
    #[error("Serialization failed: {0}")]
    Serialization(#[from] bincode::Error),
    #[error("Unexpected {extra} trailing bytes after value")]
    TrailingBytes { extra: usize },
}

pub type Result<T> = std::result::Result<T, CoinError>;
