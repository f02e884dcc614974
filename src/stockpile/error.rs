use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid quantity '{0}': expected a non-negative whole number")]
    InvalidQuantity(String),

    #[error("Invalid price '{0}': expected a non-negative number")]
    InvalidPrice(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, StockError>;
