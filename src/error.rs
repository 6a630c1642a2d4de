//! Error types for fx-forwards

use thiserror::Error;

/// Main error type for fx-forwards
///
/// The computational core (aggregation and enrichment) never fails;
/// errors only arise at construction and I/O boundaries.
#[derive(Error, Debug)]
pub enum FxForwardsError {
    #[error("Invalid currency code: {0}")]
    InvalidCurrency(String),

    #[error("Invalid currency pair: {0}")]
    InvalidCurrencyPair(String),

    #[error("Invalid tenor: {0}")]
    InvalidTenor(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Result type alias for fx-forwards operations
pub type Result<T> = std::result::Result<T, FxForwardsError>;
