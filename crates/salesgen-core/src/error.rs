use thiserror::Error;

/// Core error type shared across salesgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// Generation parameters are internally inconsistent.
    #[error("invalid params: {0}")]
    InvalidParams(String),
}

/// Convenience alias for results returned by salesgen crates.
pub type Result<T> = std::result::Result<T, Error>;
