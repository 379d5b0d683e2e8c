use deltalake::DeltaTableError;
use deltalake::arrow::error::ArrowError;
use thiserror::Error;

/// Errors emitted while generating or persisting tables.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{0}")]
    InvalidParams(#[from] salesgen_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("arrow error: {0}")]
    Arrow(#[from] ArrowError),
    #[error("delta error: {0}")]
    Delta(#[from] DeltaTableError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid table: {0}")]
    InvalidTable(String),
}
