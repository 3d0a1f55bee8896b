use thiserror::Error;

/// Define a convenient Result type
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("-{0} flag has to be specified")]
    MissingFlag(&'static str),

    #[error("Operation {0} not allowed!")]
    InvalidOperation(String),

    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
