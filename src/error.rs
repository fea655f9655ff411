// src/error.rs
use thiserror::Error;
use typed_read_shared_kernel::TypedReadError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Read(#[from] TypedReadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Numeric code reported alongside the message.
    pub fn code(&self) -> u32 {
        match self {
            Self::Read(e) => e.code(),
            Self::Io(_) => 30,
            Self::Json(_) => 31,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
