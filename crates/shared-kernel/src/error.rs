// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum TypedReadError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<TypedReadError>,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

impl TypedReadError {
    /// Stable numeric code of the innermost error.
    pub fn code(&self) -> u32 {
        match self {
            Self::Context { source, .. } => source.code(),
            Self::Domain(e) => e.code(),
            Self::Infrastructure(e) => e.code(),
            Self::Presentation(e) => e.code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TypedReadError>;

/// Errors raised while validating what the caller asked for.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Open mode are not supported; given {given}. Only {supported} are supported.")]
    UnsupportedMode { given: String, supported: String },

    #[error("Length must be greater than 0, given {given}.")]
    NegativeLength { given: i64 },

    #[error("Invalid scan format '{format}' at byte {position}: {details}")]
    InvalidScanFormat {
        format: String,
        position: usize,
        details: String,
    },

    #[error("Stream scheme '{scheme}' is not supported for {name}.")]
    UnsupportedScheme { scheme: String, name: String },
}

impl DomainError {
    pub const fn code(&self) -> u32 {
        match self {
            Self::UnsupportedMode { .. } => 0,
            Self::NegativeLength { .. } => 2,
            Self::InvalidScanFormat { .. } => 3,
            Self::UnsupportedScheme { .. } => 4,
        }
    }
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Errors raised by the OS-facing adapters.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("File {} does not exist.", path.display())]
    FileDoesNotExist { path: PathBuf },

    #[error("Stream {name} is not opened.")]
    NotOpen { name: String },

    #[error("Failed to read '{name}': {source}")]
    FileRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Stream {name} produced invalid UTF-8 at byte {offset}")]
    InvalidUtf8 { name: String, offset: u64 },

    #[error("Lock operation {operation} failed on '{name}': {source}")]
    Lock {
        operation: String,
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock operation {operation} is not allowed on read-only stream {name}.")]
    LockNotAllowed { operation: String, name: String },
}

impl InfrastructureError {
    pub const fn code(&self) -> u32 {
        match self {
            Self::FileDoesNotExist { .. } => 1,
            Self::NotOpen { .. } => 10,
            Self::FileRead { .. } => 11,
            Self::InvalidUtf8 { .. } => 12,
            Self::Lock { .. } => 13,
            Self::LockNotAllowed { .. } => 14,
        }
    }
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),
}

impl PresentationError {
    pub const fn code(&self) -> u32 {
        match self {
            Self::ConfigBuildFailed(_) => 21,
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<TypedReadError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| TypedReadError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| TypedReadError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
