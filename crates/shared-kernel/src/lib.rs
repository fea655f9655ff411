// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DomainError, DomainResult, ErrorContext, InfrastructureError, PresentationError, Result,
    TypedReadError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{Length, LockOperation, OpenMode, ScanRow, ScanValue, StreamName};
