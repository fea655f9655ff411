// src/lib.rs
//! Read-only file streams with typed accessors.
//!
//! The library surface is re-exported from the workspace crates; the
//! remaining modules back the `typed_read` binary.
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod engine;
pub mod error;
pub mod options;
pub mod parsers;
pub mod presentation;

pub use typed_read_domain::{ReaderConfig, ReaderConfigBuilder, ScanFormat, coerce};
pub use typed_read_infra::{FileRead, FileReader};
pub use typed_read_ports::{InStream, Lockable, Stream};
pub use typed_read_shared_kernel::{
    DomainError, ErrorContext, InfrastructureError, Length, LockOperation, OpenMode, Result,
    ScanRow, ScanValue, StreamName, TypedReadError,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
