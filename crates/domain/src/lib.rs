// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod coerce;
pub mod config;
pub mod scan;

pub use config::{ReaderConfig, ReaderConfigBuilder};
pub use scan::ScanFormat;
