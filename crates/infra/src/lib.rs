// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;

pub use persistence::{FileRead, FileReader};
