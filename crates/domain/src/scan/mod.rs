// crates/domain/src/scan/mod.rs
//! `scanf`-style extraction of typed values from a line of text.

pub mod format;
mod matcher;

pub use format::{CharSet, Conversion, ConversionKind, Directive, ScanFormat};
