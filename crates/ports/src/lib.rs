//! # Ports
//!
//! Interface definitions for readable streams.
//!
//! - [`stream`]: naming and the open/closed lifecycle
//! - [`in_stream`]: typed reading on top of primitive reads
//! - [`lockable`]: advisory locking
//!
//! Adapters in the infra crate implement these against OS files.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod in_stream;
pub mod lockable;
pub mod stream;

pub use in_stream::InStream;
pub use lockable::Lockable;
pub use stream::Stream;
