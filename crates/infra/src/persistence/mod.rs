// crates/infra/src/persistence/mod.rs
pub mod file_reader;
mod lock;
pub mod opener;

pub use file_reader::{ACCEPTED_MODES, FileRead, FileReader};
pub use opener::resolve;
