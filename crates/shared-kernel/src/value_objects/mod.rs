// crates/shared-kernel/src/value_objects/mod.rs
pub mod length;
pub mod lock;
pub mod open_mode;
pub mod scan_value;
pub mod stream_name;

pub use length::Length;
pub use lock::LockOperation;
pub use open_mode::OpenMode;
pub use scan_value::{ScanRow, ScanValue};
pub use stream_name::StreamName;
