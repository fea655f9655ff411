// crates/domain/src/config.rs
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use typed_read_shared_kernel::{LockOperation, OpenMode};

pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// How a reader opens and holds its stream.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
#[serde(default)]
pub struct ReaderConfig {
    /// Requested access mode; validated against the reader's whitelist.
    #[builder(default)]
    pub mode: OpenMode,
    /// Construct without opening; the caller opens explicitly later.
    #[builder(default)]
    pub defer_open: bool,
    /// Read buffer size in bytes. Must be at least 1.
    #[builder(default = "DEFAULT_BUFFER_CAPACITY")]
    pub buffer_capacity: usize,
    /// Lock taken right after the stream opens.
    #[builder(default, setter(strip_option))]
    pub lock: Option<LockOperation>,
    /// Wait for a contended lock instead of failing immediately.
    #[builder(default = "true")]
    pub blocking_lock: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            mode: OpenMode::default(),
            defer_open: false,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            lock: None,
            blocking_lock: true,
        }
    }
}

impl ReaderConfig {
    pub fn builder() -> ReaderConfigBuilder {
        ReaderConfigBuilder::default()
    }
}

impl ReaderConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        // 容量 0 の BufReader は常に空のバッファを返す
        if self.buffer_capacity == Some(0) {
            return Err("buffer_capacity must be at least 1".to_string());
        }
        Ok(())
    }
}
