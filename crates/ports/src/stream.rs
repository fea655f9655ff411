// crates/ports/src/stream.rs
use typed_read_shared_kernel::{OpenMode, Result, StreamName};

/// A named resource with an open/closed lifecycle.
pub trait Stream {
    fn name(&self) -> &StreamName;

    fn mode(&self) -> OpenMode;

    fn is_opened(&self) -> bool;

    /// Open the underlying resource. Opening an already open stream is a no-op.
    fn open(&mut self) -> Result<()>;

    /// Release the underlying resource. Closing a closed stream is a no-op.
    fn close(&mut self) -> Result<()>;
}
