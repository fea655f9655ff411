// crates/ports/src/lockable.rs
use typed_read_shared_kernel::{LockOperation, Result};

pub trait Lockable {
    /// Apply `operation`. With `blocking == false` a contended lock fails
    /// instead of waiting.
    fn lock(&mut self, operation: LockOperation, blocking: bool) -> Result<()>;
}
