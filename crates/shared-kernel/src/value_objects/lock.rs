// crates/shared-kernel/src/value_objects/lock.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Advisory lock operation on an open stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LockOperation {
    /// Reader lock; several holders may share it.
    Shared,
    /// Writer lock; a single holder.
    Exclusive,
    /// Release whatever lock is held.
    Unlock,
}

impl fmt::Display for LockOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Shared => "shared",
            Self::Exclusive => "exclusive",
            Self::Unlock => "unlock",
        })
    }
}
