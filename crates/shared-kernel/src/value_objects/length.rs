// crates/shared-kernel/src/value_objects/length.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Number of bytes to read. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Length(usize);

impl Length {
    pub const ONE: Self = Self(1);

    /// Validate a signed byte count.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeLength`] for values below zero.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        usize::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::NegativeLength { given: value })
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<usize> for Length {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<Length> for usize {
    fn from(length: Length) -> Self {
        length.0
    }
}

impl TryFrom<i64> for Length {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Length> for i64 {
    fn from(length: Length) -> Self {
        i64::try_from(length.0).unwrap_or(i64::MAX)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
