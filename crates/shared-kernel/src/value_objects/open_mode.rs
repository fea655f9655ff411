// crates/shared-kernel/src/value_objects/open_mode.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Access intent requested when a stream is opened.
///
/// The string forms follow the usual `fopen` conventions. Both the binary
/// (`rb`) and the bare (`r`) spellings are accepted; [`fmt::Display`] always
/// yields the binary spelling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OpenMode {
    /// Open for reading only; place the pointer at the beginning.
    #[default]
    Read,
    /// Open for reading and writing; place the pointer at the beginning.
    ReadWrite,
    /// Open for writing only; truncate the file to zero length.
    TruncateWrite,
    /// Open for reading and writing; truncate the file to zero length.
    TruncateReadWrite,
    /// Open for writing only; place the pointer at the end.
    AppendWrite,
    /// Open for reading and writing; place the pointer at the end.
    AppendReadWrite,
    /// Create and open for writing only; fail if the file exists.
    CreateWrite,
    /// Create and open for reading and writing; fail if the file exists.
    CreateReadWrite,
    /// Open for writing only; create the file if it does not exist.
    CreateOrOpenWrite,
    /// Open for reading and writing; create the file if it does not exist.
    CreateOrOpenReadWrite,
}

impl OpenMode {
    pub const ALL: [Self; 10] = [
        Self::Read,
        Self::ReadWrite,
        Self::TruncateWrite,
        Self::TruncateReadWrite,
        Self::AppendWrite,
        Self::AppendReadWrite,
        Self::CreateWrite,
        Self::CreateReadWrite,
        Self::CreateOrOpenWrite,
        Self::CreateOrOpenReadWrite,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "rb",
            Self::ReadWrite => "r+b",
            Self::TruncateWrite => "wb",
            Self::TruncateReadWrite => "w+b",
            Self::AppendWrite => "ab",
            Self::AppendReadWrite => "a+b",
            Self::CreateWrite => "xb",
            Self::CreateReadWrite => "x+b",
            Self::CreateOrOpenWrite => "cb",
            Self::CreateOrOpenReadWrite => "c+b",
        }
    }

    pub const fn is_readable(self) -> bool {
        !matches!(
            self,
            Self::TruncateWrite | Self::AppendWrite | Self::CreateWrite | Self::CreateOrOpenWrite
        )
    }

    pub const fn is_writable(self) -> bool {
        !matches!(self, Self::Read)
    }

    /// Validate `self` against a whitelist of accepted modes.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnsupportedMode`] when `self` is not listed.
    pub fn ensure_one_of(self, accepted: &[Self]) -> Result<Self, DomainError> {
        if accepted.contains(&self) {
            return Ok(self);
        }
        Err(DomainError::UnsupportedMode {
            given: self.to_string(),
            supported: accepted
                .iter()
                .map(|m| m.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpenMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "rb" と "r" の両方を受け付ける ("t" 修飾子も無視する)
        let bare = s.trim().trim_end_matches(['b', 't']);
        let mode = match bare {
            "r" => Self::Read,
            "r+" => Self::ReadWrite,
            "w" => Self::TruncateWrite,
            "w+" => Self::TruncateReadWrite,
            "a" => Self::AppendWrite,
            "a+" => Self::AppendReadWrite,
            "x" => Self::CreateWrite,
            "x+" => Self::CreateReadWrite,
            "c" => Self::CreateOrOpenWrite,
            "c+" => Self::CreateOrOpenReadWrite,
            _ => {
                return Err(DomainError::UnsupportedMode {
                    given: s.to_string(),
                    supported: Self::ALL
                        .iter()
                        .map(|m| m.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                });
            }
        };
        Ok(mode)
    }
}

impl TryFrom<String> for OpenMode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OpenMode> for String {
    fn from(mode: OpenMode) -> Self {
        mode.as_str().to_string()
    }
}
