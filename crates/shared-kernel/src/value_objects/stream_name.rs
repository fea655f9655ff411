// crates/shared-kernel/src/value_objects/stream_name.rs
use std::{
    fmt,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;
use serde::{Deserialize, Serialize};

static SCHEME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\w+)://").unwrap());

/// Name a stream is opened with: either a bare path or a `scheme://` URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StreamName(String);

impl StreamName {
    pub const FILE_SCHEME: &'static str = "file";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The leading `scheme://` prefix, if any.
    pub fn scheme(&self) -> Option<&str> {
        SCHEME
            .captures(&self.0)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }

    /// True for bare paths and `file://` URLs.
    pub fn is_local_file(&self) -> bool {
        self.scheme().is_none_or(|s| s == Self::FILE_SCHEME)
    }

    /// Filesystem path behind the name, with any `file://` prefix removed.
    pub fn path(&self) -> &Path {
        let raw = match self.scheme() {
            Some(Self::FILE_SCHEME) => &self.0[Self::FILE_SCHEME.len() + 3..],
            _ => self.0.as_str(),
        };
        Path::new(raw)
    }
}

impl fmt::Display for StreamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StreamName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for StreamName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&Path> for StreamName {
    fn from(path: &Path) -> Self {
        Self::new(path.to_string_lossy().into_owned())
    }
}

impl From<PathBuf> for StreamName {
    fn from(path: PathBuf) -> Self {
        Self::from(path.as_path())
    }
}

impl AsRef<str> for StreamName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
