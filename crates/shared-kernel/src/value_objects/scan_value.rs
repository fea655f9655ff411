// crates/shared-kernel/src/value_objects/scan_value.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Result slots of one scan: `None` where a directive did not match.
pub type ScanRow = Vec<Option<ScanValue>>;

/// A single value extracted by a scan directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScanValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl ScanValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ScanValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ScanValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ScanValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for ScanValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for ScanValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}
