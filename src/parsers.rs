// src/parsers.rs
use std::str::FromStr;

/// Wrapper type to parse buffer sizes with optional suffixes (e.g. 64K, 1MiB).
#[derive(Debug, Clone, Copy)]
pub struct SizeArg(pub usize);

impl FromStr for SizeArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().replace('_', "");
        let lower = s.to_ascii_lowercase();
        let (num_str, multiplier) = parse_with_suffix(&lower);
        let num: usize = num_str
            .parse()
            .map_err(|_| format!("Invalid size number: {num_str}"))?;
        if num == 0 {
            return Err("size must be at least 1".to_string());
        }
        num.checked_mul(multiplier)
            .map(Self)
            .ok_or_else(|| format!("size is too large: {s}"))
    }
}

fn parse_with_suffix(s: &str) -> (&str, usize) {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const SUFFIXES: &[(&[&str], usize)] = &[(&["mib", "mb", "m"], MB), (&["kib", "kb", "k"], KB)];
    for (suffixes, multiplier) in SUFFIXES {
        for suffix in *suffixes {
            if let Some(stripped) = s.strip_suffix(suffix) {
                return (stripped.trim(), *multiplier);
            }
        }
    }
    (s, 1)
}

/// Parse a byte offset (>= 0) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid non-negative number.
pub fn parse_offset(s: &str) -> Result<u64, String> {
    s.parse::<u64>()
        .map_err(|err| format!("invalid number '{s}': {err}"))
}
