// crates/domain/src/coerce.rs
//! Loose scalar conversions applied to raw bytes read from a stream.
//!
//! The numeric conversions look at the longest *leading numeric prefix* of
//! the input and ignore whatever follows it, so `b"42abc"` is `42` and
//! `b"abc"` is `0`. Leading ASCII whitespace is skipped.

/// `false` for an empty input or a single `"0"`, `true` otherwise.
pub fn to_boolean(bytes: &[u8]) -> bool {
    !matches!(bytes, [] | [b'0'])
}

/// Integer value of the leading numeric prefix of `bytes`.
///
/// Pure digit prefixes saturate at the `i64` bounds. Prefixes with a
/// fraction or an exponent go through [`to_float`] and are truncated.
pub fn to_integer(bytes: &[u8]) -> i64 {
    let Some(prefix) = numeric_prefix(bytes) else {
        return 0;
    };
    if prefix.is_integral {
        return saturating_parse(prefix.text);
    }
    // `as` saturates and maps NaN to 0
    parse_float(prefix.text) as i64
}

/// Floating point value of the leading numeric prefix of `bytes`.
pub fn to_float(bytes: &[u8]) -> f64 {
    numeric_prefix(bytes).map_or(0.0, |p| parse_float(p.text))
}

struct NumericPrefix<'a> {
    text: &'a str,
    is_integral: bool,
}

fn numeric_prefix(bytes: &[u8]) -> Option<NumericPrefix<'_>> {
    let start = bytes
        .iter()
        .position(|b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c))?;
    let s = &bytes[start..];
    let (len, is_integral) = number_len(s)?;
    // 先頭は ASCII のみなので UTF-8 として必ず有効
    let text = std::str::from_utf8(&s[..len]).ok()?;
    Some(NumericPrefix { text, is_integral })
}

/// Length of the decimal number starting at `s[0]`, and whether it is a
/// plain integer. `None` when no digits are present.
pub(crate) fn number_len(s: &[u8]) -> Option<(usize, bool)> {
    let mut i = 0;
    if matches!(s.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_digits = count_digits(&s[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    let mut is_integral = true;
    if s.get(i) == Some(&b'.') {
        frac_digits = count_digits(&s[i + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            i += 1 + frac_digits;
            is_integral = false;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(s.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(s.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&s[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
            is_integral = false;
        }
    }

    Some((i, is_integral))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

pub(crate) fn saturating_parse(text: &str) -> i64 {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let mut acc: i64 = 0;
    for d in digits.bytes() {
        let d = i64::from(d - b'0');
        let next = acc
            .checked_mul(10)
            .and_then(|v| if negative { v.checked_sub(d) } else { v.checked_add(d) });
        match next {
            Some(v) => acc = v,
            None => return if negative { i64::MIN } else { i64::MAX },
        }
    }
    acc
}

pub(crate) fn parse_float(text: &str) -> f64 {
    text.parse().unwrap_or(0.0)
}
