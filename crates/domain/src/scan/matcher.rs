// crates/domain/src/scan/matcher.rs
use typed_read_shared_kernel::{ScanRow, ScanValue};

use super::format::{Conversion, ConversionKind, Directive, ScanFormat};
use crate::coerce::{number_len, parse_float, saturating_parse};

impl ScanFormat {
    /// Apply the format to `input`.
    ///
    /// The result holds one slot per non-suppressed conversion. Matching
    /// stops at the first directive that fails; that slot and every later
    /// one stay `None`.
    pub fn scan(&self, input: &str) -> ScanRow {
        let mut out = vec![None; self.assignment_count()];
        let mut cursor = Cursor { input, pos: 0 };
        let mut slot = 0;

        for directive in self.directives() {
            match directive {
                Directive::Whitespace => cursor.skip_whitespace(),
                Directive::Literal(expected) => {
                    if !cursor.eat(*expected) {
                        break;
                    }
                }
                Directive::Conversion(conversion) => {
                    let Some(value) = cursor.convert(conversion) else {
                        break;
                    };
                    if !conversion.suppress {
                        out[slot] = Some(value);
                        slot += 1;
                    }
                }
            }
        }

        out
    }
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.rest().starts_with(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Remaining input cut to at most `width` characters.
    fn window(&self, width: Option<usize>) -> &'a str {
        let rest = self.rest();
        match width {
            Some(w) => rest.char_indices().nth(w).map_or(rest, |(i, _)| &rest[..i]),
            None => rest,
        }
    }

    fn convert(&mut self, conversion: &Conversion) -> Option<ScanValue> {
        if conversion.kind.skips_whitespace() {
            self.skip_whitespace();
        }
        let window = self.window(conversion.width);

        let (len, value) = match &conversion.kind {
            ConversionKind::Decimal | ConversionKind::Unsigned => scan_radix(window, 10)?,
            ConversionKind::Integer => scan_integer(window)?,
            ConversionKind::Hex => scan_radix(window, 16)?,
            ConversionKind::Octal => scan_radix(window, 8)?,
            ConversionKind::Float => {
                let (len, _) = number_len(window.as_bytes())?;
                (len, ScanValue::Float(parse_float(&window[..len])))
            }
            ConversionKind::String => {
                let len = window
                    .char_indices()
                    .find(|(_, c)| c.is_whitespace())
                    .map_or(window.len(), |(i, _)| i);
                (len, ScanValue::Str(window[..len].to_string()))
            }
            ConversionKind::Chars => {
                let window = self.window(Some(conversion.width.unwrap_or(1)));
                (window.len(), ScanValue::Str(window.to_string()))
            }
            ConversionKind::Set(set) => {
                let len = window
                    .char_indices()
                    .find(|&(_, c)| !set.contains(c))
                    .map_or(window.len(), |(i, _)| i);
                (len, ScanValue::Str(window[..len].to_string()))
            }
            ConversionKind::Consumed => {
                let value = i64::try_from(self.pos).unwrap_or(i64::MAX);
                return Some(ScanValue::Int(value));
            }
        };

        if len == 0 {
            return None;
        }
        self.pos += len;
        Some(value)
    }
}

/// Signed integer in a fixed radix; hex accepts an optional `0x` prefix.
fn scan_radix(window: &str, radix: u32) -> Option<(usize, ScanValue)> {
    let bytes = window.as_bytes();
    let mut i = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let negative = bytes.first() == Some(&b'-');

    if radix == 16
        && matches!(bytes.get(i..i + 2), Some([b'0', b'x' | b'X']))
        && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit)
    {
        i += 2;
    }

    let digits = bytes[i..]
        .iter()
        .take_while(|b| char::from(**b).is_digit(radix))
        .count();
    if digits == 0 {
        return None;
    }
    let end = i + digits;
    let text = &window[i..end];

    let value = if radix == 10 {
        saturating_parse(&window[..end])
    } else {
        let magnitude = u64::from_str_radix(text, radix).unwrap_or(u64::MAX);
        if negative {
            0i64.checked_sub_unsigned(magnitude).unwrap_or(i64::MIN)
        } else {
            i64::try_from(magnitude).unwrap_or(i64::MAX)
        }
    };
    Some((end, ScanValue::Int(value)))
}

/// `%i`: base 16 after `0x`, base 8 after a leading `0`, else base 10.
fn scan_integer(window: &str) -> Option<(usize, ScanValue)> {
    let bytes = window.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    match bytes.get(sign..sign + 2) {
        Some([b'0', b'x' | b'X']) => scan_radix(window, 16),
        Some([b'0', _]) => scan_radix(window, 8),
        _ => scan_radix(window, 10),
    }
}
