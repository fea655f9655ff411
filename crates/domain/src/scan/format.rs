// crates/domain/src/scan/format.rs
use std::str::FromStr;

use typed_read_shared_kernel::{DomainError, DomainResult};

/// What a `%` conversion extracts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionKind {
    /// `%d`: signed decimal.
    Decimal,
    /// `%i`: integer with base detected from a `0x`/`0` prefix.
    Integer,
    /// `%u`: unsigned decimal.
    Unsigned,
    /// `%x`, `%X`: hexadecimal.
    Hex,
    /// `%o`: octal.
    Octal,
    /// `%f`, `%e`, `%E`, `%g`, `%G`.
    Float,
    /// `%s`: a run of non-whitespace characters.
    String,
    /// `%c`: exactly `width` characters (default 1), whitespace included.
    Chars,
    /// `%[...]`: a run of characters in (or, negated, outside) a set.
    Set(CharSet),
    /// `%n`: number of characters consumed so far.
    Consumed,
}

impl ConversionKind {
    /// Conversions that skip leading whitespace in the input.
    pub const fn skips_whitespace(&self) -> bool {
        !matches!(self, Self::Chars | Self::Set(_) | Self::Consumed)
    }
}

/// Character class for `%[...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet {
    negated: bool,
    ranges: Vec<(char, char)>,
}

impl CharSet {
    pub fn contains(&self, c: char) -> bool {
        let listed = self.ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi);
        listed != self.negated
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub suppress: bool,
    pub width: Option<usize>,
    pub kind: ConversionKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Any run of format whitespace; matches zero or more input whitespace.
    Whitespace,
    Literal(char),
    Conversion(Conversion),
}

/// A compiled scan format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFormat {
    source: String,
    directives: Vec<Directive>,
}

impl ScanFormat {
    /// Compile `format`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidScanFormat`] for a dangling `%`, an
    /// unknown conversion, a zero width, or an unterminated `%[`.
    pub fn parse(format: &str) -> DomainResult<Self> {
        Parser::new(format).run()
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Number of result slots a scan produces.
    pub fn assignment_count(&self) -> usize {
        self.directives
            .iter()
            .filter(|d| matches!(d, Directive::Conversion(c) if !c.suppress))
            .count()
    }
}

impl FromStr for ScanFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

struct Parser<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
        }
    }

    fn error(&self, position: usize, details: impl Into<String>) -> DomainError {
        DomainError::InvalidScanFormat {
            format: self.source.to_string(),
            position,
            details: details.into(),
        }
    }

    fn run(mut self) -> DomainResult<ScanFormat> {
        let mut directives = Vec::new();
        while let Some((pos, c)) = self.chars.next() {
            if c.is_whitespace() {
                while self.chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {}
                directives.push(Directive::Whitespace);
            } else if c == '%' {
                directives.push(self.percent(pos)?);
            } else {
                directives.push(Directive::Literal(c));
            }
        }
        Ok(ScanFormat {
            source: self.source.to_string(),
            directives,
        })
    }

    fn percent(&mut self, start: usize) -> DomainResult<Directive> {
        if self.chars.next_if(|&(_, c)| c == '%').is_some() {
            return Ok(Directive::Literal('%'));
        }

        let suppress = self.chars.next_if(|&(_, c)| c == '*').is_some();

        let mut width: Option<usize> = None;
        while let Some((pos, c)) = self.chars.next_if(|&(_, c)| c.is_ascii_digit()) {
            let digit = c.to_digit(10).map_or(0, |d| d as usize);
            let next = width
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|w| w.checked_add(digit))
                .ok_or_else(|| self.error(pos, "width is too large"))?;
            width = Some(next);
        }
        if width == Some(0) {
            return Err(self.error(start, "width must be greater than zero"));
        }

        // 長さ修飾子は受理して無視する
        while self
            .chars
            .next_if(|&(_, c)| matches!(c, 'h' | 'l' | 'L' | 'q' | 'j' | 'z' | 't'))
            .is_some()
        {}

        let Some((pos, c)) = self.chars.next() else {
            return Err(self.error(start, "dangling '%'"));
        };
        let kind = match c {
            'd' => ConversionKind::Decimal,
            'i' => ConversionKind::Integer,
            'u' => ConversionKind::Unsigned,
            'x' | 'X' => ConversionKind::Hex,
            'o' => ConversionKind::Octal,
            'f' | 'F' | 'e' | 'E' | 'g' | 'G' => ConversionKind::Float,
            's' => ConversionKind::String,
            'c' => ConversionKind::Chars,
            'n' => ConversionKind::Consumed,
            '[' => ConversionKind::Set(self.set(pos)?),
            other => return Err(self.error(pos, format!("unknown conversion '%{other}'"))),
        };

        Ok(Directive::Conversion(Conversion {
            suppress,
            width,
            kind,
        }))
    }

    fn set(&mut self, open: usize) -> DomainResult<CharSet> {
        let negated = self.chars.next_if(|&(_, c)| c == '^').is_some();

        let mut members = Vec::new();
        // A leading ']' is a member, not the terminator.
        if let Some((_, c)) = self.chars.next_if(|&(_, c)| c == ']') {
            members.push(c);
        }
        loop {
            match self.chars.next() {
                Some((_, ']')) => break,
                Some((_, c)) => members.push(c),
                None => return Err(self.error(open, "unterminated '%['")),
            }
        }

        let mut ranges = Vec::with_capacity(members.len());
        let mut i = 0;
        while i < members.len() {
            let lo = members[i];
            if i + 2 < members.len() && members[i + 1] == '-' && members[i + 2] >= lo {
                ranges.push((lo, members[i + 2]));
                i += 3;
            } else {
                ranges.push((lo, lo));
                i += 1;
            }
        }

        Ok(CharSet { negated, ranges })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conv(d: &Directive) -> &Conversion {
        match d {
            Directive::Conversion(c) => c,
            other => panic!("expected conversion, got {other:?}"),
        }
    }

    #[test]
    fn parses_mixed_format() {
        let f = ScanFormat::parse("%d, %5s %*f%%").unwrap();
        let d = f.directives();
        assert_eq!(d.len(), 7);
        assert_eq!(conv(&d[0]).kind, ConversionKind::Decimal);
        assert_eq!(d[1], Directive::Literal(','));
        assert_eq!(d[2], Directive::Whitespace);
        assert_eq!(conv(&d[3]).width, Some(5));
        assert_eq!(d[4], Directive::Whitespace);
        assert!(conv(&d[5]).suppress);
        assert_eq!(d[6], Directive::Literal('%'));
        assert_eq!(f.assignment_count(), 2);
    }

    #[test]
    fn whitespace_runs_collapse() {
        let f = ScanFormat::parse("a \t\n b").unwrap();
        assert_eq!(f.directives().len(), 3);
    }

    #[test]
    fn length_modifiers_are_ignored() {
        let f = ScanFormat::parse("%ld %lf %hhx").unwrap();
        assert_eq!(f.assignment_count(), 3);
    }

    #[test]
    fn set_with_ranges_and_leading_bracket() {
        let f = ScanFormat::parse("%[]a-c-]").unwrap();
        let ConversionKind::Set(set) = &conv(&f.directives()[0]).kind else {
            panic!("expected set");
        };
        assert!(set.contains(']'));
        assert!(set.contains('b'));
        assert!(set.contains('-'));
        assert!(!set.contains('d'));
    }

    #[test]
    fn negated_set() {
        let f = ScanFormat::parse("%[^,]").unwrap();
        let ConversionKind::Set(set) = &conv(&f.directives()[0]).kind else {
            panic!("expected set");
        };
        assert!(set.contains('x'));
        assert!(!set.contains(','));
    }

    #[test]
    fn rejects_bad_formats() {
        for bad in ["%", "%q", "%0d", "%[abc", "abc %5"] {
            let err = ScanFormat::parse(bad).unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidScanFormat { .. }),
                "{bad}: {err}"
            );
        }
    }
}
