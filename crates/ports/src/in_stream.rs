// crates/ports/src/in_stream.rs
use typed_read_domain::{ScanFormat, coerce};
use typed_read_shared_kernel::{InfrastructureError, Result, ScanRow};

use crate::stream::Stream;

/// Typed reading over a stream.
///
/// Implementors provide the primitive reads (`eof`, `read`, `read_character`,
/// `read_line`, `read_all`); the typed accessors are derived from them.
pub trait InStream: Stream {
    /// True when no further byte can be read.
    fn eof(&mut self) -> Result<bool>;

    /// Absolute byte offset of the next read.
    fn position(&mut self) -> Result<u64>;

    /// Read up to `length` bytes. Returns fewer only at end of stream.
    fn read(&mut self, length: usize) -> Result<Vec<u8>>;

    /// Read one UTF-8 encoded character. `None` at end of stream.
    fn read_character(&mut self) -> Result<Option<char>>;

    /// Read one line, trailing `\n` included. `None` at end of stream.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Read from absolute byte `offset` to the end of the stream.
    fn read_all(&mut self, offset: u64) -> Result<Vec<u8>>;

    /// Same as [`InStream::read`], decoded as UTF-8.
    ///
    /// The offset in an [`InfrastructureError::InvalidUtf8`] is absolute,
    /// like the one [`InStream::read_line`] reports.
    fn read_string(&mut self, length: usize) -> Result<String> {
        let start = self.position()?;
        let bytes = self.read(length)?;
        String::from_utf8(bytes).map_err(|e| {
            InfrastructureError::InvalidUtf8 {
                name: self.name().to_string(),
                offset: start + e.utf8_error().valid_up_to() as u64,
            }
            .into()
        })
    }

    fn read_boolean(&mut self) -> Result<bool> {
        Ok(coerce::to_boolean(&self.read(1)?))
    }

    /// Read `length` bytes (1 is the customary width) as an integer.
    fn read_integer(&mut self, length: usize) -> Result<i64> {
        Ok(coerce::to_integer(&self.read(length)?))
    }

    /// Read `length` bytes (1 is the customary width) as a float.
    fn read_float(&mut self, length: usize) -> Result<f64> {
        Ok(coerce::to_float(&self.read(length)?))
    }

    fn read_array(&mut self, format: &str) -> Result<Option<ScanRow>> {
        self.scanf(format)
    }

    /// Read one line and extract values from it according to `format`.
    ///
    /// The format is compiled before anything is consumed, so an invalid
    /// format leaves the stream untouched. `None` at end of stream.
    fn scanf(&mut self, format: &str) -> Result<Option<ScanRow>> {
        let format = ScanFormat::parse(format)?;
        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        Ok(Some(format.scan(&line)))
    }
}
