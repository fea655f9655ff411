// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read, Seek, SeekFrom},
};

use typed_read_domain::ReaderConfig;
use typed_read_ports::{InStream, Stream};
use typed_read_shared_kernel::{
    InfrastructureError, OpenMode, Result, StreamName, TypedReadError,
};

use super::opener;

/// Modes a read-only stream accepts.
pub const ACCEPTED_MODES: &[OpenMode] = &[OpenMode::Read];

/// Read-only file stream with typed accessors.
pub type FileReader = FileRead<BufReader<File>>;

type Opener<R> = fn(&StreamName, &ReaderConfig) -> Result<R>;

/// Read-only stream over a buffered, seekable source.
///
/// Usually built with [`FileRead::new`] or [`FileRead::with_config`], which
/// open an OS file. [`FileRead::from_reader`] wraps an in-memory source.
pub struct FileRead<R> {
    name: StreamName,
    config: ReaderConfig,
    handle: Option<R>,
    opener: Option<Opener<R>>,
}

impl FileReader {
    /// Open `name` for reading with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`FileRead::with_config`].
    pub fn new(name: impl Into<StreamName>) -> Result<Self> {
        Self::with_config(name, ReaderConfig::default())
    }

    /// Open `name` for reading.
    ///
    /// # Errors
    ///
    /// - [`DomainError::UnsupportedMode`] when `config.mode` is not `rb`
    /// - [`DomainError::UnsupportedScheme`] for non-`file://` URLs
    /// - [`InfrastructureError::FileDoesNotExist`] when the path is missing
    ///
    /// With `config.defer_open` only the mode is checked here; the other
    /// checks run on [`Stream::open`].
    ///
    /// [`DomainError::UnsupportedMode`]: typed_read_shared_kernel::DomainError::UnsupportedMode
    /// [`DomainError::UnsupportedScheme`]: typed_read_shared_kernel::DomainError::UnsupportedScheme
    pub fn with_config(name: impl Into<StreamName>, config: ReaderConfig) -> Result<Self> {
        let name = name.into();
        if let Err(e) = config.mode.ensure_one_of(ACCEPTED_MODES) {
            log::warn!("refusing to open {name}: {e}");
            return Err(e.into());
        }

        let mut stream = Self {
            name,
            config,
            handle: None,
            opener: Some(opener::open_file),
        };
        if !stream.config.defer_open {
            stream.open()?;
        }
        Ok(stream)
    }

    /// The underlying OS file, when open.
    pub fn file(&self) -> Option<&File> {
        self.handle.as_ref().map(BufReader::get_ref)
    }
}

impl<S: Read + Seek> FileRead<BufReader<S>> {
    /// Wrap an already open source. Such a stream cannot be reopened once
    /// closed.
    pub fn from_reader(name: impl Into<StreamName>, source: S) -> Self {
        let config = ReaderConfig::default();
        let handle = BufReader::with_capacity(config.buffer_capacity, source);
        Self {
            name: name.into(),
            config,
            handle: Some(handle),
            opener: None,
        }
    }
}

impl<R> FileRead<R> {
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    fn handle(&mut self) -> Result<&mut R> {
        let name = &self.name;
        self.handle.as_mut().ok_or_else(|| {
            InfrastructureError::NotOpen {
                name: name.to_string(),
            }
            .into()
        })
    }

    fn io_error(&self, source: io::Error) -> TypedReadError {
        InfrastructureError::FileRead {
            name: self.name.to_string(),
            source,
        }
        .into()
    }

    fn invalid_utf8(&self, offset: u64) -> TypedReadError {
        InfrastructureError::InvalidUtf8 {
            name: self.name.to_string(),
            offset,
        }
        .into()
    }
}

impl<R> Stream for FileRead<R> {
    fn name(&self) -> &StreamName {
        &self.name
    }

    fn mode(&self) -> OpenMode {
        self.config.mode
    }

    fn is_opened(&self) -> bool {
        self.handle.is_some()
    }

    fn open(&mut self) -> Result<()> {
        if self.handle.is_some() {
            return Ok(());
        }
        let Some(opener) = self.opener else {
            return Err(self.io_error(io::Error::new(
                io::ErrorKind::Unsupported,
                "stream was built from a reader and cannot be reopened",
            )));
        };
        self.handle = Some(opener(&self.name, &self.config)?);
        log::debug!("opened {} ({})", self.name, self.config.mode);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        // ハンドルを落とすとロックも解放される
        if self.handle.take().is_some() {
            log::debug!("closed {}", self.name);
        }
        Ok(())
    }
}

impl<R: BufRead + Seek> InStream for FileRead<R> {
    fn eof(&mut self) -> Result<bool> {
        let result = self.handle()?.fill_buf().map(<[u8]>::is_empty);
        result.map_err(|e| self.io_error(e))
    }

    fn position(&mut self) -> Result<u64> {
        let result = self.handle()?.stream_position();
        result.map_err(|e| self.io_error(e))
    }

    fn read(&mut self, length: usize) -> Result<Vec<u8>> {
        let handle = self.handle()?;
        let mut buf = Vec::with_capacity(length.min(DEFAULT_PREALLOC));
        let result = handle.take(length as u64).read_to_end(&mut buf);
        result.map_err(|e| self.io_error(e))?;
        Ok(buf)
    }

    /// Decode one character. An invalid sequence consumes only its lead
    /// byte, so the bytes after it can still be read.
    fn read_character(&mut self) -> Result<Option<char>> {
        let handle = self.handle()?;
        let start = handle.stream_position();
        let peeked = handle.fill_buf().map(peek_char);
        let (start, peeked) = match (start, peeked) {
            (Ok(start), Ok(peeked)) => (start, peeked),
            (Err(e), _) | (_, Err(e)) => return Err(self.io_error(e)),
        };

        match peeked {
            Peeked::End => Ok(None),
            Peeked::Char(c, width) => {
                self.handle()?.consume(width);
                Ok(Some(c))
            }
            Peeked::Invalid => {
                self.handle()?.consume(1);
                Err(self.invalid_utf8(start))
            }
            Peeked::Split(width) => self.read_split_character(start, width),
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let handle = self.handle()?;
        let start = handle.stream_position();
        let mut buf = Vec::new();
        let read = handle.read_until(b'\n', &mut buf);
        let (start, read) = match (start, read) {
            (Ok(start), Ok(read)) => (start, read),
            (Err(e), _) | (_, Err(e)) => return Err(self.io_error(e)),
        };
        if read == 0 {
            return Ok(None);
        }
        String::from_utf8(buf)
            .map(Some)
            .map_err(|e| self.invalid_utf8(start + e.utf8_error().valid_up_to() as u64))
    }

    fn read_all(&mut self, offset: u64) -> Result<Vec<u8>> {
        let handle = self.handle()?;
        let mut buf = Vec::new();
        let result = handle
            .seek(SeekFrom::Start(offset))
            .and_then(|_| handle.read_to_end(&mut buf));
        result.map_err(|e| self.io_error(e))?;
        Ok(buf)
    }
}

impl<R: BufRead + Seek> FileRead<R> {
    /// Slow path for a character that straddles the buffer boundary.
    fn read_split_character(&mut self, start: u64, width: usize) -> Result<Option<char>> {
        let mut bytes = Vec::with_capacity(width);
        let read = self
            .handle()?
            .by_ref()
            .take(width as u64)
            .read_to_end(&mut bytes);
        read.map_err(|e| self.io_error(e))?;

        if let Some(c) = std::str::from_utf8(&bytes).ok().and_then(|s| s.chars().next()) {
            return Ok(Some(c));
        }
        // 先頭バイトの直後に戻す
        let rewind = self.handle()?.seek(SeekFrom::Start(start + 1));
        rewind.map_err(|e| self.io_error(e))?;
        Err(self.invalid_utf8(start))
    }
}

/// What the buffered bytes say about the next character.
enum Peeked {
    End,
    Char(char, usize),
    Invalid,
    /// The buffer ends inside a sequence of this width.
    Split(usize),
}

fn peek_char(buf: &[u8]) -> Peeked {
    let Some(&first) = buf.first() else {
        return Peeked::End;
    };
    let width = utf8_width(first);
    if width == 0 {
        return Peeked::Invalid;
    }
    match buf.get(..width) {
        None => Peeked::Split(width),
        Some(bytes) => std::str::from_utf8(bytes)
            .ok()
            .and_then(|s| s.chars().next())
            .map_or(Peeked::Invalid, |c| Peeked::Char(c, width)),
    }
}

/// Upper bound on the up-front allocation for a single `read`.
const DEFAULT_PREALLOC: usize = 64 * 1024;

/// Encoded width announced by a UTF-8 leading byte; 0 if it cannot lead.
const fn utf8_width(first: u8) -> usize {
    match first {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}
