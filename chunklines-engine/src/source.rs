//! Input collaborators
//!
//! An [`Input`] names where text comes from. It can be turned into a
//! [`ChunkSource`] that yields decoded text chunks in order (streaming), or
//! read completely into one string (whole-file).

use crate::config::MAX_CHUNK_SIZE;
use crate::decoder::Utf8ChunkDecoder;
use crate::error::{EngineError, Result};
use std::fs::{self, File};
use std::io::{self, Cursor, Read};
use std::path::PathBuf;

/// A producer of ordered text chunks
///
/// `Ok(None)` signals end of input. Read and decoding failures are returned as
/// errors; chunks already produced stay valid.
pub trait ChunkSource {
    /// Produce the next chunk of text
    fn next_chunk(&mut self) -> Result<Option<String>>;

    /// Raw bytes consumed from the underlying source so far
    fn bytes_read(&self) -> u64;
}

/// Chunk source over any [`Read`] implementation
///
/// Each call reads at most `chunk_size` bytes. Multi-byte characters cut by a
/// read are completed on the next one.
pub struct ReaderChunks<R> {
    reader: R,
    buffer: Vec<u8>,
    decoder: Option<Utf8ChunkDecoder>,
    bytes_read: u64,
}

impl<R: Read> ReaderChunks<R> {
    /// Wrap `reader`, reading up to `chunk_size` bytes at a time
    ///
    /// `chunk_size` is clamped to `1..=MAX_CHUNK_SIZE`.
    pub fn new(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            buffer: vec![0u8; chunk_size.clamp(1, MAX_CHUNK_SIZE)],
            decoder: Some(Utf8ChunkDecoder::new()),
            bytes_read: 0,
        }
    }

    fn read_some(&mut self) -> Result<usize> {
        loop {
            match self.reader.read(&mut self.buffer) {
                Ok(n) => return Ok(n),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

impl<R: Read> ChunkSource for ReaderChunks<R> {
    fn next_chunk(&mut self) -> Result<Option<String>> {
        loop {
            if self.decoder.is_none() {
                return Ok(None);
            }

            let n = self.read_some()?;
            if n == 0 {
                if let Some(decoder) = self.decoder.take() {
                    decoder.finish()?;
                }
                return Ok(None);
            }
            self.bytes_read += n as u64;

            let Some(decoder) = self.decoder.as_mut() else {
                return Ok(None);
            };
            let text = decoder.decode(&self.buffer[..n])?;
            // A read holding only part of a character decodes to nothing yet
            if !text.is_empty() {
                return Ok(Some(text));
            }
        }
    }

    fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}

impl<R> std::fmt::Debug for ReaderChunks<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReaderChunks")
            .field("chunk_size", &self.buffer.len())
            .field("bytes_read", &self.bytes_read)
            .field("finished", &self.decoder.is_none())
            .finish()
    }
}

/// Unified input abstraction
pub enum Input {
    /// Text already in memory
    Text(String),
    /// Bytes to decode as UTF-8
    Bytes(Vec<u8>),
    /// File path to read from
    File(PathBuf),
    /// Reader stream (stdin, pipes, ...)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_tuple("Text")
                .field(&format!("<{} bytes>", text.len()))
                .finish(),
            Input::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from a text string
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Open the input as a chunk source reading `chunk_size` bytes at a time
    pub fn into_chunks(self, chunk_size: usize) -> Result<ReaderChunks<Box<dyn Read + Send>>> {
        let reader: Box<dyn Read + Send> = match self {
            Input::Text(text) => Box::new(Cursor::new(text.into_bytes())),
            Input::Bytes(bytes) => Box::new(Cursor::new(bytes)),
            Input::File(path) => {
                let file = File::open(&path).map_err(|e| EngineError::SourceUnreadable {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;
                log::debug!("opened {} for streaming", path.display());
                Box::new(file)
            }
            Input::Reader(reader) => reader,
        };
        Ok(ReaderChunks::new(reader, chunk_size))
    }

    /// Read the whole input into one string
    pub fn to_text(self) -> Result<String> {
        let bytes = match self {
            Input::Text(text) => return Ok(text),
            Input::Bytes(bytes) => bytes,
            Input::File(path) => fs::read(&path).map_err(|e| EngineError::SourceUnreadable {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?,
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer)?;
                buffer
            }
        };
        String::from_utf8(bytes).map_err(|e| EngineError::InvalidUtf8 {
            offset: e.utf8_error().valid_up_to() as u64,
        })
    }

    /// Size of the input in bytes, when known without reading it
    pub fn estimated_size(&self) -> Option<u64> {
        match self {
            Input::Text(text) => Some(text.len() as u64),
            Input::Bytes(bytes) => Some(bytes.len() as u64),
            Input::File(path) => fs::metadata(path).ok().map(|m| m.len()),
            Input::Reader(_) => None,
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}
