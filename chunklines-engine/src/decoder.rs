//! Incremental UTF-8 decoding of byte chunks
//!
//! Reads of a fixed byte size cut multi-byte characters in half. The decoder
//! keeps the incomplete tail (never more than three bytes) and prepends it to
//! the next read, so every text chunk handed to the splitter is valid UTF-8.

use crate::error::{EngineError, Result};

/// Longest incomplete UTF-8 sequence that can be carried between reads
const MAX_CARRY: usize = 3;

/// Stateful UTF-8 decoder for a byte stream delivered in pieces
#[derive(Debug, Default)]
pub struct Utf8ChunkDecoder {
    carry: Vec<u8>,
    consumed: u64,
}

impl Utf8ChunkDecoder {
    /// Create a decoder at stream offset zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the next piece of the stream
    ///
    /// Returns all complete characters available so far. A trailing partial
    /// character is held back for the next call.
    pub fn decode(&mut self, bytes: &[u8]) -> Result<String> {
        let mut buf = std::mem::take(&mut self.carry);
        buf.extend_from_slice(bytes);

        let valid = match std::str::from_utf8(&buf) {
            Ok(_) => buf.len(),
            Err(err) => {
                if let Some(bad_len) = err.error_len() {
                    log::debug!("invalid UTF-8 sequence of {bad_len} byte(s)");
                    return Err(EngineError::InvalidUtf8 {
                        offset: self.consumed + err.valid_up_to() as u64,
                    });
                }
                // Incomplete sequence at the end: keep it for the next read
                err.valid_up_to()
            }
        };

        self.carry = buf.split_off(valid);
        debug_assert!(self.carry.len() <= MAX_CARRY);

        let offset = self.consumed;
        self.consumed += valid as u64;
        String::from_utf8(buf).map_err(|e| EngineError::InvalidUtf8 {
            offset: offset + e.utf8_error().valid_up_to() as u64,
        })
    }

    /// Signal end of stream
    ///
    /// Fails if a partial character is still pending.
    pub fn finish(self) -> Result<()> {
        if self.carry.is_empty() {
            Ok(())
        } else {
            Err(EngineError::InvalidUtf8 {
                offset: self.consumed,
            })
        }
    }

    /// Bytes held back waiting for the rest of a character
    pub fn pending_bytes(&self) -> usize {
        self.carry.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passes_through() {
        let mut decoder = Utf8ChunkDecoder::new();
        assert_eq!(decoder.decode(b"hello\n").unwrap(), "hello\n");
        assert_eq!(decoder.pending_bytes(), 0);
        assert!(decoder.finish().is_ok());
    }

    #[test]
    fn test_character_split_across_reads() {
        let bytes = "日本".as_bytes();
        let mut decoder = Utf8ChunkDecoder::new();

        assert_eq!(decoder.decode(&bytes[..1]).unwrap(), "");
        assert_eq!(decoder.pending_bytes(), 1);
        assert_eq!(decoder.decode(&bytes[1..4]).unwrap(), "日");
        assert_eq!(decoder.pending_bytes(), 1);
        assert_eq!(decoder.decode(&bytes[4..]).unwrap(), "本");
        assert!(decoder.finish().is_ok());
    }

    #[test]
    fn test_four_byte_character_one_byte_at_a_time() {
        let bytes = "🌍".as_bytes();
        let mut decoder = Utf8ChunkDecoder::new();
        let mut out = String::new();
        for b in bytes {
            out.push_str(&decoder.decode(std::slice::from_ref(b)).unwrap());
        }
        assert_eq!(out, "🌍");
    }

    #[test]
    fn test_invalid_byte_reports_absolute_offset() {
        let mut decoder = Utf8ChunkDecoder::new();
        decoder.decode(b"abc").unwrap();
        let err = decoder.decode(b"d\xffe").unwrap_err();
        assert!(matches!(err, EngineError::InvalidUtf8 { offset: 4 }));
    }

    #[test]
    fn test_truncated_character_at_end_fails() {
        let mut decoder = Utf8ChunkDecoder::new();
        let bytes = "é".as_bytes();
        assert_eq!(decoder.decode(&bytes[..1]).unwrap(), "");
        let err = decoder.finish().unwrap_err();
        assert!(matches!(err, EngineError::InvalidUtf8 { offset: 0 }));
    }
}
