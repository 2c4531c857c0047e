//! Character sources over strings and byte streams.

use std::io::{self, Read};
use std::ops::Range;
use std::str::Chars;

use crate::error::SourceError;
use crate::traits::CharSource;

/// An in-memory source over a string slice.
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    chars: Chars<'a>,
}

impl<'a> StrSource<'a> {
    /// Creates a source over all of `input`.
    ///
    /// Returns [`SourceError::Empty`] for empty input.
    pub fn new(input: &'a str) -> Result<Self, SourceError> {
        if input.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(Self { chars: input.chars() })
    }

    /// Creates a source over the byte `range` of `input`.
    ///
    /// The range must lie inside `input`, start and end on character
    /// boundaries and be non-empty.
    pub fn slice(input: &'a str, range: Range<usize>) -> Result<Self, SourceError> {
        let Some(slice) = input.get(range.clone()) else {
            return Err(SourceError::InvalidRange {
                start: range.start,
                end: range.end,
                len: input.len(),
            });
        };
        Self::new(slice)
    }

    /// The part of the input not read yet.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        self.chars.as_str()
    }
}

impl CharSource for StrSource<'_> {
    #[inline]
    fn has_next(&mut self) -> bool {
        !self.chars.as_str().is_empty()
    }

    #[inline]
    fn next(&mut self) -> Result<char, SourceError> {
        self.chars.next().ok_or(SourceError::Exhausted)
    }
}

/// A streaming source decoding UTF-8 from any [`Read`].
///
/// Keeps exactly one decoded character buffered so `has_next()` can answer
/// without consuming. The reader is read one byte at a time; wrap files and
/// sockets in a [`BufReader`](std::io::BufReader).
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    buffered: Option<Result<char, SourceError>>,
    pending: Option<u8>,
    eof: bool,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffered: None,
            pending: None,
            eof: false,
        }
    }

    /// Returns the wrapped reader. Buffered input is lost.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pending.take() {
            return Ok(Some(byte));
        }
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn read_char(&mut self) -> Option<Result<char, SourceError>> {
        let first = match self.read_byte() {
            Ok(Some(byte)) => byte,
            Ok(None) => return None,
            Err(e) => return Some(Err(e.into())),
        };
        let width = match first {
            0x00..=0x7f => return Some(Ok(char::from(first))),
            0xc2..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf4 => 4,
            _ => return Some(Err(SourceError::InvalidUtf8 { bytes: vec![first] })),
        };

        let mut bytes = [first, 0, 0, 0];
        for filled in 1..width {
            match self.read_byte() {
                Ok(Some(byte)) if byte & 0xc0 == 0x80 => bytes[filled] = byte,
                // Not a continuation byte: it starts the next character.
                Ok(Some(byte)) => {
                    self.pending = Some(byte);
                    return Some(Err(SourceError::InvalidUtf8 {
                        bytes: bytes[..filled].to_vec(),
                    }));
                }
                Ok(None) => {
                    return Some(Err(SourceError::InvalidUtf8 {
                        bytes: bytes[..filled].to_vec(),
                    }));
                }
                Err(e) => return Some(Err(e.into())),
            }
        }

        let decoded = std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next());
        Some(decoded.ok_or_else(|| SourceError::InvalidUtf8 {
            bytes: bytes[..width].to_vec(),
        }))
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn has_next(&mut self) -> bool {
        if self.buffered.is_none() && !self.eof {
            self.buffered = self.read_char();
            self.eof = self.buffered.is_none();
        }
        self.buffered.is_some()
    }

    fn next(&mut self) -> Result<char, SourceError> {
        if !self.has_next() {
            return Err(SourceError::Exhausted);
        }
        self.buffered.take().unwrap_or(Err(SourceError::Exhausted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(source: &mut impl CharSource) -> Result<String, SourceError> {
        let mut out = String::new();
        while source.has_next() {
            out.push(source.next()?);
        }
        Ok(out)
    }

    #[test]
    fn test_str_source_reads_all() {
        let mut source = StrSource::new("añ€").unwrap();
        assert_eq!(drain(&mut source).unwrap(), "añ€");
        assert!(!source.has_next());
        assert!(matches!(source.next(), Err(SourceError::Exhausted)));
    }

    #[test]
    fn test_str_source_rejects_empty() {
        assert!(matches!(StrSource::new(""), Err(SourceError::Empty)));
    }

    #[test]
    fn test_str_source_slice() {
        let mut source = StrSource::slice("[true]", 1..5).unwrap();
        assert_eq!(drain(&mut source).unwrap(), "true");
    }

    #[test]
    fn test_str_source_slice_out_of_bounds() {
        let result = StrSource::slice("abc", 1..9);
        assert!(matches!(
            result,
            Err(SourceError::InvalidRange { start: 1, end: 9, len: 3 })
        ));
    }

    #[test]
    fn test_str_source_slice_splits_char() {
        assert!(StrSource::slice("€x", 1..4).is_err());
    }

    #[test]
    fn test_str_source_slice_empty_range() {
        assert!(matches!(StrSource::slice("abc", 1..1), Err(SourceError::Empty)));
    }

    #[test]
    fn test_reader_source_decodes_utf8() {
        let mut source = ReaderSource::new("{\"ü\": \"𝄞\"}".as_bytes());
        assert_eq!(drain(&mut source).unwrap(), "{\"ü\": \"𝄞\"}");
        assert!(!source.has_next());
    }

    #[test]
    fn test_reader_source_has_next_does_not_consume() {
        let mut source = ReaderSource::new(&b"ab"[..]);
        assert!(source.has_next());
        assert!(source.has_next());
        assert_eq!(source.next().unwrap(), 'a');
        assert_eq!(source.next().unwrap(), 'b');
        assert!(matches!(source.next(), Err(SourceError::Exhausted)));
    }

    #[test]
    fn test_reader_source_invalid_utf8() {
        let mut source = ReaderSource::new(&[b'a', 0xff, b'b'][..]);
        assert_eq!(source.next().unwrap(), 'a');
        assert!(source.has_next());
        assert!(matches!(
            source.next(),
            Err(SourceError::InvalidUtf8 { ref bytes }) if bytes == &[0xff]
        ));
        assert_eq!(source.next().unwrap(), 'b');
    }

    #[test]
    fn test_reader_source_truncated_sequence() {
        let mut source = ReaderSource::new(&[0xe2, 0x82][..]);
        assert!(matches!(
            source.next(),
            Err(SourceError::InvalidUtf8 { ref bytes }) if bytes == &[0xe2, 0x82]
        ));
        assert!(!source.has_next());
    }

    #[test]
    fn test_reader_source_keeps_byte_after_truncated_sequence() {
        let mut source = ReaderSource::new(&[0xe2, b'"', 0xf0, 0x9d, b'a'][..]);
        assert!(matches!(
            source.next(),
            Err(SourceError::InvalidUtf8 { ref bytes }) if bytes == &[0xe2]
        ));
        assert_eq!(source.next().unwrap(), '"');
        assert!(matches!(
            source.next(),
            Err(SourceError::InvalidUtf8 { ref bytes }) if bytes == &[0xf0, 0x9d]
        ));
        assert_eq!(source.next().unwrap(), 'a');
        assert!(!source.has_next());
    }

    #[test]
    fn test_peekable_is_a_source() {
        let mut source = "xy".chars().peekable();
        assert_eq!(drain(&mut source).unwrap(), "xy");
    }
}
