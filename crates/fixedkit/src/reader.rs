//! Read cursor over a fixed, caller-owned byte span.
//!
//! Two outcomes look alike but are kept apart on purpose:
//! - A seek outside `[0, len]` is *rejected*: it returns [`SeekError`] and the
//!   cursor does not move.
//! - A read at the end of the span is *not* a failure: it returns an empty
//!   slice.
//!
//! Callers that treat an empty read as an error, or that ignore a rejected
//! seek, will misbehave.

use crate::error::SeekError;

/// Base point for [`FixedSpanReader::seek_relative`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeekAnchor {
    /// Offset is measured from the start of the span.
    Start,
    /// Offset is measured from the current cursor.
    Current,
    /// Offset is measured from the end of the span.
    End,
}

/// A seekable source of bytes.
///
/// This is the capability generic stream consumers rely on. Positions are
/// absolute byte offsets from the start of the source.
pub trait ByteSource {
    /// Current read position.
    fn position(&self) -> usize;

    /// Total number of bytes in the source.
    fn len(&self) -> usize;

    /// Whether the source holds no bytes at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move the read position to `position`.
    ///
    /// # Errors
    ///
    /// Returns [`SeekError::OutOfRange`] when `position` is negative or past
    /// [`len`](Self::len). The read position is unchanged in that case.
    fn seek_absolute(&mut self, position: i64) -> Result<usize, SeekError>;

    /// Move the read position to `anchor + offset`.
    ///
    /// # Errors
    ///
    /// Same contract as [`seek_absolute`](Self::seek_absolute).
    fn seek_relative(&mut self, offset: i64, anchor: SeekAnchor) -> Result<usize, SeekError>;

    /// Consume up to `n` bytes. An empty result means end of data.
    fn read(&mut self, n: usize) -> &[u8];

    /// The next byte without consuming it, or `None` at end of data.
    fn peek_next(&self) -> Option<u8>;

    /// Check that `byte` is the byte most recently consumed.
    fn push_back(&self, byte: Option<u8>) -> Option<u8>;
}

/// A read-only cursor over a borrowed byte span.
///
/// The reader never copies or owns the bytes. The cursor always lies in
/// `[0, len]`.
#[derive(Debug, Clone)]
pub struct FixedSpanReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
}

impl<'a> FixedSpanReader<'a> {
    /// Create a reader positioned at the start of `buffer`.
    #[must_use]
    pub const fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, cursor: 0 }
    }

    /// Current cursor, in `[0, len]`.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Length of the underlying span.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the underlying span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of bytes left to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    /// The whole span, regardless of the cursor.
    #[must_use]
    pub const fn data(&self) -> &'a [u8] {
        self.buffer
    }

    /// The unread tail of the span.
    #[must_use]
    pub fn remaining_slice(&self) -> &'a [u8] {
        &self.buffer[self.cursor..]
    }

    /// Set the cursor to `position`.
    ///
    /// # Errors
    ///
    /// Returns [`SeekError::OutOfRange`] if `position` is negative or greater
    /// than [`len`](Self::len). The cursor is not moved.
    pub fn seek_absolute(&mut self, position: i64) -> Result<usize, SeekError> {
        self.seek_to(i128::from(position))
    }

    /// Set the cursor to `offset` bytes past `anchor`.
    ///
    /// `Start` anchors at 0, `Current` at the cursor, `End` at the span length.
    ///
    /// # Errors
    ///
    /// Same as [`seek_absolute`](Self::seek_absolute).
    pub fn seek_relative(&mut self, offset: i64, anchor: SeekAnchor) -> Result<usize, SeekError> {
        let base = match anchor {
            SeekAnchor::Start => 0,
            SeekAnchor::Current => self.cursor,
            SeekAnchor::End => self.buffer.len(),
        };
        // usize and i64 both fit in i128, so the sum cannot overflow.
        #[allow(clippy::cast_possible_wrap)]
        let target = base as i128 + i128::from(offset);
        self.seek_to(target)
    }

    fn seek_to(&mut self, target: i128) -> Result<usize, SeekError> {
        match usize::try_from(target) {
            Ok(position) if position <= self.buffer.len() => {
                self.cursor = position;
                Ok(position)
            }
            _ => {
                tracing::debug!(
                    requested = %target,
                    len = self.buffer.len(),
                    cursor = self.cursor,
                    "rejected seek outside span"
                );
                Err(SeekError::OutOfRange {
                    target,
                    len: self.buffer.len(),
                })
            }
        }
    }

    /// Consume up to `n` bytes.
    ///
    /// Returns `min(n, remaining)` bytes. At end of data the result is empty;
    /// that is not an error.
    pub fn read(&mut self, n: usize) -> &'a [u8] {
        let count = n.min(self.remaining());
        let start = self.cursor;
        self.cursor += count;
        &self.buffer[start..self.cursor]
    }

    /// Copy up to `dst.len()` bytes into `dst`, returning how many were copied.
    pub fn read_into(&mut self, dst: &mut [u8]) -> usize {
        let src = self.read(dst.len());
        dst[..src.len()].copy_from_slice(src);
        src.len()
    }

    /// Consume one byte, or return `None` at end of data.
    pub fn next_byte(&mut self) -> Option<u8> {
        let byte = self.peek_next()?;
        self.cursor += 1;
        Some(byte)
    }

    /// The byte at the cursor, or `None` at end of data.
    #[must_use]
    pub fn peek_next(&self) -> Option<u8> {
        self.buffer.get(self.cursor).copied()
    }

    /// Put back the byte most recently consumed.
    ///
    /// The span is read-only, so nothing is written and the cursor does not
    /// move: this only checks that `byte` matches `data()[position() - 1]`.
    /// `None` stands for end of data and is passed through untouched.
    ///
    /// A mismatch is a caller bug and trips a debug assertion.
    #[must_use]
    pub fn push_back(&self, byte: Option<u8>) -> Option<u8> {
        if let Some(b) = byte {
            let previous = self
                .cursor
                .checked_sub(1)
                .and_then(|i| self.buffer.get(i).copied());
            debug_assert_eq!(
                previous,
                Some(b),
                "pushed back byte does not match the byte before the cursor"
            );
        }
        byte
    }

    #[cfg(feature = "std")]
    pub(crate) fn consume(&mut self, amt: usize) {
        self.cursor += amt.min(self.remaining());
    }
}

impl ByteSource for FixedSpanReader<'_> {
    fn position(&self) -> usize {
        FixedSpanReader::position(self)
    }

    fn len(&self) -> usize {
        FixedSpanReader::len(self)
    }

    fn seek_absolute(&mut self, position: i64) -> Result<usize, SeekError> {
        FixedSpanReader::seek_absolute(self, position)
    }

    fn seek_relative(&mut self, offset: i64, anchor: SeekAnchor) -> Result<usize, SeekError> {
        FixedSpanReader::seek_relative(self, offset, anchor)
    }

    fn read(&mut self, n: usize) -> &[u8] {
        FixedSpanReader::read(self, n)
    }

    fn peek_next(&self) -> Option<u8> {
        FixedSpanReader::peek_next(self)
    }

    fn push_back(&self, byte: Option<u8>) -> Option<u8> {
        FixedSpanReader::push_back(self, byte)
    }
}
