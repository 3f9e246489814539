use thiserror::Error;

/// A seek that would place the read cursor outside `[0, len]`.
///
/// The cursor is left where it was when this is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekError {
    /// The requested position lies before the start or past the end of the span.
    #[error("seek target {target} is outside the span [0, {len}]")]
    OutOfRange {
        /// The absolute position that was requested.
        target: i128,
        /// Length of the span.
        len: usize,
    },
}

/// A checked index that is not below the container size.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("index {index} is out of range for size {size}")]
pub struct OutOfRangeError {
    /// The rejected index.
    pub index: usize,
    /// The container size.
    pub size: usize,
}
