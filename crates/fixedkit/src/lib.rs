//! Fixed-memory leaf utilities.
//!
//! - [`FixedSpanReader`]: a read cursor over a caller-owned byte span, with
//!   bounds-checked seeking and end-of-data reported as an empty read.
//! - [`FixedArray`]: a fixed-size, inline array container.
//! - [`AttributeDescriptor`]: a constant-table record describing one attribute
//!   of a schema-derived record type.
//!
//! ```rust
//! use fixedkit::{FixedSpanReader, SeekAnchor};
//!
//! let bytes = [0x10, 0x11, 0x12, 0x13];
//! let mut reader = FixedSpanReader::new(&bytes);
//!
//! assert_eq!(reader.seek_absolute(2), Ok(2));
//! assert_eq!(reader.read(10), &[0x12, 0x13]);
//! assert!(reader.read(1).is_empty());
//! assert!(reader.seek_absolute(5).is_err());
//! assert_eq!(reader.seek_relative(0, SeekAnchor::Current), Ok(4));
//! ```

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod array;
mod attribute;
mod error;
#[cfg(feature = "std")]
mod io;
mod reader;
#[cfg(feature = "serde")]
mod serde_impls;


pub use array::FixedArray;
pub use attribute::{AttributeDescriptor, FormattingMode};
pub use error::{OutOfRangeError, SeekError};
pub use reader::{ByteSource, FixedSpanReader, SeekAnchor};
