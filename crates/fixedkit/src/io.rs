use std::io;

use crate::{
    error::SeekError,
    reader::{FixedSpanReader, SeekAnchor},
};

impl From<SeekError> for io::Error {
    fn from(err: SeekError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

impl io::Read for FixedSpanReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.read_into(buf))
    }
}

impl io::BufRead for FixedSpanReader<'_> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.remaining_slice())
    }

    fn consume(&mut self, amt: usize) {
        FixedSpanReader::consume(self, amt);
    }
}

/// Unlike [`io::Cursor`], seeking past the end is rejected rather than
/// allowed.
impl io::Seek for FixedSpanReader<'_> {
    fn seek(&mut self, pos: io::SeekFrom) -> io::Result<u64> {
        let position = match pos {
            io::SeekFrom::Start(offset) => {
                // Anything above i64::MAX is past the end of any span.
                let offset = i64::try_from(offset).map_err(|_| SeekError::OutOfRange {
                    target: i128::from(offset),
                    len: self.len(),
                })?;
                self.seek_relative(offset, SeekAnchor::Start)?
            }
            io::SeekFrom::Current(offset) => self.seek_relative(offset, SeekAnchor::Current)?,
            io::SeekFrom::End(offset) => self.seek_relative(offset, SeekAnchor::End)?,
        };
        Ok(position as u64)
    }

    fn stream_position(&mut self) -> io::Result<u64> {
        Ok(self.position() as u64)
    }
}
