#![expect(missing_docs)]

use std::io::{BufRead, ErrorKind, Read, Seek, SeekFrom};

use fixedkit::{FixedSpanReader, SeekError};

const TEXT: &[u8] = b"alpha\nbeta\ngamma";

#[test]
fn read_to_end_drains_the_span() {
    let mut reader = FixedSpanReader::new(TEXT);
    let mut out = Vec::new();
    assert_eq!(Read::read_to_end(&mut reader, &mut out).unwrap(), TEXT.len());
    assert_eq!(out, TEXT);
    // End of data reads zero bytes without error.
    assert_eq!(Read::read(&mut reader, &mut [0u8; 4]).unwrap(), 0);
}

#[test]
fn read_exact_past_end_is_unexpected_eof() {
    let mut reader = FixedSpanReader::new(b"abc");
    let mut buf = [0u8; 4];
    let err = reader.read_exact(&mut buf).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
}

#[test]
fn buf_read_lines() {
    let reader = FixedSpanReader::new(TEXT);
    let lines: Vec<String> = reader.lines().map(Result::unwrap).collect();
    assert_eq!(lines, ["alpha", "beta", "gamma"]);
}

#[test]
fn consume_is_clamped() {
    let mut reader = FixedSpanReader::new(b"abc");
    assert_eq!(reader.fill_buf().unwrap(), b"abc");
    BufRead::consume(&mut reader, 2);
    assert_eq!(reader.fill_buf().unwrap(), b"c");
    BufRead::consume(&mut reader, 10);
    assert!(reader.fill_buf().unwrap().is_empty());
    assert_eq!(reader.position(), 3);
}

#[test]
fn seek_from_each_anchor() {
    let mut reader = FixedSpanReader::new(TEXT);
    assert_eq!(reader.seek(SeekFrom::Start(6)).unwrap(), 6);
    assert_eq!(reader.seek(SeekFrom::Current(5)).unwrap(), 11);
    assert_eq!(reader.seek(SeekFrom::End(-5)).unwrap(), 11);
    assert_eq!(reader.stream_position().unwrap(), 11);

    let mut rest = String::new();
    reader.read_to_string(&mut rest).unwrap();
    assert_eq!(rest, "gamma");
}

#[test]
fn seek_past_end_is_rejected() {
    let mut reader = FixedSpanReader::new(TEXT);
    reader.seek(SeekFrom::Start(3)).unwrap();

    for pos in [
        SeekFrom::Start(TEXT.len() as u64 + 1),
        SeekFrom::Start(u64::MAX),
        SeekFrom::Current(-4),
        SeekFrom::End(1),
    ] {
        let err = reader.seek(pos).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput, "{pos:?}");
        assert!(
            err.get_ref()
                .and_then(|inner| inner.downcast_ref::<SeekError>())
                .is_some()
        );
        assert_eq!(reader.stream_position().unwrap(), 3);
    }
}

#[test]
fn seek_error_message() {
    let mut reader = FixedSpanReader::new(b"abcd");
    let err = reader.seek(SeekFrom::End(2)).unwrap_err();
    assert_eq!(err.to_string(), "seek target 6 is outside the span [0, 4]");
}
