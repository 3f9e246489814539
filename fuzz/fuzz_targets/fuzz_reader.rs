#![no_main]
use std::io::{Read, Seek, SeekFrom};

use arbitrary::Arbitrary;
use fixedkit::{FixedSpanReader, SeekAnchor};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Anchor {
    Start,
    Current,
    End,
}

#[derive(Debug, Arbitrary)]
enum Op {
    SeekAbsolute(i64),
    SeekRelative(i64, Anchor),
    Read(u16),
    ReadInto(u8),
    NextByte,
    Peek,
    PushBackLast,
    IoSeek(i64, Anchor),
}

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    data: &'a [u8],
    ops: Vec<Op>,
}

/// Reference cursor: what every operation should do, computed in i128.
struct Model {
    len: i128,
    cursor: i128,
}

impl Model {
    fn seek(&mut self, target: i128) -> Option<i128> {
        (0..=self.len).contains(&target).then(|| {
            self.cursor = target;
            target
        })
    }

    fn base(&self, anchor: &Anchor) -> i128 {
        match anchor {
            Anchor::Start => 0,
            Anchor::Current => self.cursor,
            Anchor::End => self.len,
        }
    }
}

fn to_anchor(anchor: &Anchor) -> SeekAnchor {
    match anchor {
        Anchor::Start => SeekAnchor::Start,
        Anchor::Current => SeekAnchor::Current,
        Anchor::End => SeekAnchor::End,
    }
}

fn run(input: &Input<'_>) {
    let data = input.data;
    let mut reader = FixedSpanReader::new(data);
    let mut model = Model {
        len: data.len() as i128,
        cursor: 0,
    };

    for op in &input.ops {
        match op {
            Op::SeekAbsolute(pos) => {
                let got = reader.seek_absolute(*pos).ok().map(|p| p as i128);
                assert_eq!(got, model.seek(i128::from(*pos)));
            }
            Op::SeekRelative(offset, anchor) => {
                let target = model.base(anchor) + i128::from(*offset);
                let got = reader
                    .seek_relative(*offset, to_anchor(anchor))
                    .ok()
                    .map(|p| p as i128);
                assert_eq!(got, model.seek(target));
            }
            Op::Read(n) => {
                let start = model.cursor as usize;
                let end = (start + usize::from(*n)).min(data.len());
                assert_eq!(reader.read(usize::from(*n)), &data[start..end]);
                model.cursor = end as i128;
            }
            Op::ReadInto(n) => {
                let mut buf = vec![0u8; usize::from(*n)];
                let start = model.cursor as usize;
                let count = Read::read(&mut reader, &mut buf).unwrap();
                assert_eq!(&buf[..count], &data[start..start + count]);
                assert_eq!(count, usize::from(*n).min(data.len() - start));
                model.cursor += count as i128;
            }
            Op::NextByte => {
                let expected = data.get(model.cursor as usize).copied();
                assert_eq!(reader.next_byte(), expected);
                if expected.is_some() {
                    model.cursor += 1;
                }
            }
            Op::Peek => {
                assert_eq!(reader.peek_next(), data.get(model.cursor as usize).copied());
            }
            Op::PushBackLast => {
                if let Some(i) = (model.cursor as usize).checked_sub(1) {
                    assert_eq!(reader.push_back(Some(data[i])), Some(data[i]));
                }
            }
            Op::IoSeek(offset, anchor) => {
                let from = match anchor {
                    Anchor::Start => SeekFrom::Start(offset.unsigned_abs()),
                    Anchor::Current => SeekFrom::Current(*offset),
                    Anchor::End => SeekFrom::End(*offset),
                };
                let target = match from {
                    SeekFrom::Start(p) => i128::from(p),
                    _ => model.base(anchor) + i128::from(*offset),
                };
                let got = reader.seek(from).ok().map(i128::from);
                assert_eq!(got, model.seek(target));
            }
        }
        assert_eq!(reader.position() as i128, model.cursor);
        assert!(reader.position() <= reader.len());
    }
}

fuzz_target!(|input: Input<'_>| run(&input));
