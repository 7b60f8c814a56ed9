//! Sequence scanner and padding skipper tests.

use std::io::{self, Cursor, ErrorKind, Read, Seek, SeekFrom};

use barmaid::btw::scan::sequence::CHUNK_SIZE;
use barmaid::btw::types::magic::{BTW_SIGNATURE, COMPRESSION_MARKER, END_OF_META, PNG_END, PNG_START};
use barmaid::{decode_length, find_sequence, skip_padding, BtwError, MagicPattern};

const LONGEST: [u8; 32] = *b"0123456789abcdefghijklmnopqrstuv";
const LONGEST_PATTERN: MagicPattern = MagicPattern::new("32-byte pattern", &LONGEST);

fn filler(len: usize) -> Vec<u8> {
    vec![0xAA; len]
}

fn place(data: &mut [u8], at: usize, pattern: &MagicPattern) {
    data[at..at + pattern.len()].copy_from_slice(pattern.bytes());
}

#[test]
fn finds_pattern_straddling_chunk_boundary() {
    let mut data = filler(3 * CHUNK_SIZE);
    place(&mut data, 8190, &PNG_END);
    let mut stream = Cursor::new(data);

    assert_eq!(find_sequence(&mut stream, 0, &PNG_END).unwrap(), 8190);
}

#[test]
fn finds_every_straddling_placement_for_every_pattern() {
    let patterns = [
        COMPRESSION_MARKER,
        END_OF_META,
        PNG_END,
        PNG_START,
        BTW_SIGNATURE,
        LONGEST_PATTERN,
    ];
    for pattern in &patterns {
        for start in [0u64, 7] {
            let boundary = start as usize + CHUNK_SIZE;
            let first = boundary - pattern.len() + 1;
            for at in first..boundary {
                let mut data = filler(2 * CHUNK_SIZE + 64);
                place(&mut data, at, pattern);
                let mut stream = Cursor::new(data);
                let found = find_sequence(&mut stream, start, pattern)
                    .unwrap_or_else(|e| panic!("{} at {}: {}", pattern.name(), at, e));
                assert_eq!(found, at as u64, "{} from {}", pattern.name(), start);
            }
        }
    }
}

#[test]
fn finds_pattern_in_later_chunks() {
    let mut data = filler(5 * CHUNK_SIZE);
    place(&mut data, 4 * CHUNK_SIZE - 3, &LONGEST_PATTERN);
    let mut stream = Cursor::new(data);

    assert_eq!(
        find_sequence(&mut stream, 100, &LONGEST_PATTERN).unwrap(),
        (4 * CHUNK_SIZE - 3) as u64
    );
}

#[test]
fn leaves_stream_at_match() {
    let mut data = filler(1000);
    place(&mut data, 321, &END_OF_META);
    let mut stream = Cursor::new(data);

    let found = find_sequence(&mut stream, 0, &END_OF_META).unwrap();
    assert_eq!(stream.stream_position().unwrap(), found);
}

#[test]
fn returns_first_occurrence_at_or_after_offset() {
    let mut data = filler(600);
    place(&mut data, 10, &PNG_START);
    place(&mut data, 300, &PNG_START);
    let mut stream = Cursor::new(data);

    assert_eq!(find_sequence(&mut stream, 0, &PNG_START).unwrap(), 10);
    assert_eq!(find_sequence(&mut stream, 10, &PNG_START).unwrap(), 10);
    assert_eq!(find_sequence(&mut stream, 11, &PNG_START).unwrap(), 300);
}

#[test]
fn finds_pattern_ending_at_end_of_stream() {
    let mut data = filler(CHUNK_SIZE + 20);
    let at = data.len() - PNG_END.len();
    place(&mut data, at, &PNG_END);
    let mut stream = Cursor::new(data);

    assert_eq!(find_sequence(&mut stream, 0, &PNG_END).unwrap(), at as u64);
}

#[test]
fn absent_pattern_is_not_found() {
    // A truncated copy of the pattern must not match.
    let mut data = filler(2 * CHUNK_SIZE);
    let partial = &PNG_END.bytes()[..PNG_END.len() - 1];
    let at = data.len() - partial.len();
    data[at..].copy_from_slice(partial);
    let mut stream = Cursor::new(data);

    let err = find_sequence(&mut stream, 0, &PNG_END).unwrap_err();
    assert!(matches!(err, BtwError::NotFound { .. }), "got {:?}", err);
}

#[test]
fn match_before_offset_is_ignored() {
    let mut data = filler(100);
    place(&mut data, 4, &END_OF_META);
    let mut stream = Cursor::new(data);

    assert!(matches!(
        find_sequence(&mut stream, 5, &END_OF_META),
        Err(BtwError::NotFound { .. })
    ));
}

#[test]
fn offset_past_end_is_not_found() {
    let mut stream = Cursor::new(filler(16));
    assert!(matches!(
        find_sequence(&mut stream, 1000, &END_OF_META),
        Err(BtwError::NotFound { .. })
    ));
}

#[test]
fn runtime_patterns_are_length_checked() {
    assert!(MagicPattern::try_new("empty", b"").is_err());
    assert!(MagicPattern::try_new("too long", &[0u8; 33]).is_err());
    assert!(MagicPattern::try_new("ok", b"IEND").is_ok());
}

#[test]
fn padding_skip_returns_first_non_zero_word() {
    let data = vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x42];
    let mut stream = Cursor::new(data);

    assert_eq!(skip_padding(&mut stream, 0).unwrap(), 8);
    assert_eq!(stream.stream_position().unwrap(), 8);
}

#[test]
fn padding_skip_without_padding_returns_offset() {
    let data = vec![0, 0, 1, 0, 0, 0, 0, 0];
    let mut stream = Cursor::new(data);

    assert_eq!(skip_padding(&mut stream, 0).unwrap(), 0);
}

#[test]
fn padding_skip_steps_from_unaligned_offset() {
    // Words are taken relative to the starting offset: [1..5) is zero, [5..9) is not.
    let data = vec![9, 0, 0, 0, 0, 0, 7, 0, 0, 0];
    let mut stream = Cursor::new(data);

    assert_eq!(skip_padding(&mut stream, 1).unwrap(), 5);
}

#[test]
fn padding_to_end_of_stream_is_not_found() {
    let data = vec![0u8; 10];
    let mut stream = Cursor::new(data);

    let err = skip_padding(&mut stream, 0).unwrap_err();
    assert!(matches!(err, BtwError::NotFound { .. }), "got {:?}", err);
    // Restored to the start of the incomplete word.
    assert_eq!(stream.stream_position().unwrap(), 8);
}

#[test]
fn length_fields_decode_little_endian() {
    assert_eq!(decode_length([0x02, 0x00, 0x00, 0x00]), 2);
    assert_eq!(decode_length([0x00, 0x01, 0x00, 0x00]), 256);
    assert_eq!(decode_length([0x78, 0x56, 0x34, 0x12]), 0x1234_5678);
}

/// Stream that reads fine but cannot be positioned.
struct UnseekableStream(Cursor<Vec<u8>>);

impl Read for UnseekableStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}

impl Seek for UnseekableStream {
    fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
        Err(io::Error::new(ErrorKind::Unsupported, "not seekable"))
    }
}

#[test]
fn seek_error_is_reported_by_scanner() {
    let mut data = filler(64);
    place(&mut data, 8, &END_OF_META);
    let mut stream = UnseekableStream(Cursor::new(data));

    let err = find_sequence(&mut stream, 4, &END_OF_META).unwrap_err();
    assert!(matches!(err, BtwError::SeekFailure { offset: 4, .. }), "got {:?}", err);
}

#[test]
fn seek_error_is_reported_by_padding_skip() {
    let mut stream = UnseekableStream(Cursor::new(vec![0, 0, 0, 0, 1, 0, 0, 0]));

    let err = skip_padding(&mut stream, 0).unwrap_err();
    assert!(matches!(err, BtwError::SeekFailure { offset: 0, .. }), "got {:?}", err);
}
