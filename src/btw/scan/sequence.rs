//! Chunked search for a magic pattern in a seekable stream.
//!
//! The stream is read in [`CHUNK_SIZE`] pieces. The last `MAX_PATTERN_LEN - 1`
//! bytes of each window are carried in front of the next chunk, so a match
//! that straddles two reads is still found.

use std::io::{Read, Seek};

use log::trace;

use crate::btw::types::error::{BtwError, Result};
use crate::btw::types::magic::{MagicPattern, MAX_PATTERN_LEN};
use crate::btw::utils::{read_up_to, seek_to};

/// Bytes read from the stream per iteration.
pub const CHUNK_SIZE: usize = 8192;

const OVERLAP: usize = MAX_PATTERN_LEN - 1;

/// Returns the absolute offset of the first occurrence of `pattern` at or
/// after `offset`.
///
/// On success the stream is left positioned at the returned offset. When the
/// pattern does not occur before end-of-stream, [`BtwError::NotFound`] is
/// returned and the stream position is unspecified.
pub fn find_sequence<R: Read + Seek + ?Sized>(
    stream: &mut R,
    offset: u64,
    pattern: &MagicPattern,
) -> Result<u64> {
    let needle = pattern.bytes();
    seek_to(stream, offset)?;

    // [ carried overlap | fresh chunk ]; carried bytes end at index OVERLAP.
    let mut buf = vec![0u8; OVERLAP + CHUNK_SIZE];
    let mut carried = 0usize;
    let mut chunk_offset = offset;

    loop {
        let read = read_up_to(stream, &mut buf[OVERLAP..])?;
        if read == 0 {
            trace!("{} not found after {:#x}", pattern.name(), offset);
            return Err(BtwError::NotFound {
                what: pattern.name(),
                from: offset,
            });
        }

        let window_start = OVERLAP - carried;
        let window = &buf[window_start..OVERLAP + read];
        let window_offset = chunk_offset - carried as u64;

        // Positions wholly inside the carried bytes were checked last round.
        let first_unchecked = carried.saturating_sub(needle.len() - 1);
        let hit = window
            .windows(needle.len())
            .enumerate()
            .skip(first_unchecked)
            .find(|(_, candidate)| *candidate == needle)
            .map(|(i, _)| i);

        if let Some(i) = hit {
            let found = window_offset + i as u64;
            trace!("{} found at {:#x}", pattern.name(), found);
            seek_to(stream, found)?;
            return Ok(found);
        }

        let window_len = window.len();
        let keep = window_len.min(OVERLAP);
        let tail = OVERLAP + read - keep;
        buf.copy_within(tail..OVERLAP + read, OVERLAP - keep);
        carried = keep;
        chunk_offset += read as u64;
    }
}
