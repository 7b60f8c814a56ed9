//! Low-level stream helpers shared by the scanners and the extractor.

use std::io::{ErrorKind, Read, Seek, SeekFrom};

use byteorder::{ByteOrder, LittleEndian};

use super::types::error::{BtwError, Result};

/// Positions `stream` at the absolute `offset`.
pub fn seek_to<S: Seek + ?Sized>(stream: &mut S, offset: u64) -> Result<()> {
    stream
        .seek(SeekFrom::Start(offset))
        .map(|_| ())
        .map_err(|source| BtwError::SeekFailure { offset, source })
}

/// Reads until `buf` is full or the stream is exhausted.
///
/// Returns the number of bytes read; anything less than `buf.len()` means EOF.
pub fn read_up_to<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

/// Reads exactly `buf.len()` bytes at `offset`, reporting a short read otherwise.
pub fn read_exact_at<R: Read + Seek + ?Sized>(
    stream: &mut R,
    offset: u64,
    buf: &mut [u8],
    context: &'static str,
) -> Result<()> {
    seek_to(stream, offset)?;
    let found = read_up_to(stream, buf)?;
    if found < buf.len() {
        return Err(BtwError::ShortRead {
            context,
            offset,
            expected: buf.len() as u64,
            found: found as u64,
        });
    }
    Ok(())
}

/// Decodes a 4-byte little-endian length field.
pub fn decode_length(bytes: [u8; 4]) -> u32 {
    LittleEndian::read_u32(&bytes)
}

/// Total length of a seekable stream.
///
/// Seeks to the end and reports the position, then restores the cursor.
pub fn stream_len<S: Seek + ?Sized>(stream: &mut S) -> Result<u64> {
    let current = stream.stream_position().map_err(BtwError::LengthQueryFailure)?;
    let len = stream
        .seek(SeekFrom::End(0))
        .map_err(BtwError::LengthQueryFailure)?;
    if current != len {
        stream
            .seek(SeekFrom::Start(current))
            .map_err(BtwError::LengthQueryFailure)?;
    }
    Ok(len)
}
