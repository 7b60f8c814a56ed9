//! Copying asset ranges out of a source stream.
//!
//! Failed extractions leave whatever was already written in the destination;
//! callers must treat that output as invalid.

use std::io::{Read, Seek, SeekFrom, Write};

use log::trace;

use super::codec::compression;
use super::types::error::{BtwError, Result};
use super::types::models::{AssetRange, Container};
use super::utils::{read_up_to, seek_to};

/// Bytes copied per read/write round.
pub const COPY_CHUNK_SIZE: usize = 8192;

/// Copies `range` from `source` to the start of `dest` verbatim.
///
/// Each chunk is read in full before it is written, so a source that ends
/// inside the range fails with [`BtwError::ShortRead`] without writing the
/// incomplete chunk. An inverted range fails with [`BtwError::InvalidLayout`]
/// before anything is read or written.
pub fn extract_range<R, W>(source: &mut R, range: AssetRange, dest: &mut W) -> Result<u64>
where
    R: Read + Seek + ?Sized,
    W: Write + Seek + ?Sized,
{
    let range = range.checked()?;
    seek_to(source, range.start)?;
    dest.seek(SeekFrom::Start(0))?;

    let total = range.len();
    let mut buf = vec![0u8; COPY_CHUNK_SIZE];
    let mut copied = 0u64;
    while copied < total {
        let chunk = (total - copied).min(COPY_CHUNK_SIZE as u64) as usize;
        let read = read_up_to(source, &mut buf[..chunk])?;
        if read != chunk {
            return Err(BtwError::ShortRead {
                context: "asset range",
                offset: range.start + copied,
                expected: chunk as u64,
                found: read as u64,
            });
        }
        dest.write_all(&buf[..chunk])?;
        copied += chunk as u64;
    }
    dest.flush()?;
    trace!("Copied {} bytes from {}", copied, range);
    Ok(copied)
}

/// Writes the container payload to `dest`, inflating it when compressed.
///
/// Returns the number of bytes written to `dest`.
pub fn extract_container<R, W>(source: &mut R, container: &Container, dest: &mut W) -> Result<u64>
where
    R: Read + Seek + ?Sized,
    W: Write + Seek + ?Sized,
{
    if !container.compressed {
        return extract_range(source, container.range, dest);
    }

    let range = container.range.checked()?;
    seek_to(source, range.start)?;
    dest.seek(SeekFrom::Start(0))?;
    let written = compression::inflate_into(&mut *source, range.len(), dest)?;
    dest.flush()?;
    Ok(written)
}
