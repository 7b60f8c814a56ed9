//! Decompression of the BTW container.
//!
//! A compressed container is a zlib stream (deflate with a zlib header and
//! Adler-32 trailer) following the `00 01` marker.

use std::io::{self, Read, Write};

use flate2::read::ZlibDecoder;
use log::trace;

use crate::btw::types::error::{BtwError, Result};

/// Inflates at most `compressed_len` bytes from `input` into `output`.
///
/// Returns the number of decompressed bytes written.
///
/// # Errors
/// Returns [`BtwError::DecompressionError`] if the data is not a valid zlib
/// stream, and [`BtwError::Io`] if writing to `output` fails.
pub fn inflate_into<R: Read, W: Write + ?Sized>(
    input: R,
    compressed_len: u64,
    output: &mut W,
) -> Result<u64> {
    trace!("Inflating {} compressed bytes", compressed_len);
    let mut decoder = ZlibDecoder::new(input.take(compressed_len));
    let mut buf = vec![0u8; 8192];
    let mut written = 0u64;
    loop {
        let n = match decoder.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(BtwError::DecompressionError(format!(
                    "zlib inflate failed after {} bytes: {}",
                    written, e
                )))
            }
        };
        output.write_all(&buf[..n])?;
        written += n as u64;
    }
    trace!("Inflated {} -> {} bytes", compressed_len, written);
    Ok(written)
}
