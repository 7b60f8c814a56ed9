//! Skips the zero padding that separates sections.

use std::io::{Read, Seek};

use log::trace;

use crate::btw::types::error::{BtwError, Result};
use crate::btw::utils::{read_up_to, seek_to};

/// Width of one padding word.
pub const WORD_SIZE: u64 = 4;

/// Advances from `offset` in 4-byte steps until a word with any non-zero
/// byte is read, and returns that word's offset.
///
/// The stream is left positioned at the returned offset. If a full word
/// cannot be read before end-of-stream, [`BtwError::NotFound`] is returned
/// and the stream is put back at the start of the incomplete word.
pub fn skip_padding<R: Read + Seek + ?Sized>(stream: &mut R, offset: u64) -> Result<u64> {
    seek_to(stream, offset)?;

    let mut position = offset;
    let mut word = [0u8; WORD_SIZE as usize];
    loop {
        let read = read_up_to(stream, &mut word)?;
        if read < word.len() {
            seek_to(stream, position)?;
            trace!("padding from {:#x} runs to end of stream", offset);
            return Err(BtwError::NotFound {
                what: "non-zero word",
                from: offset,
            });
        }
        if word.iter().any(|&b| b != 0) {
            seek_to(stream, position)?;
            trace!("skipped {} padding bytes from {:#x}", position - offset, offset);
            return Ok(position);
        }
        position += WORD_SIZE;
    }
}
