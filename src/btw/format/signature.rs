use std::io::{Read, Seek};

use crate::btw::types::error::Result;
use crate::btw::types::magic::BTW_SIGNATURE;
use crate::btw::utils::{read_up_to, seek_to};

/// Checks for the BTW start-of-file signature at offset 0.
///
/// A stream shorter than the signature is simply not a BTW file.
pub fn is_btw<R: Read + Seek + ?Sized>(stream: &mut R) -> Result<bool> {
    seek_to(stream, 0)?;
    let mut head = [0u8; BTW_SIGNATURE.len()];
    let read = read_up_to(stream, &mut head)?;
    Ok(read == head.len() && head[..] == *BTW_SIGNATURE.bytes())
}
