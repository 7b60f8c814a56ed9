//! # Structured Layout Parsing
//!
//! Walks a BTW file from its signature to the end of the container, one
//! section at a time:
//!
//! 1. **Signature**: the fixed start-of-file signature at offset 0.
//! 2. **Header end**: the end-of-metadata marker after the signature.
//! 3. **Prefix boundary**: the first non-zero word after the marker ends the prefix.
//! 4. **Images**: twice, a u32 LE length followed by that many PNG bytes,
//!    then padding.
//! 5. **Container detection**: an optional `00 01` compression marker.
//! 6. **Container end**: the stream length.
//!
//! Any failing step fails the whole parse; no partial layout is returned.

use std::io::{Read, Seek};

use log::debug;

use crate::btw::scan::{find_sequence, skip_padding};
use crate::btw::types::error::{BtwError, Result};
use crate::btw::types::magic::{BTW_SIGNATURE, COMPRESSION_MARKER, END_OF_META};
use crate::btw::types::models::{AssetRange, Container, ImagePair, StructuredLayout};
use crate::btw::utils::{decode_length, read_exact_at, stream_len};

use super::signature::is_btw;

/// Width of the length field in front of each image.
const LENGTH_FIELD_SIZE: u64 = 4;

/// Recovers the full section layout of a BTW stream.
pub fn parse_layout<R: Read + Seek + ?Sized>(stream: &mut R) -> Result<StructuredLayout> {
    if !is_btw(stream)? {
        return Err(BtwError::SignatureMismatch);
    }
    debug!("signature ok");

    let meta_end = find_sequence(stream, BTW_SIGNATURE.len() as u64, &END_OF_META)?;
    debug!("end of metadata at {:#x}", meta_end);

    let prefix_end = skip_padding(stream, meta_end + END_OF_META.len() as u64)?;
    debug!("prefix ends at {:#x}", prefix_end);

    let (preview, position) = read_image_section(stream, prefix_end)?;
    let (mask, position) = read_image_section(stream, position)?;
    debug!("images at {} and {}", preview, mask);

    let container = detect_container(stream, position)?;
    debug!(
        "{} container at {}",
        if container.compressed { "compressed" } else { "uncompressed" },
        container.range
    );

    let layout = StructuredLayout {
        prefix: AssetRange::new(0, prefix_end)?,
        images: ImagePair { preview, mask },
        container,
    };
    layout.validate(container.range.end)?;
    Ok(layout)
}

/// Reads one length-prefixed image at `position`.
///
/// Returns the image range and the offset of the next section.
fn read_image_section<R: Read + Seek + ?Sized>(
    stream: &mut R,
    position: u64,
) -> Result<(AssetRange, u64)> {
    let mut field = [0u8; LENGTH_FIELD_SIZE as usize];
    read_exact_at(stream, position, &mut field, "image length")?;
    let length = decode_length(field);

    let start = position + LENGTH_FIELD_SIZE;
    let range = AssetRange::new(start, start + u64::from(length))?;
    let next = skip_padding(stream, range.end)?;
    Ok((range, next))
}

/// Peeks for the compression marker at `position` and sizes the container
/// from the stream length.
fn detect_container<R: Read + Seek + ?Sized>(stream: &mut R, position: u64) -> Result<Container> {
    let mut peek = [0u8; 2];
    read_exact_at(stream, position, &mut peek, "container marker")?;

    let compressed = peek[..] == *COMPRESSION_MARKER.bytes();
    let start = if compressed {
        position + COMPRESSION_MARKER.len() as u64
    } else {
        position
    };

    let end = stream_len(stream)?;
    if start == 0 || end == 0 {
        return Err(BtwError::InvalidLayout(format!(
            "non-positive container bounds {:#x}..{:#x}",
            start, end
        )));
    }

    Ok(Container {
        range: AssetRange::new(start, end)?,
        compressed,
    })
}
