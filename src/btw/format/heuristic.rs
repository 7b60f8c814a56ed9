//! Marker-only image discovery for inputs without the BTW signature.

use std::io::{Read, Seek};

use log::{debug, info};

use crate::btw::scan::find_sequence;
use crate::btw::types::error::Result;
use crate::btw::types::magic::{PNG_END, PNG_START};
use crate::btw::types::models::{AssetRange, HeuristicLayout, ImagePair};

/// Locates two consecutive PNG images by their start and end markers.
///
/// The container structure is ignored entirely, so only the image ranges are
/// known afterwards.
pub fn scan_images<R: Read + Seek + ?Sized>(stream: &mut R) -> Result<HeuristicLayout> {
    info!("heuristics active - functionality limited");

    let preview = find_png(stream, 0)?;
    let mask = find_png(stream, preview.end)?;
    debug!("heuristic images at {} and {}", preview, mask);

    Ok(HeuristicLayout {
        images: ImagePair { preview, mask },
    })
}

fn find_png<R: Read + Seek + ?Sized>(stream: &mut R, offset: u64) -> Result<AssetRange> {
    let start = find_sequence(stream, offset, &PNG_START)?;
    let end_marker = find_sequence(stream, start, &PNG_END)?;
    AssetRange::new(start, end_marker + PNG_END.len() as u64)
}
