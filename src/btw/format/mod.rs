//! File format parsing layer for BTW label files.
//!
//! # Module Organization
//!
//! - [`signature`]: Checks the fixed start-of-file signature
//! - [`layout`]: Walks the sections of a signed file
//! - [`heuristic`]: Finds the images by marker search when there is no signature
//!
//! Both parse paths sit on top of the scanners in [`crate::btw::scan`].

pub mod heuristic;
pub mod layout;
pub mod signature;

use std::io::{Read, Seek};

use crate::btw::types::error::Result;
use crate::btw::types::models::{ScanMode, SectionLayout};

/// Recovers the layout of `stream` using the caller-selected `mode`.
pub fn parse<R: Read + Seek + ?Sized>(stream: &mut R, mode: ScanMode) -> Result<SectionLayout> {
    match mode {
        ScanMode::Structured => layout::parse_layout(stream).map(SectionLayout::Structured),
        ScanMode::Heuristic => heuristic::scan_images(stream).map(SectionLayout::Heuristic),
    }
}
