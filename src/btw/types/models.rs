//! Core data structures describing the recovered layout of a BTW file.
//!
//! A BTW file is laid out as:
//!
//! ```text
//! ┌──────────────────────┐
//! │ Signature + metadata │  prefix: [0, prefix_end)
//! ├──────────────────────┤
//! │ u32 LE length + PNG  │  preview image
//! ├──────────────────────┤
//! │ u32 LE length + PNG  │  mask image
//! ├──────────────────────┤
//! │ [00 01] container    │  optionally compressed, runs to end of file
//! └──────────────────────┘
//! ```
//!
//! Sections are separated by zero padding on 4-byte boundaries.

use std::fmt;

use super::error::{BtwError, Result};

/// A half-open byte range `[start, end)` inside the source stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetRange {
    pub start: u64,
    pub end: u64,
}

impl AssetRange {
    /// Creates a range, rejecting `end < start`.
    pub fn new(start: u64, end: u64) -> Result<Self> {
        if end < start {
            return Err(BtwError::InvalidLayout(format!(
                "range end {:#x} precedes start {:#x}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    /// Re-checks a range that may have been built from its public fields.
    pub fn checked(self) -> Result<Self> {
        Self::new(self.start, self.end)
    }

    /// Zero for an inverted range; use [`AssetRange::checked`] to reject those.
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for AssetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#X} - {:#X}", self.start, self.end)
    }
}

/// Which of the two embedded images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    /// Image 0: the label preview.
    Preview,
    /// Image 1: the preview mask.
    Mask,
}

impl ImageSlot {
    pub const ALL: [ImageSlot; 2] = [ImageSlot::Preview, ImageSlot::Mask];

    pub fn index(self) -> usize {
        match self {
            ImageSlot::Preview => 0,
            ImageSlot::Mask => 1,
        }
    }
}

impl fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSlot::Preview => write!(f, "preview"),
            ImageSlot::Mask => write!(f, "mask"),
        }
    }
}

/// The two image ranges, preview first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagePair {
    pub preview: AssetRange,
    pub mask: AssetRange,
}

impl ImagePair {
    pub fn get(&self, slot: ImageSlot) -> AssetRange {
        match slot {
            ImageSlot::Preview => self.preview,
            ImageSlot::Mask => self.mask,
        }
    }

    /// Iterates `(slot, range)` in file order.
    pub fn iter(&self) -> impl Iterator<Item = (ImageSlot, AssetRange)> + '_ {
        ImageSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }
}

/// The trailing payload section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container {
    /// Data range, excluding the compression marker when present.
    pub range: AssetRange,
    pub compressed: bool,
}

/// Layout recovered by walking the structured format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuredLayout {
    /// Signature and metadata, always starting at offset 0.
    pub prefix: AssetRange,
    pub images: ImagePair,
    pub container: Container,
}

impl StructuredLayout {
    /// Checks `0 <= prefix_end <= images... <= container_start <= container_end == stream_len`.
    pub fn validate(&self, stream_len: u64) -> Result<()> {
        let bounds = [
            ("prefix end", self.prefix.end),
            ("preview start", self.images.preview.start),
            ("preview end", self.images.preview.end),
            ("mask start", self.images.mask.start),
            ("mask end", self.images.mask.end),
            ("container start", self.container.range.start),
            ("container end", self.container.range.end),
        ];
        for pair in bounds.windows(2) {
            let (prev_name, prev) = pair[0];
            let (next_name, next) = pair[1];
            if next < prev {
                return Err(BtwError::InvalidLayout(format!(
                    "{} {:#x} precedes {} {:#x}",
                    next_name, next, prev_name, prev
                )));
            }
        }
        if self.container.range.start == 0 || self.container.range.end == 0 {
            return Err(BtwError::InvalidLayout(
                "container offsets must be positive".to_string(),
            ));
        }
        if self.container.range.end != stream_len {
            return Err(BtwError::InvalidLayout(format!(
                "container end {:#x} does not match stream length {:#x}",
                self.container.range.end, stream_len
            )));
        }
        Ok(())
    }
}

/// Layout found by marker search alone; no prefix or container is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicLayout {
    pub images: ImagePair,
}

/// Result of a successful parse, tagged by the path that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLayout {
    Structured(StructuredLayout),
    Heuristic(HeuristicLayout),
}

impl SectionLayout {
    pub fn images(&self) -> &ImagePair {
        match self {
            SectionLayout::Structured(layout) => &layout.images,
            SectionLayout::Heuristic(layout) => &layout.images,
        }
    }

    pub fn prefix(&self) -> Result<AssetRange> {
        match self {
            SectionLayout::Structured(layout) => Ok(layout.prefix),
            SectionLayout::Heuristic(_) => Err(BtwError::NotApplicable("prefix")),
        }
    }

    pub fn container(&self) -> Result<Container> {
        match self {
            SectionLayout::Structured(layout) => Ok(layout.container),
            SectionLayout::Heuristic(_) => Err(BtwError::NotApplicable("container")),
        }
    }

    pub fn mode(&self) -> ScanMode {
        match self {
            SectionLayout::Structured(_) => ScanMode::Structured,
            SectionLayout::Heuristic(_) => ScanMode::Heuristic,
        }
    }
}

/// How the layout of a file is recovered. Chosen by the caller; a failed
/// structured parse never falls back to the heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Walk the format from its signature.
    #[default]
    Structured,
    /// Locate the two PNG images by their markers only.
    Heuristic,
}
