//! # barmaid
//!
//! Locates and extracts the assets embedded in BarTender Format (`.btw`)
//! label files: the textual prefix, the preview and mask PNG images, and the
//! trailing (optionally zlib-compressed) container.
//!
//! Files carrying the BTW signature are walked section by section. Files
//! without it can still have their two PNG images recovered by marker search.
//!
//! ## Example
//!
//! ```no_run
//! use barmaid::{BtwReader, ImageSlot, ScanMode};
//!
//! let reader = BtwReader::open("label.btw", ScanMode::Structured)?;
//! let mut preview = std::fs::File::create("preview.png")?;
//! reader.write_image(ImageSlot::Preview, &mut preview)?;
//! # Ok::<(), barmaid::BtwError>(())
//! ```
//!
//! Building `.btw` files is not supported.
pub mod btw;

// Re-export the main types for convenience
pub use btw::{
    format::{heuristic::scan_images, layout::parse_layout, parse, signature::is_btw},
    scan::{find_sequence, skip_padding},
    types::{
        magic::MagicPattern,
        models::{
            AssetRange, Container, HeuristicLayout, ImagePair, ImageSlot, ScanMode, SectionLayout,
            StructuredLayout,
        },
    },
    decode_length, stream_len, BtwError, BtwReader, ExtractTargets, Result,
};
