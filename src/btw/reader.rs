use std::fs::File;
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};

use log::info;

use super::extract;
use super::format;
use super::types::error::Result;
use super::types::models::{ImageSlot, ScanMode, SectionLayout};

/// Output destinations for an extraction run.
///
/// Only the assets with a path are written. In heuristic mode `prefix` and
/// `container` are ignored because their ranges are unknown.
#[derive(Debug, Clone, Default)]
pub struct ExtractTargets {
    pub prefix: Option<PathBuf>,
    pub preview: Option<PathBuf>,
    pub mask: Option<PathBuf>,
    pub container: Option<PathBuf>,
}

impl ExtractTargets {
    fn image(&self, slot: ImageSlot) -> Option<&Path> {
        match slot {
            ImageSlot::Preview => self.preview.as_deref(),
            ImageSlot::Mask => self.mask.as_deref(),
        }
    }
}

/// A parsed BTW file.
///
/// The layout is recovered once in [`BtwReader::open`]. Each extraction opens
/// the file again and releases it when done, so no handle is held between
/// calls.
#[derive(Debug, Clone)]
pub struct BtwReader {
    file_path: PathBuf,
    layout: SectionLayout,
}

impl BtwReader {
    /// Opens `path` and recovers its layout with the given `mode`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - File cannot be opened
    /// - Structured mode: the signature is missing or any section cannot be walked
    /// - Heuristic mode: either PNG image cannot be located
    pub fn open(path: impl AsRef<Path>, mode: ScanMode) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening BTW file: {}", path.display());
        let mut file = File::open(path)?;
        let layout = format::parse(&mut file, mode)?;

        for (slot, range) in layout.images().iter() {
            info!("found PNG #{} ({}): {}", slot.index(), slot, range);
        }
        if let SectionLayout::Structured(structured) = &layout {
            info!("identified prefix: {}", structured.prefix);
            info!(
                "found {} container: {}",
                if structured.container.compressed { "compressed" } else { "uncompressed" },
                structured.container.range
            );
        }

        Ok(Self {
            file_path: path.to_path_buf(),
            layout,
        })
    }

    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Writes one embedded PNG to `dest`.
    pub fn write_image<W: Write + Seek>(&self, slot: ImageSlot, dest: &mut W) -> Result<u64> {
        let mut file = File::open(&self.file_path)?;
        extract::extract_range(&mut file, self.layout.images().get(slot), dest)
    }

    /// Writes the signature and metadata prefix to `dest`.
    pub fn write_prefix<W: Write + Seek>(&self, dest: &mut W) -> Result<u64> {
        let range = self.layout.prefix()?;
        let mut file = File::open(&self.file_path)?;
        extract::extract_range(&mut file, range, dest)
    }

    /// Writes the container to `dest`, inflated if it is compressed.
    pub fn write_container<W: Write + Seek>(&self, dest: &mut W) -> Result<u64> {
        let container = self.layout.container()?;
        let mut file = File::open(&self.file_path)?;
        extract::extract_container(&mut file, &container, dest)
    }

    /// Writes every asset that has a target path, creating or truncating
    /// the output files.
    ///
    /// Stops at the first failure; files written before it are left in place.
    pub fn extract_all(&self, targets: &ExtractTargets) -> Result<()> {
        for slot in ImageSlot::ALL {
            if let Some(path) = targets.image(slot) {
                let mut out = File::create(path)?;
                let n = self.write_image(slot, &mut out)?;
                info!("{}: wrote {} png ({} bytes)", path.display(), slot, n);
            }
        }

        if self.layout.mode() == ScanMode::Heuristic {
            return Ok(());
        }

        if let Some(path) = &targets.prefix {
            let mut out = File::create(path)?;
            let n = self.write_prefix(&mut out)?;
            info!("{}: wrote prefix ({} bytes)", path.display(), n);
        }

        if let Some(path) = &targets.container {
            let mut out = File::create(path)?;
            let n = self.write_container(&mut out)?;
            info!("{}: wrote container ({} bytes)", path.display(), n);
        }

        Ok(())
    }
}
