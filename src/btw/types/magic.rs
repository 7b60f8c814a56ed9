//! Magic byte sequences that identify and delimit sections of a BTW file.
//!
//! Every pattern is a compile-time constant with an explicit length. The
//! sequence scanner carries `MAX_PATTERN_LEN - 1` bytes between chunks, so no
//! pattern may be longer than that bound.

use super::error::{BtwError, Result};

/// Longest pattern the sequence scanner can match across a chunk boundary.
pub const MAX_PATTERN_LEN: usize = 32;

/// An immutable byte pattern of 1 to [`MAX_PATTERN_LEN`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagicPattern {
    name: &'static str,
    bytes: &'static [u8],
}

impl MagicPattern {
    /// Creates a pattern, rejecting out-of-range lengths at compile time when
    /// used in a `const` context.
    pub const fn new(name: &'static str, bytes: &'static [u8]) -> Self {
        assert!(
            !bytes.is_empty() && bytes.len() <= MAX_PATTERN_LEN,
            "magic pattern length must be between 1 and MAX_PATTERN_LEN"
        );
        Self { name, bytes }
    }

    /// Fallible constructor for patterns built at runtime.
    pub fn try_new(name: &'static str, bytes: &'static [u8]) -> Result<Self> {
        if bytes.is_empty() || bytes.len() > MAX_PATTERN_LEN {
            return Err(BtwError::InvalidPattern(bytes.len()));
        }
        Ok(Self { name, bytes })
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn bytes(&self) -> &'static [u8] {
        self.bytes
    }

    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }
}

const SIGNATURE_BYTES: [u8; 26] = *b"\r\nBar Tender Format File\r\n";
const END_OF_META_BYTES: [u8; 4] = [0xFF, 0xFE, 0xFF, 0x00];
const PNG_START_BYTES: [u8; 16] = [
    0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R',
];
const PNG_END_BYTES: [u8; 12] = [
    0x00, 0x00, 0x00, 0x00, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82,
];
const COMPRESSION_BYTES: [u8; 2] = [0x00, 0x01];

/// Fixed start-of-file signature (`\r\n` "Bar Tender Format File" `\r\n`).
pub const BTW_SIGNATURE: MagicPattern = MagicPattern::new("format signature", &SIGNATURE_BYTES);

/// Terminates the textual metadata at the head of the file.
pub const END_OF_META: MagicPattern = MagicPattern::new("end-of-metadata marker", &END_OF_META_BYTES);

/// PNG file signature followed by the IHDR chunk header.
pub const PNG_START: MagicPattern = MagicPattern::new("PNG start marker", &PNG_START_BYTES);

/// Empty IEND chunk including its CRC.
pub const PNG_END: MagicPattern = MagicPattern::new("PNG end marker", &PNG_END_BYTES);

/// Precedes a compressed container.
pub const COMPRESSION_MARKER: MagicPattern = MagicPattern::new("compression marker", &COMPRESSION_BYTES);
