//! Custom error types for the barmaid crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum BtwError {
    /// A read or write on the source or destination did not complete.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A marker or pattern does not occur before end-of-stream.
    #[error("{what} not found at or after offset {from:#x}")]
    NotFound { what: &'static str, from: u64 },

    /// Fewer bytes were available than a fixed-width field requires.
    #[error("Short read for {context} at offset {offset:#x}: expected {expected} bytes, but found {found}")]
    ShortRead {
        context: &'static str,
        offset: u64,
        expected: u64,
        found: u64,
    },

    /// The stream could not be positioned at the requested offset.
    #[error("Failed to seek to offset {offset:#x}: {source}")]
    SeekFailure {
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    /// The total length of the stream could not be determined.
    #[error("Failed to determine stream length: {0}")]
    LengthQueryFailure(#[source] std::io::Error),

    /// Decoded offsets violate the section ordering of the format.
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// The stream does not start with the BarTender format signature.
    #[error("Missing Bar Tender Format File signature")]
    SignatureMismatch,

    /// A search pattern is empty or longer than the scanner overlap allows.
    #[error("Invalid search pattern length {0}: must be between 1 and {max}", max = crate::btw::types::magic::MAX_PATTERN_LEN)]
    InvalidPattern(usize),

    /// The compressed container could not be inflated.
    #[error("Decompression failed: {0}")]
    DecompressionError(String),

    /// The requested section does not exist in the layout that was recovered.
    #[error("{0} is not available in a heuristic layout")]
    NotApplicable(&'static str),
}

/// A convenience `Result` type alias using the crate's `BtwError` type.
pub type Result<T> = std::result::Result<T, BtwError>;
