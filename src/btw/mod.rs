//! Core BTW reader module.
//!
//! # Module Organization
//!
//! - [`types`]: Error taxonomy, magic byte constants, and layout models
//! - [`scan`]: Chunked pattern search and padding skip over seekable streams
//! - [`format`]: Structured and heuristic layout recovery
//! - [`codec`]: Inflate for compressed containers
//! - [`extract`]: Range copy and container extraction
//! - [`reader`]: Path-based front door tying the above together

pub mod codec;
pub mod extract;
pub mod format;
pub mod reader;
pub mod scan;
pub mod types;
mod utils;

pub use reader::{BtwReader, ExtractTargets};
pub use types::error::{BtwError, Result};
pub use utils::{decode_length, stream_len};
