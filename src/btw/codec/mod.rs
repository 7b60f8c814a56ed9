//! Codec layer for the compressed container.
//!
//! # Submodules
//!
//! - [`compression`][]: zlib inflate of the container payload

pub mod compression;
