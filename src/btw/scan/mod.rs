//! Stream scanning primitives.
//!
//! Both scanners take an explicit starting offset and return the offset they
//! stopped at, so callers never depend on where a previous call left the
//! stream cursor.

pub mod padding;
pub mod sequence;

pub use padding::skip_padding;
pub use sequence::find_sequence;
