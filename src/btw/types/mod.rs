//! Foundational data structures, error types, and magic byte constants.

pub mod error;
pub mod magic;
pub mod models;
