//! Shared utility functions.
//!
//! - `glob_matcher`: glob pattern compilation and path matching

pub mod glob_matcher;

pub use glob_matcher::*;
