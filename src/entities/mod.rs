//! Entities held by collections.
//!
//! - `file`: normalized source path value object
//! - `component`: file-backed entity with a config map and validated factory

pub mod component;
pub mod file;

pub use component::{Component, ComponentInput, DEFAULT_CWD};
pub use file::File;
