//! Corral - ordered collections of file-backed components
//!
//! Corral is a CLI tool and library for querying sets of discovered
//! components (a source file plus a config map) by name, by field values or
//! by source-path globs, and for projecting them to JSON.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `collections`: Generic `Collection` and the `ComponentCollection` specialization
//! - `config`: Configuration file loading and parsing
//! - `discovery`: Building a `ComponentCollection` from a directory tree
//! - `entities`: `File` and `Component` value types
//! - `errors`: Structured error kinds shared by the library
//! - `utils`: Shared utility functions

pub mod cli;
pub mod collections;
pub mod config;
pub mod discovery;
pub mod entities;
pub mod errors;
pub mod utils;
