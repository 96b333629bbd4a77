//! Ordered, read-only collections and their query protocol.
//!
//! ## Module Structure
//!
//! - `collection`: generic [`Collection`] with `find` criteria, filtering and sorting
//! - `component_collection`: [`ComponentCollection`] with name shorthand, path globbing
//!   and the validating `from_input` factory
//! - `tag`: collection type tags and the [`is_collection`] predicate

pub mod collection;
pub mod component_collection;
pub mod tag;

pub use collection::{Collection, Criteria, Item};
pub use component_collection::{ComponentCollection, ComponentCriteria, ComponentSource};
pub use tag::{CollectionTag, Tagged, is_collection};
