use std::fmt;

use serde_json::{Map, Value};

/// Discriminant stored in every collection at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionTag {
    Collection,
    ComponentCollection,
}

impl CollectionTag {
    /// Readable type name used for introspection.
    pub fn as_str(self) -> &'static str {
        match self {
            CollectionTag::Collection => "Collection",
            CollectionTag::ComponentCollection => "ComponentCollection",
        }
    }
}

impl fmt::Display for CollectionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values that can be asked whether they are a collection.
///
/// Only collection types override the default.
pub trait Tagged {
    fn collection_tag(&self) -> Option<CollectionTag> {
        None
    }
}

/// True iff `value` was built as a [`Collection`](super::Collection) or one
/// of its specializations.
pub fn is_collection<V: Tagged + ?Sized>(value: &V) -> bool {
    value.collection_tag().is_some()
}

impl<T> Tagged for Vec<T> {}
impl<T> Tagged for [T] {}
impl Tagged for Value {}
impl Tagged for Map<String, Value> {}
impl Tagged for str {}
impl Tagged for String {}
