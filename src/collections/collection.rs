use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::tag::{CollectionTag, Tagged};

/// Capability an item needs for key/value and partial-match lookups.
pub trait Item {
    /// Value of the named property, if the item has one.
    fn property(&self, key: &str) -> Option<Value>;
}

impl Item for Value {
    fn property(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

/// The shapes accepted by [`Collection::find`].
pub enum Criteria<'a, T> {
    /// First item for which the predicate returns true.
    Predicate(Box<dyn Fn(&T) -> bool + 'a>),
    /// First item whose property `key` equals the value.
    Field(String, Value),
    /// First item matching every key/value pair. An empty map matches any item.
    Match(Map<String, Value>),
}

impl<'a, T> Criteria<'a, T> {
    pub fn predicate(f: impl Fn(&T) -> bool + 'a) -> Self {
        Criteria::Predicate(Box::new(f))
    }

    pub fn field(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Criteria::Field(key.into(), value.into())
    }
}

impl<T: Item> Criteria<'_, T> {
    pub fn matches(&self, item: &T) -> bool {
        match self {
            Criteria::Predicate(f) => f(item),
            Criteria::Field(key, value) => item.property(key).as_ref() == Some(value),
            Criteria::Match(fields) => fields
                .iter()
                .all(|(key, value)| item.property(key).as_ref() == Some(value)),
        }
    }
}

impl<T, K: Into<String>, V: Into<Value>> From<(K, V)> for Criteria<'_, T> {
    fn from((key, value): (K, V)) -> Self {
        Criteria::field(key, value)
    }
}

impl<T> From<Map<String, Value>> for Criteria<'_, T> {
    fn from(fields: Map<String, Value>) -> Self {
        Criteria::Match(fields)
    }
}

impl<T> fmt::Debug for Criteria<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criteria::Predicate(_) => f.write_str("Predicate(..)"),
            Criteria::Field(key, value) => f.debug_tuple("Field").field(key).field(value).finish(),
            Criteria::Match(fields) => f.debug_tuple("Match").field(fields).finish(),
        }
    }
}

/// Readable form used in messages: `key=value` pairs joined by `, `.
impl<T> fmt::Display for Criteria<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criteria::Predicate(_) => f.write_str("predicate"),
            Criteria::Field(key, value) => write!(f, "{}={}", key, value),
            Criteria::Match(fields) => {
                let pairs: Vec<String> = fields
                    .iter()
                    .map(|(key, value)| format!("{}={}", key, value))
                    .collect();
                f.write_str(&pairs.join(", "))
            }
        }
    }
}

/// An ordered, read-only snapshot of items.
///
/// Items are kept in insertion order and never deduplicated. There is no way
/// to add or remove items after construction; every query that narrows or
/// reorders returns a new collection carrying the same tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    tag: CollectionTag,
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Collection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self::with_tag(CollectionTag::Collection, items)
    }

    pub(crate) fn with_tag(tag: CollectionTag, items: Vec<T>) -> Self {
        Self { tag, items }
    }

    fn derive(&self, items: Vec<T>) -> Self {
        Self::with_tag(self.tag, items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn nth(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn tag(&self) -> CollectionTag {
        self.tag
    }

    pub fn string_tag(&self) -> &'static str {
        self.tag.as_str()
    }

    pub fn find_where(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|item| predicate(item))
    }

    /// Like [`find_where`](Self::find_where) with a fallible predicate.
    ///
    /// The first error stops the scan and is returned as-is.
    pub fn try_find<E>(
        &self,
        mut predicate: impl FnMut(&T) -> Result<bool, E>,
    ) -> Result<Option<&T>, E> {
        for item in &self.items {
            if predicate(item)? {
                return Ok(Some(item));
            }
        }
        Ok(None)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> Collection<T> {
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Self {
        self.derive(
            self.items
                .iter()
                .filter(|item| predicate(item))
                .cloned()
                .collect(),
        )
    }

    pub fn reject(&self, predicate: impl Fn(&T) -> bool) -> Self {
        self.filter(|item| !predicate(item))
    }

    /// Stable sort into a new collection.
    pub fn sort_by(&self, compare: impl FnMut(&T, &T) -> Ordering) -> Self {
        let mut items = self.items.clone();
        items.sort_by(compare);
        self.derive(items)
    }

    /// Stable sort with a fallible comparator.
    ///
    /// The first comparator error is returned and no collection is built.
    pub fn try_sort_by<E>(
        &self,
        mut compare: impl FnMut(&T, &T) -> Result<Ordering, E>,
    ) -> Result<Self, E> {
        let items = try_merge_sort(self.items.clone(), &mut compare)?;
        Ok(self.derive(items))
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

/// Top-down merge sort that stops at the first comparator error.
///
/// Ties keep the left element first, so the sort is stable.
fn try_merge_sort<T, E, F>(mut items: Vec<T>, compare: &mut F) -> Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    if items.len() <= 1 {
        return Ok(items);
    }

    let right = items.split_off(items.len() / 2);
    let left = try_merge_sort(items, compare)?;
    let right = try_merge_sort(right, compare)?;

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l)? == Ordering::Less,
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    Ok(merged)
}

impl<T: Item> Collection<T> {
    /// First item matching `criteria`, in insertion order.
    pub fn find<'a>(&self, criteria: impl Into<Criteria<'a, T>>) -> Option<&T>
    where
        T: 'a,
    {
        let criteria = criteria.into();
        self.items.iter().find(|item| criteria.matches(item))
    }

    /// First item whose property `key` equals `value`.
    pub fn find_by(&self, key: &str, value: impl Into<Value>) -> Option<&T> {
        self.find(Criteria::field(key, value))
    }
}

impl<T> Tagged for Collection<T> {
    fn collection_tag(&self) -> Option<CollectionTag> {
        Some(self.tag)
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'c, T> IntoIterator for &'c Collection<T> {
    type Item = &'c T;
    type IntoIter = std::slice::Iter<'c, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: Serialize> Serialize for Collection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}
