use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::collection::{Collection, Criteria};
use super::tag::{CollectionTag, Tagged};
use crate::entities::{Component, ComponentInput};
use crate::errors::{Error, ErrorKind, Result};
use crate::utils::GlobMatcher;

/// Lookup shapes accepted by [`ComponentCollection::find`].
///
/// A bare string is shorthand for a match on `name`; everything else is
/// handed to the base [`Criteria`].
#[derive(Debug)]
pub enum ComponentCriteria<'a> {
    Name(&'a str),
    Base(Criteria<'a, Component>),
}

impl<'a> From<&'a str> for ComponentCriteria<'a> {
    fn from(name: &'a str) -> Self {
        ComponentCriteria::Name(name)
    }
}

impl<'a> From<&'a String> for ComponentCriteria<'a> {
    fn from(name: &'a String) -> Self {
        ComponentCriteria::Name(name)
    }
}

impl<'a> From<Criteria<'a, Component>> for ComponentCriteria<'a> {
    fn from(criteria: Criteria<'a, Component>) -> Self {
        ComponentCriteria::Base(criteria)
    }
}

impl<K: Into<String>, V: Into<Value>> From<(K, V)> for ComponentCriteria<'_> {
    fn from(pair: (K, V)) -> Self {
        ComponentCriteria::Base(pair.into())
    }
}

impl From<Map<String, Value>> for ComponentCriteria<'_> {
    fn from(fields: Map<String, Value>) -> Self {
        ComponentCriteria::Base(fields.into())
    }
}

impl fmt::Display for ComponentCriteria<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentCriteria::Name(name) => write!(f, "name \"{}\"", name),
            ComponentCriteria::Base(criteria) => fmt::Display::fmt(criteria, f),
        }
    }
}

/// Raw input for [`ComponentCollection::from_input`]: one element or a
/// sequence of them.
#[derive(Debug, Clone)]
pub enum ComponentSource {
    One(ComponentInput),
    Many(Vec<ComponentInput>),
}

impl From<ComponentInput> for ComponentSource {
    fn from(input: ComponentInput) -> Self {
        ComponentSource::One(input)
    }
}

impl From<Component> for ComponentSource {
    fn from(component: Component) -> Self {
        ComponentSource::One(component.into())
    }
}

/// JSON arrays are sequences; any other value is a single element.
impl From<Value> for ComponentSource {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(values) => values.into(),
            other => ComponentSource::One(other.into()),
        }
    }
}

impl From<&str> for ComponentSource {
    fn from(raw: &str) -> Self {
        ComponentSource::One(raw.into())
    }
}

impl From<String> for ComponentSource {
    fn from(raw: String) -> Self {
        ComponentSource::One(Value::String(raw).into())
    }
}

impl From<Vec<ComponentInput>> for ComponentSource {
    fn from(inputs: Vec<ComponentInput>) -> Self {
        ComponentSource::Many(inputs)
    }
}

impl From<Vec<Component>> for ComponentSource {
    fn from(components: Vec<Component>) -> Self {
        ComponentSource::Many(components.into_iter().map(ComponentInput::from).collect())
    }
}

impl From<Vec<Value>> for ComponentSource {
    fn from(values: Vec<Value>) -> Self {
        ComponentSource::Many(values.into_iter().map(ComponentInput::from).collect())
    }
}

impl From<ComponentCollection> for ComponentSource {
    fn from(collection: ComponentCollection) -> Self {
        collection.into_vec().into()
    }
}

/// A [`Collection`] of [`Component`]s with name lookups, source-path globbing
/// and JSON projection.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentCollection {
    inner: Collection<Component>,
}

impl Default for ComponentCollection {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ComponentCollection {
    /// Wrap components that are already valid.
    pub fn new(components: Vec<Component>) -> Self {
        Self {
            inner: Collection::with_tag(CollectionTag::ComponentCollection, components),
        }
    }

    /// Validate every element of `input` and collect the results.
    ///
    /// Either every element becomes a [`Component`] or the first
    /// `properties-invalid` error is returned and nothing is built.
    ///
    /// ```
    /// use corral::collections::ComponentCollection;
    /// use serde_json::json;
    ///
    /// let single = ComponentCollection::from_input(json!({ "src": "/mice/mickey" })).unwrap();
    /// assert_eq!(single.count(), 1);
    ///
    /// let err = ComponentCollection::from_input(json!([{ "src": "/mice/jerry" }, { "invalid": "object" }]))
    ///     .unwrap_err();
    /// assert!(err.to_string().starts_with("[properties-invalid]"));
    /// ```
    pub fn from_input(input: impl Into<ComponentSource>) -> Result<Self> {
        let components = match input.into() {
            ComponentSource::One(input) => vec![Component::from_input(input)?],
            ComponentSource::Many(inputs) => inputs
                .into_iter()
                .map(Component::from_input)
                .collect::<Result<Vec<_>>>()?,
        };
        Ok(Self::new(components))
    }

    fn derive(&self, inner: Collection<Component>) -> Self {
        debug_assert_eq!(inner.tag(), CollectionTag::ComponentCollection);
        Self { inner }
    }

    pub fn as_collection(&self) -> &Collection<Component> {
        &self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn count(&self) -> usize {
        self.inner.count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.inner.iter()
    }

    pub fn first(&self) -> Option<&Component> {
        self.inner.first()
    }

    pub fn last(&self) -> Option<&Component> {
        self.inner.last()
    }

    pub fn nth(&self, index: usize) -> Option<&Component> {
        self.inner.nth(index)
    }

    pub fn string_tag(&self) -> &'static str {
        self.inner.string_tag()
    }

    pub fn names(&self) -> Vec<&str> {
        self.inner.iter().map(Component::name).collect()
    }

    /// First component matching `criteria`.
    ///
    /// `find("mickey")` is the same as `find(("name", "mickey"))`; predicates,
    /// key/value pairs and partial-match maps behave as in [`Collection::find`].
    pub fn find<'a>(&self, criteria: impl Into<ComponentCriteria<'a>>) -> Option<&Component> {
        match criteria.into() {
            ComponentCriteria::Name(name) => self.inner.find_where(|c| c.name() == name),
            ComponentCriteria::Base(criteria) => self.inner.find(criteria),
        }
    }

    pub fn find_by(&self, key: &str, value: impl Into<Value>) -> Option<&Component> {
        self.inner.find_by(key, value)
    }

    pub fn find_where(&self, predicate: impl Fn(&Component) -> bool) -> Option<&Component> {
        self.inner.find_where(predicate)
    }

    pub fn try_find<E>(
        &self,
        predicate: impl FnMut(&Component) -> std::result::Result<bool, E>,
    ) -> std::result::Result<Option<&Component>, E> {
        self.inner.try_find(predicate)
    }

    /// Like [`find`](Self::find), but a missing component is a `not-found` error.
    pub fn find_or_fail<'a>(&self, criteria: impl Into<ComponentCriteria<'a>>) -> Result<&Component> {
        let criteria = criteria.into();
        let description = criteria.to_string();
        self.find(criteria).ok_or_else(|| {
            Error::new(
                ErrorKind::NotFound,
                format!("No component matches {}", description),
            )
        })
    }

    pub fn filter(&self, predicate: impl Fn(&Component) -> bool) -> Self {
        self.derive(self.inner.filter(predicate))
    }

    pub fn reject(&self, predicate: impl Fn(&Component) -> bool) -> Self {
        self.derive(self.inner.reject(predicate))
    }

    pub fn sort_by(&self, compare: impl FnMut(&Component, &Component) -> Ordering) -> Self {
        self.derive(self.inner.sort_by(compare))
    }

    /// Components whose source path matches `glob`, in their original order.
    pub fn filter_by_path(&self, glob: &str) -> Result<Self> {
        let matcher = GlobMatcher::new(glob)?;
        Ok(self.filter(|c| matcher.is_match(c.src().path())))
    }

    /// Components whose source path does not match `glob`.
    ///
    /// Always the complement of [`filter_by_path`](Self::filter_by_path)
    /// within this collection.
    pub fn reject_by_path(&self, glob: &str) -> Result<Self> {
        let matcher = GlobMatcher::new(glob)?;
        Ok(self.reject(|c| matcher.is_match(c.src().path())))
    }

    /// Each component's own JSON projection, in collection order.
    pub fn to_json(&self) -> Value {
        Value::Array(self.inner.iter().map(Component::to_json).collect())
    }

    pub fn to_vec(&self) -> Vec<Component> {
        self.inner.to_vec()
    }

    pub fn into_vec(self) -> Vec<Component> {
        self.inner.into_vec()
    }
}

impl Tagged for ComponentCollection {
    fn collection_tag(&self) -> Option<CollectionTag> {
        self.inner.collection_tag()
    }
}

impl<'c> IntoIterator for &'c ComponentCollection {
    type Item = &'c Component;
    type IntoIter = std::slice::Iter<'c, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl IntoIterator for ComponentCollection {
    type Item = Component;
    type IntoIter = std::vec::IntoIter<Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl Serialize for ComponentCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}
