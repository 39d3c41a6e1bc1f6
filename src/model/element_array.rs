//! ElementArray: ordered node/edge collection with a forced-default overlay.

use std::ops::Index;

use super::{normalize_key, AttributeMap, Edge, Element, Node};
use crate::{Error, Result};

/// Nodes of a graph.
pub type NodeArray = ElementArray<Node>;
/// Edges of a graph.
pub type EdgeArray = ElementArray<Edge>;

/// An ordered sequence of elements plus a set of forced values.
///
/// The forced values are *overrides*, not fallbacks: [`set_default`] writes
/// them onto every current element even where a value already exists, and
/// every later [`push`] writes them onto the pushed element too.
///
/// [`set_default`]: ElementArray::set_default
/// [`push`]: ElementArray::push
#[derive(Debug, Clone)]
pub struct ElementArray<T: Element> {
    items: Vec<T>,
    defaults: AttributeMap,
}

impl<T: Element> Default for ElementArray<T> {
    fn default() -> Self {
        Self { items: Vec::new(), defaults: AttributeMap::new() }
    }
}

impl<T: Element> ElementArray<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        Self { items, defaults: AttributeMap::new() }
    }

    /// Merge `values` into the forced values (new keys win), then write the
    /// whole forced set onto every current element.
    pub fn set_default(&mut self, values: AttributeMap) {
        for (k, v) in values {
            self.defaults.insert(normalize_key(&k).to_owned(), v);
        }
        let defaults = &self.defaults;
        for item in &mut self.items {
            item.update(defaults);
        }
    }

    pub fn defaults(&self) -> &AttributeMap {
        &self.defaults
    }

    /// Append an element after writing the forced values onto it.
    pub fn push(&mut self, mut element: T) {
        element.update(&self.defaults);
        self.items.push(element);
    }

    pub fn push_attrs(&mut self, attrs: AttributeMap) {
        self.push(T::from_attrs(attrs));
    }

    /// Append an element given as a loosely typed JSON value.
    ///
    /// Only objects of scalars are accepted. Anything else is a
    /// [`Error::TypeError`] and leaves the collection untouched.
    pub fn try_push(&mut self, value: &serde_json::Value) -> Result<()> {
        if !value.is_object() {
            return Err(Error::TypeError {
                expected: format!("map or {}", T::KIND.name()),
                got: json_type_name(value).into(),
            });
        }
        let attrs: AttributeMap = serde_json::from_value(value.clone()).map_err(|e| {
            Error::TypeError {
                expected: format!("map of scalars for a {}", T::KIND.name()),
                got: e.to_string(),
            }
        })?;
        self.push_attrs(attrs);
        Ok(())
    }

    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
    pub fn get(&self, index: usize) -> Option<&T> { self.items.get(index) }
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> { self.items.get_mut(index) }
    pub fn first(&self) -> Option<&T> { self.items.first() }
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.items.iter() }
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> { self.items.iter_mut() }
    pub fn as_slice(&self) -> &[T] { &self.items }
    pub fn into_vec(self) -> Vec<T> { self.items }

    /// Membership by value equality.
    pub fn contains(&self, element: &T) -> bool {
        self.items.contains(element)
    }

    // ========================================================================
    // Set helpers (value equality, results keep `self`'s order)
    // ========================================================================

    /// Elements of `self` also in `other`, without duplicates.
    pub fn intersection(&self, other: &Self) -> Vec<T> {
        let mut out = Vec::new();
        for item in &self.items {
            if other.contains(item) && !out.contains(item) {
                out.push(item.clone());
            }
        }
        out
    }

    /// Elements of `self` then elements of `other`, without duplicates.
    pub fn union(&self, other: &Self) -> Vec<T> {
        let mut out: Vec<T> = Vec::with_capacity(self.len() + other.len());
        for item in self.items.iter().chain(other.items.iter()) {
            if !out.contains(item) {
                out.push(item.clone());
            }
        }
        out
    }

    /// Elements of `self` absent from `other`. Duplicates within `self` are kept.
    pub fn difference(&self, other: &Self) -> Vec<T> {
        self.items.iter().filter(|item| !other.contains(item)).cloned().collect()
    }

    /// `(self - other)` followed by `(other - self)`.
    pub fn symmetric_difference(&self, other: &Self) -> Vec<T> {
        let mut out = self.difference(other);
        out.extend(other.difference(self));
        out
    }

    /// Elements of `self` followed by elements of `other`, duplicates kept.
    pub fn concat(&self, other: &Self) -> Vec<T> {
        self.items.iter().chain(other.items.iter()).cloned().collect()
    }

    /// Keep only the keys in `keep` on every element.
    pub(crate) fn retain_keys(&mut self, keep: &[String]) {
        for item in &mut self.items {
            item.attrs_mut().retain(|k, _| keep.contains(k));
        }
    }
}

/// Equality is elementwise and order-sensitive; forced values are not compared.
impl<T: Element> PartialEq for ElementArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Element> Index<usize> for ElementArray<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T { &self.items[index] }
}

impl<T: Element> From<Vec<T>> for ElementArray<T> {
    fn from(items: Vec<T>) -> Self { Self::from_vec(items) }
}

impl<T: Element> FromIterator<T> for ElementArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T: Element> IntoIterator for &'a ElementArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}

impl<T: Element> IntoIterator for ElementArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter { self.items.into_iter() }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
