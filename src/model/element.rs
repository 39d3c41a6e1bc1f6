//! Element: the attribute access shared by nodes and edges.

use super::{normalize_key, AttributeMap, Value};

/// Which collection an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Node,
    Edge,
}

impl ElementKind {
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Node => "node",
            ElementKind::Edge => "edge",
        }
    }
}

/// A node or an edge: an open attribute map with value identity.
///
/// Keys passed to the provided accessors are normalized with
/// [`normalize_key`], so `":label"` and `"label"` are interchangeable.
pub trait Element: Clone + PartialEq + std::fmt::Debug {
    const KIND: ElementKind;

    fn from_attrs(attrs: AttributeMap) -> Self;
    fn attrs(&self) -> &AttributeMap;
    fn attrs_mut(&mut self) -> &mut AttributeMap;

    fn into_attrs(self) -> AttributeMap;

    fn get(&self, key: &str) -> Option<&Value> {
        self.attrs().get(normalize_key(key))
    }

    /// Set an attribute, returning the previous value.
    fn set(&mut self, key: &str, value: impl Into<Value>) -> Option<Value> {
        self.attrs_mut().insert(normalize_key(key).to_owned(), value.into())
    }

    /// Remove an attribute, keeping the order of the remaining keys.
    fn remove(&mut self, key: &str) -> Option<Value> {
        self.attrs_mut().shift_remove(normalize_key(key))
    }

    fn contains_key(&self, key: &str) -> bool {
        self.attrs().contains_key(normalize_key(key))
    }

    fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.attrs().keys()
    }

    fn len(&self) -> usize {
        self.attrs().len()
    }

    fn is_empty(&self) -> bool {
        self.attrs().is_empty()
    }

    /// Merge `other` into this element; keys in `other` win.
    fn update(&mut self, other: &AttributeMap) {
        let attrs = self.attrs_mut();
        for (k, v) in other {
            attrs.insert(normalize_key(k).to_owned(), v.clone());
        }
    }

    /// Stringified value of `key`, empty when absent.
    fn text_of(&self, key: &str) -> String {
        self.get(key).map(ToString::to_string).unwrap_or_default()
    }
}
