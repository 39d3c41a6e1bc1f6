//! Edge in the labeled graph.

use serde::{Deserialize, Deserializer, Serialize};
use super::{attrs, normalize_keys, AttributeMap, Element, ElementKind, Value};

/// An edge. By convention `node1` and `node2` hold the labels of the nodes
/// it connects, and `directed` optionally overrides the graph's flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Edge {
    attrs: AttributeMap,
}

impl Edge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edge from `node1` to `node2`.
    pub fn between(node1: impl Into<Value>, node2: impl Into<Value>) -> Self {
        Self::new().with_attr("node1", node1).with_attr("node2", node2)
    }

    pub fn with_attr(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn node1(&self) -> String {
        self.text_of("node1")
    }

    pub fn node2(&self) -> String {
        self.text_of("node2")
    }

    pub fn directed(&self) -> Option<bool> {
        self.get("directed").map(Value::is_truthy)
    }

    /// The "other" end of the edge from the given label.
    pub fn other_end(&self, label: &str) -> Option<String> {
        let (a, b) = (self.node1(), self.node2());
        if a == label { Some(b) }
        else if b == label { Some(a) }
        else { None }
    }
}

impl Element for Edge {
    const KIND: ElementKind = ElementKind::Edge;

    fn from_attrs(attrs: AttributeMap) -> Self { Self { attrs: normalize_keys(attrs) } }
    fn attrs(&self) -> &AttributeMap { &self.attrs }
    fn attrs_mut(&mut self) -> &mut AttributeMap { &mut self.attrs }
    fn into_attrs(self) -> AttributeMap { self.attrs }
}

impl From<AttributeMap> for Edge {
    fn from(attrs: AttributeMap) -> Self { Self::from_attrs(attrs) }
}

impl<'de> Deserialize<'de> for Edge {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        AttributeMap::deserialize(deserializer).map(Self::from_attrs)
    }
}

impl<K: AsRef<str>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Edge {
    fn from(pairs: [(K, V); N]) -> Self { Self { attrs: attrs(pairs) } }
}
