//! Node in the labeled graph.

use serde::{Deserialize, Deserializer, Serialize};
use super::{attrs, normalize_keys, AttributeMap, Element, ElementKind, Value};

/// A node: nothing but its attributes.
///
/// Two nodes are equal when their attribute maps hold the same key/value
/// pairs. Edges refer to nodes through the `label` attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Node {
    attrs: AttributeMap,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attr(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// The `label` attribute, stringified. Empty if the node has none.
    pub fn label(&self) -> String {
        self.text_of("label")
    }
}

impl Element for Node {
    const KIND: ElementKind = ElementKind::Node;

    fn from_attrs(attrs: AttributeMap) -> Self { Self { attrs: normalize_keys(attrs) } }
    fn attrs(&self) -> &AttributeMap { &self.attrs }
    fn attrs_mut(&mut self) -> &mut AttributeMap { &mut self.attrs }
    fn into_attrs(self) -> AttributeMap { self.attrs }
}

impl From<AttributeMap> for Node {
    fn from(attrs: AttributeMap) -> Self { Self::from_attrs(attrs) }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        AttributeMap::deserialize(deserializer).map(Self::from_attrs)
    }
}

impl<K: AsRef<str>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Node {
    fn from(pairs: [(K, V); N]) -> Self { Self { attrs: attrs(pairs) } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_and_symbolic_keys() {
        let mut n = Node::from([("label", "foo")]);
        assert_eq!(n.label(), "foo");
        assert_eq!(n.get(":label"), Some(&Value::from("foo")));

        n.set(":label", 42);
        assert_eq!(n.label(), "42");
        assert_eq!(n.len(), 1);
    }

    #[test]
    fn test_update_overrides() {
        let mut n = Node::new().with_attr("label", "foo").with_attr("num", 1);
        n.update(&attrs([("num", 2), ("extra", 3)]));
        assert_eq!(n.get("num"), Some(&Value::Int(2)));
        assert_eq!(n.keys().collect::<Vec<_>>(), ["label", "num", "extra"]);
    }

    #[test]
    fn test_symbolic_keys_normalized_on_entry() {
        let mut map = AttributeMap::new();
        map.insert(":label".into(), Value::from("x"));
        assert_eq!(Node::from(map).label(), "x");

        let n: Node = serde_json::from_str(r#"{":label":"y","num":2}"#).unwrap();
        assert_eq!(n.label(), "y");
        assert_eq!(n.keys().collect::<Vec<_>>(), ["label", "num"]);
    }

    #[test]
    fn test_missing_label_is_empty() {
        assert_eq!(Node::new().label(), "");
    }
}
