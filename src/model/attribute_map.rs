//! AttributeMap: the key-value store on nodes, edges and graphs.

use indexmap::IndexMap;
use super::Value;

/// A map of attribute names to values.
///
/// Insertion-ordered: the GDF writer derives its column order from the first
/// element's keys. Equality ignores order.
pub type AttributeMap = IndexMap<String, Value>;

/// Canonical form of an attribute key.
///
/// `":label"` and `"label"` name the same attribute; one leading colon is
/// dropped. Every keyed accessor goes through this.
pub fn normalize_key(key: &str) -> &str {
    key.strip_prefix(':').unwrap_or(key)
}

/// Normalize every key of a map built elsewhere (deserialized, user-supplied).
///
/// When both `":k"` and `"k"` are present, the later one wins.
pub fn normalize_keys(map: AttributeMap) -> AttributeMap {
    if !map.keys().any(|k| k.starts_with(':')) {
        return map;
    }
    map.into_iter()
        .map(|(k, v)| (normalize_key(&k).to_owned(), v))
        .collect()
}

/// Build an AttributeMap from (key, value) pairs, normalizing keys.
pub fn attrs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> AttributeMap
where
    K: AsRef<str>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (normalize_key(k.as_ref()).to_owned(), v.into()))
        .collect()
}
