//! DOT (Graphviz) placeholder: writes an empty graph block, reads nothing.

use crate::graph::Graph;
use crate::{Error, Result};

/// Generates default graph names: `graph1`, `graph2`, ...
///
/// Passed explicitly to whoever needs a fresh name, so two writers never
/// share a counter by accident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNamer {
    prefix: String,
    cursor: u64,
}

impl Default for GraphNamer {
    fn default() -> Self {
        Self::new("graph")
    }
}

impl GraphNamer {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), cursor: 0 }
    }

    pub fn next_name(&mut self) -> String {
        self.cursor += 1;
        format!("{}{}", self.prefix, self.cursor)
    }
}

/// `digraph NAME{\n}\n`, or `graph NAME{\n}\n` for an undirected graph.
///
/// NAME is the graph's `name` attribute, or a fresh name from `namer`.
pub fn unparse(graph: &Graph, namer: &mut GraphNamer) -> String {
    let name = match graph.attrs.get("name") {
        Some(name) => name.to_string(),
        None => namer.next_name(),
    };
    let keyword = if graph.is_directed() { "digraph" } else { "graph" };
    format!("{keyword} {name}{{\n}}\n")
}

/// Only empty input can be read.
pub fn parse(content: &str) -> Result<Graph> {
    if content.trim().is_empty() {
        return Ok(Graph::empty());
    }
    Err(Error::Unsupported("reading DOT content".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AttributeMap, Value};

    #[test]
    fn test_default_names_increment() {
        let mut namer = GraphNamer::default();
        let g = Graph::empty();
        assert_eq!(unparse(&g, &mut namer), "digraph graph1{\n}\n");
        assert_eq!(unparse(&g, &mut namer), "digraph graph2{\n}\n");

        let mut other = GraphNamer::new("g");
        assert_eq!(other.next_name(), "g1");
    }

    #[test]
    fn test_named_undirected() {
        let mut attrs = AttributeMap::new();
        attrs.insert("name".into(), Value::from("social"));
        let g = Graph::empty().with_attrs(attrs);
        let mut namer = GraphNamer::default();
        assert_eq!(unparse(&g, &mut namer), "graph social{\n}\n");
        assert_eq!(namer.next_name(), "graph1");
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse("").unwrap(), Graph::empty());
        assert!(matches!(parse("digraph g {}"), Err(Error::Unsupported(_))));
    }
}
