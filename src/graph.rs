//! Graph: one node collection, one edge collection, graph attributes.

use crate::model::*;
use crate::{Error, Result};

// ============================================================================
// Node references
// ============================================================================

/// Something that designates a node by its label.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    /// A node; its `label` attribute is used (stringified).
    Node(&'a Node),
    /// A label, used as-is.
    Label(&'a str),
    /// A loosely typed value. Only strings designate a node.
    Value(&'a Value),
}

impl NodeRef<'_> {
    pub fn label(&self) -> Result<String> {
        match self {
            NodeRef::Node(n) => Ok(n.label()),
            NodeRef::Label(l) => Ok((*l).to_owned()),
            NodeRef::Value(Value::Str(s)) => Ok(s.clone()),
            NodeRef::Value(v) => Err(Error::TypeError {
                expected: "node or string".into(),
                got: v.type_name().into(),
            }),
        }
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(n: &'a Node) -> Self { NodeRef::Node(n) }
}
impl<'a> From<&'a str> for NodeRef<'a> {
    fn from(l: &'a str) -> Self { NodeRef::Label(l) }
}
impl<'a> From<&'a String> for NodeRef<'a> {
    fn from(l: &'a String) -> Self { NodeRef::Label(l) }
}
impl<'a> From<&'a Value> for NodeRef<'a> {
    fn from(v: &'a Value) -> Self { NodeRef::Value(v) }
}

// ============================================================================
// Graph
// ============================================================================

/// A labeled graph.
///
/// Nodes and edges are compared by value. Graph attributes (author,
/// description, `directed`, ...) are not part of equality. A new graph is
/// directed: its attributes start as `{directed: true}`.
#[derive(Debug, Clone)]
pub struct Graph {
    pub nodes: NodeArray,
    pub edges: EdgeArray,
    pub attrs: AttributeMap,
}

impl Default for Graph {
    fn default() -> Self {
        Self::from_arrays(NodeArray::new(), EdgeArray::new())
    }
}

impl Graph {
    pub fn new<N, E>(
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = E>,
    ) -> Self
    where
        N: Into<Node>,
        E: Into<Edge>,
    {
        Self::from_arrays(
            nodes.into_iter().map(Into::into).collect(),
            edges.into_iter().map(Into::into).collect(),
        )
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_arrays(nodes: NodeArray, edges: EdgeArray) -> Self {
        Self { nodes, edges, attrs: attrs([("directed", true)]) }
    }

    /// Replace the graph attributes.
    pub fn with_attrs(mut self, attrs: AttributeMap) -> Self {
        self.attrs = attrs;
        self
    }

    /// The `directed` graph attribute; absent or `false` means undirected.
    pub fn is_directed(&self) -> bool {
        self.attrs.get("directed").is_some_and(Value::is_truthy)
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.edges.len() }

    // ========================================================================
    // Queries
    // ========================================================================

    /// First node whose stringified `label` is `label`.
    pub fn get_node(&self, label: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.label() == label)
    }

    /// Number of edge ends attached to the node. A self-loop counts twice.
    pub fn degree_of<'a>(&self, node: impl Into<NodeRef<'a>>) -> Result<usize> {
        let label = node.into().label()?;
        Ok(self
            .edges
            .iter()
            .map(|e| usize::from(e.node1() == label) + usize::from(e.node2() == label))
            .sum())
    }

    /// Number of edges whose `node2` is the node.
    pub fn in_degree_of<'a>(&self, node: impl Into<NodeRef<'a>>) -> Result<usize> {
        let label = node.into().label()?;
        Ok(self.edges.iter().filter(|e| e.node2() == label).count())
    }

    /// Number of edges whose `node1` is the node.
    pub fn out_degree_of<'a>(&self, node: impl Into<NodeRef<'a>>) -> Result<usize> {
        let label = node.into().label()?;
        Ok(self.edges.iter().filter(|e| e.node1() == label).count())
    }

    /// Nodes reachable through one edge, in discovery order, without duplicates.
    ///
    /// Edges are followed from `node1` to `node2`; in an undirected graph they
    /// are followed both ways. Endpoints with no matching node are skipped.
    pub fn get_neighbours<'a>(&self, node: impl Into<NodeRef<'a>>) -> Result<Vec<&Node>> {
        let label = node.into().label()?;
        let directed = self.is_directed();
        let mut out: Vec<&Node> = Vec::new();

        for e in &self.edges {
            let (n1, n2) = (e.node1(), e.node2());
            let mut candidates = Vec::with_capacity(2);
            if n1 == label {
                candidates.push(n2.as_str());
            }
            if !directed && n2 == label {
                candidates.push(n1.as_str());
            }
            for c in candidates {
                if let Some(found) = self.get_node(c) {
                    if !out.iter().any(|n| *n == found) {
                        out.push(found);
                    }
                }
            }
        }
        Ok(out)
    }

    // ========================================================================
    // Binary set operators (all return a new Graph)
    // ========================================================================

    /// Nodes (and edges) present in both graphs.
    pub fn and(&self, other: &Graph) -> Graph {
        Graph::new(self.nodes.intersection(&other.nodes), self.edges.intersection(&other.edges))
    }

    /// Nodes (and edges) present in either graph, without duplicates.
    pub fn or(&self, other: &Graph) -> Graph {
        Graph::new(self.nodes.union(&other.nodes), self.edges.union(&other.edges))
    }

    /// Nodes (and edges) present in exactly one graph: `(a - b) + (b - a)`.
    pub fn xor(&self, other: &Graph) -> Graph {
        Graph::new(
            self.nodes.symmetric_difference(&other.nodes),
            self.edges.symmetric_difference(&other.edges),
        )
    }

    /// Both graphs' nodes (and edges), duplicates kept.
    pub fn plus(&self, other: &Graph) -> Graph {
        Graph::new(self.nodes.concat(&other.nodes), self.edges.concat(&other.edges))
    }

    /// This graph without the nodes (and edges) of `other`.
    pub fn minus(&self, other: &Graph) -> Graph {
        Graph::new(self.nodes.difference(&other.nodes), self.edges.difference(&other.edges))
    }

    /// Alias of [`Graph::minus`].
    pub fn not(&self, other: &Graph) -> Graph {
        self.minus(other)
    }
}

/// Same nodes in the same order, and same edges in the same order.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

macro_rules! graph_operator {
    ($op:ident, $method:ident, $inherent:ident) => {
        impl std::ops::$op<&Graph> for &Graph {
            type Output = Graph;
            fn $method(self, other: &Graph) -> Graph { self.$inherent(other) }
        }

        impl std::ops::$op for Graph {
            type Output = Graph;
            fn $method(self, other: Graph) -> Graph { self.$inherent(&other) }
        }
    };
}

graph_operator!(BitAnd, bitand, and);
graph_operator!(BitOr, bitor, or);
graph_operator!(BitXor, bitxor, xor);
graph_operator!(Add, add, plus);
graph_operator!(Sub, sub, minus);

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        Graph::new(
            [
                Node::from([("label", "foo")]),
                Node::from([("label", "bar")]),
                Node::from([("label", "baz")]),
            ],
            [
                Edge::between("foo", "bar"),
                Edge::between("bar", "foo"),
                Edge::between("bar", "baz"),
                Edge::between("baz", "baz"),
            ],
        )
    }

    #[test]
    fn test_new_graph_is_directed() {
        let g = Graph::empty();
        assert!(g.is_directed());
        assert_eq!(g.attrs.get("directed"), Some(&Value::Bool(true)));
        assert!(!g.clone().with_attrs(AttributeMap::new()).is_directed());
    }

    #[test]
    fn test_degrees() {
        let g = sample();
        assert_eq!(g.degree_of("bar").unwrap(), 3);
        assert_eq!(g.in_degree_of("bar").unwrap(), 1);
        assert_eq!(g.out_degree_of("bar").unwrap(), 2);
        // self-loop counts twice
        assert_eq!(g.degree_of("baz").unwrap(), 3);

        let node = g.get_node("foo").unwrap().clone();
        assert_eq!(g.degree_of(&node).unwrap(), 2);
    }

    #[test]
    fn test_degree_rejects_non_string_value() {
        let g = sample();
        let err = g.degree_of(&Value::Int(42)).unwrap_err();
        assert!(matches!(err, Error::TypeError { .. }));
        assert_eq!(g.degree_of(&Value::from("foo")).unwrap(), 2);
    }

    #[test]
    fn test_get_node() {
        let g = sample();
        assert_eq!(g.get_node("bar"), Some(&g.nodes[1]));
        assert!(g.get_node("nope").is_none());
    }

    #[test]
    fn test_neighbours_directed() {
        let g = sample();
        let labels: Vec<String> = g.get_neighbours("bar").unwrap().iter().map(|n| n.label()).collect();
        assert_eq!(labels, ["foo", "baz"]);
        let labels: Vec<String> = g.get_neighbours("baz").unwrap().iter().map(|n| n.label()).collect();
        assert_eq!(labels, ["baz"]);
    }

    #[test]
    fn test_neighbours_undirected() {
        let mut g = sample();
        g.attrs.insert("directed".into(), Value::Bool(false));
        let labels: Vec<String> = g.get_neighbours("baz").unwrap().iter().map(|n| n.label()).collect();
        assert_eq!(labels, ["bar", "baz"]);
    }

    #[test]
    fn test_neighbours_skip_unknown_nodes() {
        let g = Graph::new([Node::from([("label", "a")])], [Edge::between("a", "ghost")]);
        assert!(g.get_neighbours("a").unwrap().is_empty());
    }

    #[test]
    fn test_clone_is_deep() {
        let g = sample();
        let mut c = g.clone();
        assert_eq!(c, g);
        c.nodes.get_mut(0).unwrap().set("label", "changed");
        assert_ne!(c, g);
        assert_eq!(g.nodes[0].label(), "foo");
    }

    #[test]
    fn test_equality_ignores_attrs_but_not_order() {
        let g = sample();
        let other = g.clone().with_attrs(AttributeMap::new());
        assert_eq!(g, other);

        let reversed = Graph::new(g.nodes.iter().rev().cloned(), g.edges.iter().cloned());
        assert_ne!(g, reversed);
    }

    #[test]
    fn test_operators() {
        let a = Graph::new([Node::from([("label", "a")]), Node::from([("label", "b")])], Vec::<Edge>::new());
        let b = Graph::new([Node::from([("label", "b")]), Node::from([("label", "c")])], Vec::<Edge>::new());
        let labels = |g: Graph| g.nodes.iter().map(Node::label).collect::<Vec<_>>();

        assert_eq!(labels(&a & &b), ["b"]);
        assert_eq!(labels(&a | &b), ["a", "b", "c"]);
        assert_eq!(labels(&a ^ &b), ["a", "c"]);
        assert_eq!(labels(&a + &b), ["a", "b", "b", "c"]);
        assert_eq!(labels(&a - &b), ["a"]);
        assert_eq!(labels(a.not(&b)), ["a"]);
        assert_eq!(labels(a.clone() & b.clone()), ["b"]);
    }

    #[test]
    fn test_operators_leave_operands_untouched() {
        let a = sample();
        let b = Graph::empty();
        let before = a.clone();
        let _ = &a - &b;
        let _ = &a ^ &b;
        assert_eq!(a, before);
    }
}
