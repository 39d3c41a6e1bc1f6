//! Property tests: GDF round-trips and graph set algebra laws.

use graphs::algebra;
use graphs::gdf;
use graphs::{AlgebraOptions, AttributeMap, CodecOptions, Edge, Graph, Node, Value};
use proptest::prelude::*;

// =========================================================================
// Strategies
// =========================================================================

#[derive(Debug, Clone, Copy)]
enum Kind {
    Int,
    Float,
    Bool,
    Str,
}

fn arb_kind() -> impl Strategy<Value = Kind> {
    prop_oneof![Just(Kind::Int), Just(Kind::Float), Just(Kind::Bool), Just(Kind::Str)]
}

/// Values of one column. Strings avoid newlines, which GDF rows cannot hold.
fn arb_value(kind: Kind) -> BoxedStrategy<Value> {
    match kind {
        Kind::Int => any::<i64>().prop_map(Value::Int).boxed(),
        Kind::Float => prop_oneof![
            any::<i32>().prop_map(|i| Value::Float(f64::from(i))),
            (-1.0e9f64..1.0e9).prop_map(Value::Float),
        ]
        .boxed(),
        Kind::Bool => any::<bool>().prop_map(Value::Bool).boxed(),
        Kind::Str => "[a-z ,\"<>]{0,6}".prop_map(Value::Str).boxed(),
    }
}

/// Rows sharing one schema: same keys in the same order, one type per key.
/// The schema may be empty, giving elements without attributes.
fn arb_rows(prefix: &'static str) -> impl Strategy<Value = Vec<AttributeMap>> {
    prop::collection::vec(arb_kind(), 0..4).prop_flat_map(move |kinds| {
        let row: Vec<BoxedStrategy<Value>> = kinds.iter().map(|k| arb_value(*k)).collect();
        prop::collection::vec(row, 0..6).prop_map(move |rows| {
            rows.into_iter()
                .map(|values| {
                    values
                        .into_iter()
                        .enumerate()
                        .map(|(i, v)| (format!("{prefix}{i}"), v))
                        .collect()
                })
                .collect()
        })
    })
}

fn arb_typed_graph() -> impl Strategy<Value = Graph> {
    (arb_rows("n"), arb_rows("e")).prop_map(|(nodes, edges)| {
        Graph::new(
            nodes.into_iter().map(Node::from),
            edges.into_iter().map(Edge::from),
        )
    })
}

/// Small label alphabet so that operands overlap often.
fn arb_graph() -> impl Strategy<Value = Graph> {
    let node = "[a-d]".prop_map(|l| Node::from([("label", l)]));
    let edge = ("[a-d]", "[a-d]").prop_map(|(a, b)| Edge::between(a, b));
    (prop::collection::vec(node, 0..6), prop::collection::vec(edge, 0..6))
        .prop_map(|(nodes, edges)| Graph::new(nodes, edges))
}

/// Same graph with duplicate nodes and edges removed.
fn dedup(g: &Graph) -> Graph {
    g | &Graph::empty()
}

/// Same members, ignoring order and multiplicity.
fn same_members<T: PartialEq>(x: &[T], y: &[T]) -> bool {
    x.iter().all(|e| y.contains(e)) && y.iter().all(|e| x.contains(e))
}

// =========================================================================
// GDF
// =========================================================================

proptest! {
    #[test]
    fn test_gdf_round_trip(g in arb_typed_graph()) {
        let text = gdf::unparse(&g, &CodecOptions::default());
        let back = gdf::parse(&text).unwrap();
        prop_assert_eq!(back, g);
    }

    #[test]
    fn test_gdf_gephi_round_trip(g in arb_typed_graph()) {
        let text = gdf::unparse(&g, &CodecOptions::gephi());
        prop_assert!(!text.contains("BIGINT"));
        prop_assert_eq!(gdf::parse(&text).unwrap(), g);
    }

    #[test]
    fn test_gdf_unparse_is_stable(g in arb_typed_graph()) {
        let opts = CodecOptions::default();
        let once = gdf::unparse(&g, &opts);
        let twice = gdf::unparse(&gdf::parse(&once).unwrap(), &opts);
        prop_assert_eq!(once, twice);
    }
}

// =========================================================================
// Algebra
// =========================================================================

proptest! {
    #[test]
    fn test_xor_is_both_differences(a in arb_graph(), b in arb_graph()) {
        prop_assert_eq!(&a ^ &b, &(&a - &b) + &(&b - &a));
    }

    #[test]
    fn test_idempotence(g in arb_graph()) {
        let g = dedup(&g);
        prop_assert_eq!(&g & &g, g.clone());
        prop_assert_eq!(&g | &g, g.clone());
        prop_assert_eq!(&g ^ &g, Graph::empty());
        prop_assert_eq!(&g - &g, Graph::empty());
    }

    #[test]
    fn test_empty_graph_absorption(g in arb_graph()) {
        let empty = Graph::empty();
        prop_assert_eq!(&g & &empty, empty.clone());
        prop_assert_eq!(&empty & &g, empty.clone());
        prop_assert_eq!(&g - &empty, g.clone());
        prop_assert_eq!(&empty - &g, empty.clone());
        prop_assert_eq!(&g + &empty, g.clone());
        prop_assert_eq!(&empty + &g, g.clone());
        prop_assert_eq!(&empty | &g, dedup(&g));
    }

    #[test]
    fn test_union_intersection_sizes(a in arb_graph(), b in arb_graph()) {
        let (a, b) = (dedup(&a), dedup(&b));
        let both = &a & &b;
        let either = &a | &b;
        let only_one = &a ^ &b;

        prop_assert_eq!(either.node_count() + both.node_count(), a.node_count() + b.node_count());
        prop_assert_eq!(either.edge_count() + both.edge_count(), a.edge_count() + b.edge_count());
        prop_assert_eq!(only_one.node_count(), either.node_count() - both.node_count());
        for n in &both.nodes {
            prop_assert!(a.nodes.contains(n) && b.nodes.contains(n));
        }
    }

    #[test]
    fn test_intersection_plus_xor_is_union(a in arb_graph(), b in arb_graph()) {
        let lhs = &(&a & &b) | &(&a ^ &b);
        let rhs = &a | &b;
        prop_assert!(same_members(lhs.nodes.as_slice(), rhs.nodes.as_slice()));
        prop_assert!(same_members(lhs.edges.as_slice(), rhs.edges.as_slice()));
    }

    #[test]
    fn test_operators_leave_operands_untouched(a in arb_graph(), b in arb_graph()) {
        let (a0, b0) = (a.clone(), b.clone());
        let _ = (&a & &b, &a | &b, &a ^ &b, &a + &b, &a - &b);
        prop_assert_eq!(a, a0);
        prop_assert_eq!(b, b0);
    }

    #[test]
    fn test_folds_match_pairwise(a in arb_graph(), b in arb_graph(), c in arb_graph()) {
        let opts = AlgebraOptions::default();
        prop_assert_eq!(algebra::union([&a, &b, &c], &opts), Some(&(&a | &b) | &c));
        prop_assert_eq!(algebra::intersection([&a, &b, &c], &opts), Some(&(&a & &b) & &c));
        prop_assert_eq!(algebra::xor([&a, &b, &c], &opts), Some(&(&a ^ &b) ^ &c));
        prop_assert_eq!(algebra::union([&a], &opts), Some(a.clone()));
    }
}
