//! Multi-graph algebra: fold a binary graph operator over N graphs.
//!
//! ```text
//! [g0, g1, g2, ...] ──(same_fields?)──▶ op(op(op(g0, g1), g2), ...)
//! ```
//!
//! Folds run left to right, so element order in the result follows argument
//! order even when membership does not depend on it.

use tracing::debug;

use crate::config::AlgebraOptions;
use crate::graph::Graph;
use crate::model::{Element, ElementArray};

/// Graph whose nodes (and edges) are in every given graph.
///
/// Returns `None` when no graph is given.
pub fn intersection<'a>(
    graphs: impl IntoIterator<Item = &'a Graph>,
    opts: &AlgebraOptions,
) -> Option<Graph> {
    fold("intersection", graphs, opts, Graph::and)
}

/// Graph whose nodes (and edges) are in at least one given graph.
///
/// Returns `None` when no graph is given.
pub fn union<'a>(
    graphs: impl IntoIterator<Item = &'a Graph>,
    opts: &AlgebraOptions,
) -> Option<Graph> {
    fold("union", graphs, opts, Graph::or)
}

/// Left fold of the symmetric difference over every given graph.
///
/// Returns `None` when no graph is given.
pub fn xor<'a>(
    graphs: impl IntoIterator<Item = &'a Graph>,
    opts: &AlgebraOptions,
) -> Option<Graph> {
    fold("xor", graphs, opts, Graph::xor)
}

/// Clones of `graphs` restricted to the attribute keys shared by every
/// graph's first node (and, separately, first edge).
///
/// A graph without nodes contributes no node keys, which empties the shared
/// node key set for everyone (same for edges).
pub fn keep_only_same_fields(graphs: &[&Graph]) -> Vec<Graph> {
    let node_keys = common_keys(graphs.iter().map(|g| &g.nodes));
    let edge_keys = common_keys(graphs.iter().map(|g| &g.edges));
    debug!(?node_keys, ?edge_keys, "restricting operands to shared fields");

    graphs
        .iter()
        .map(|g| {
            let mut g = (*g).clone();
            g.nodes.retain_keys(&node_keys);
            g.edges.retain_keys(&edge_keys);
            g
        })
        .collect()
}

fn common_keys<'a, T: Element + 'a>(
    arrays: impl Iterator<Item = &'a ElementArray<T>>,
) -> Vec<String> {
    let mut common: Option<Vec<String>> = None;
    for array in arrays {
        let keys: Vec<String> = array
            .first()
            .map(|e| e.keys().cloned().collect())
            .unwrap_or_default();
        common = Some(match common {
            None => keys,
            Some(acc) => acc.into_iter().filter(|k| keys.contains(k)).collect(),
        });
    }
    common.unwrap_or_default()
}

fn fold<'a>(
    name: &str,
    graphs: impl IntoIterator<Item = &'a Graph>,
    opts: &AlgebraOptions,
    op: fn(&Graph, &Graph) -> Graph,
) -> Option<Graph> {
    let graphs: Vec<&Graph> = graphs.into_iter().collect();
    if graphs.is_empty() {
        debug!(op = name, "no operand, nothing to fold");
        return None;
    }
    debug!(op = name, operands = graphs.len(), same_fields = opts.same_fields, "folding graphs");

    let normalized;
    let operands: Vec<&Graph> = if opts.same_fields {
        normalized = keep_only_same_fields(&graphs);
        normalized.iter().collect()
    } else {
        graphs
    };

    let (first, rest) = operands.split_first()?;
    Some(rest.iter().fold((*first).clone(), |acc, g| op(&acc, g)))
}
