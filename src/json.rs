//! JSON codec: `{"nodes":[...],"edges":[...]}`, one flat object per element.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::Graph;
use crate::model::{Edge, EdgeArray, Node, NodeArray};
use crate::Result;

/// Wire shape shared by the JSON codec and the YAML fallback writer.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct GraphDoc {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphDoc {
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            nodes: graph.nodes.as_slice().to_vec(),
            edges: graph.edges.as_slice().to_vec(),
        }
    }

    pub fn into_graph(self) -> Graph {
        Graph::from_arrays(NodeArray::from(self.nodes), EdgeArray::from(self.edges))
    }
}

/// Parse JSON text into a new graph. Empty input is an empty graph.
pub fn parse(content: &str) -> Result<Graph> {
    if content.trim().is_empty() {
        return Ok(Graph::empty());
    }
    let doc: GraphDoc = serde_json::from_str(content)?;
    debug!(nodes = doc.nodes.len(), edges = doc.edges.len(), "parsed JSON graph");
    Ok(doc.into_graph())
}

/// Compact JSON text of a graph.
pub fn unparse(graph: &Graph) -> Result<String> {
    Ok(serde_json::to_string(&GraphDoc::from_graph(graph))?)
}

pub fn load(path: impl AsRef<Path>) -> Result<Graph> {
    parse(&std::fs::read_to_string(path)?)
}

pub fn write(graph: &Graph, path: impl AsRef<Path>) -> Result<()> {
    let text = unparse(graph)?;
    std::fs::write(path, text)?;
    Ok(())
}

impl Graph {
    /// JSON text of this graph.
    pub fn to_json(&self) -> Result<String> {
        unparse(self)
    }
}
