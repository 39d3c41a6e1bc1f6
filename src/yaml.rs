//! YAML fallback writer, used for paths without a known extension.

use tracing::debug;

use crate::graph::Graph;
use crate::json::GraphDoc;
use crate::Result;

/// YAML document with `nodes` and `edges` lists.
pub fn unparse(graph: &Graph) -> Result<String> {
    Ok(serde_yaml::to_string(&GraphDoc::from_graph(graph))?)
}

/// Read back what [`unparse`] writes. Empty input is an empty graph.
pub fn parse(content: &str) -> Result<Graph> {
    if content.trim().is_empty() {
        return Ok(Graph::empty());
    }
    let doc: GraphDoc = serde_yaml::from_str(content)?;
    debug!(nodes = doc.nodes.len(), edges = doc.edges.len(), "parsed YAML graph");
    Ok(doc.into_graph())
}
