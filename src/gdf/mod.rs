//! # GDF codec
//!
//! GDF is the GUESS/Gephi line format: a typed header, then CSV rows.
//!
//! ```text
//! nodedef>label VARCHAR,num INT
//! toto,14
//! lala,5
//! edgedef>node1 VARCHAR,node2 VARCHAR,directed BOOLEAN
//! toto,lala,true
//! ```
//!
//! Parsing assigns each row's cells positionally to the preceding header's
//! fields. Serialization derives the header from the first node (first
//! edge) and its runtime value types.
//!
//! Rows are line-based: values containing a newline are quoted on output
//! but cannot be read back.

pub mod csv;
pub mod schema;

use std::path::Path;

use tracing::{debug, trace};

use crate::config::CodecOptions;
use crate::graph::Graph;
use crate::model::*;
use crate::{Error, Result};
use schema::{parse_field, read_header, type_keyword, FieldDef};

pub const NODEDEF: &str = "nodedef>";
pub const EDGEDEF: &str = "edgedef>";

// ============================================================================
// Parsing
// ============================================================================

/// Parse GDF text into a new graph.
///
/// Blank lines are skipped, except under a header with no fields where each
/// one is an element without attributes. Rows shorter than their header are
/// padded with missing cells; surplus cells are ignored. A row before any
/// header, an unclosed quote or a non-numeric INT/FLOAT cell is an
/// [`Error::Parse`].
pub fn parse(content: &str) -> Result<Graph> {
    let mut nodes = NodeArray::new();
    let mut edges = EdgeArray::new();
    let mut section: Option<(ElementKind, Vec<FieldDef>)> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        if let Some(specs) = line.strip_prefix(NODEDEF) {
            let defs = read_header(specs, ElementKind::Node, line_no)?;
            trace!(line = line_no, fields = defs.len(), "nodedef header");
            section = Some((ElementKind::Node, defs));
            continue;
        }
        if let Some(specs) = line.strip_prefix(EDGEDEF) {
            let defs = read_header(specs, ElementKind::Edge, line_no)?;
            trace!(line = line_no, fields = defs.len(), "edgedef header");
            section = Some((ElementKind::Edge, defs));
            continue;
        }
        let Some((kind, defs)) = &section else {
            if line.is_empty() {
                continue;
            }
            return Err(Error::Parse {
                line: line_no,
                message: format!("Data row before any {NODEDEF} or {EDGEDEF} header"),
            });
        };
        // a header without fields writes each element as a blank row
        if line.is_empty() && !defs.is_empty() {
            continue;
        }
        let attrs = read_row(line, defs, line_no)?;
        match kind {
            ElementKind::Node => nodes.push_attrs(attrs),
            ElementKind::Edge => edges.push_attrs(attrs),
        }
    }

    debug!(nodes = nodes.len(), edges = edges.len(), "parsed GDF");
    Ok(Graph::from_arrays(nodes, edges))
}

fn read_row(line: &str, defs: &[FieldDef], line_no: usize) -> Result<AttributeMap> {
    let cells = csv::split_row(line, line_no)?;
    defs.iter()
        .enumerate()
        .map(|(i, def)| {
            let cell = cells.get(i).and_then(Option::as_deref);
            let value = parse_field(cell, def.kind, def.default.as_ref(), line_no)?;
            Ok((def.name.clone(), value))
        })
        .collect()
}

/// Read a whole GDF file, then parse it.
pub fn load(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading GDF file");
    parse(&std::fs::read_to_string(path)?)
}

// ============================================================================
// Serialization
// ============================================================================

/// Serialize a graph to GDF text.
///
/// An empty graph is exactly `nodedef>`. Otherwise both sections are
/// written, each header built from the first element's keys in order.
/// Every row follows that key order; keys a row lacks are left empty.
pub fn unparse(graph: &Graph, opts: &CodecOptions) -> String {
    let mut out = String::from(NODEDEF);
    if graph.nodes.is_empty() && graph.edges.is_empty() {
        return out;
    }

    write_section(&mut out, graph.nodes.as_slice(), opts);
    if graph.nodes.is_empty() {
        out.push('\n');
    }
    out.push_str(EDGEDEF);
    write_section(&mut out, graph.edges.as_slice(), opts);
    out
}

fn write_section<T: Element>(out: &mut String, elements: &[T], opts: &CodecOptions) {
    let Some(first) = elements.first() else {
        return;
    };

    let keys: Vec<&String> = first.keys().collect();
    let header: Vec<String> = first
        .attrs()
        .iter()
        .map(|(k, v)| format!("{k} {}", type_keyword(v, opts)))
        .collect();
    out.push_str(&header.join(","));
    out.push('\n');

    for element in elements {
        let cells: Vec<Option<String>> = keys
            .iter()
            .map(|k| element.attrs().get(k.as_str()).map(ToString::to_string))
            .collect();
        csv::write_row(out, cells.iter().map(Option::as_deref));
    }
}

/// Serialize, then write the whole buffer to `path`.
pub fn write(graph: &Graph, path: impl AsRef<Path>, opts: &CodecOptions) -> Result<()> {
    let path = path.as_ref();
    let text = unparse(graph, opts);
    debug!(path = %path.display(), bytes = text.len(), "writing GDF file");
    std::fs::write(path, text)?;
    Ok(())
}

impl Graph {
    /// GDF text of this graph.
    pub fn to_gdf(&self, opts: &CodecOptions) -> String {
        unparse(self, opts)
    }
}
