//! # graphs: labeled graphs, graph set algebra and text codecs
//!
//! A graph is a list of nodes and a list of edges, each an open attribute
//! map compared by value. Graphs combine with set operators and serialize
//! to GDF (the GUESS/Gephi interchange format) or JSON.
//!
//! ## Design Principles
//!
//! 1. **Value identity**: two nodes (or edges) are the same iff their attributes are
//! 2. **Operators never mutate**: `&a & &b` and friends always build a new `Graph`
//! 3. **Codecs are pure functions**: text → `Graph` and `Graph` → text; file I/O is whole-buffer
//! 4. **Dispatch is explicit**: a `CodecRegistry` maps file extensions to parse/unparse pairs
//!
//! ## Quick Start
//!
//! ```rust
//! use graphs::{gdf, CodecOptions, Edge, Graph, Node};
//!
//! # fn example() -> graphs::Result<()> {
//! let a = Graph::new(
//!     [Node::from([("label", "toto")]), Node::from([("label", "lala")])],
//!     [Edge::between("toto", "lala")],
//! );
//! let b = gdf::parse("nodedef>label VARCHAR\ntoto\n")?;
//!
//! let common = &a & &b;
//! assert_eq!(common.node_count(), 1);
//! assert_eq!(gdf::unparse(&common, &CodecOptions::default()), "nodedef>label VARCHAR\ntoto\nedgedef>");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Codecs
//!
//! | Format | Module | Extensions |
//! |--------|--------|------------|
//! | GDF | `gdf` | `.gdf` |
//! | JSON | `json` | `.json` |
//! | DOT (placeholder) | `dot` | `.dot`, `.gv` |
//! | YAML (fallback writer) | `yaml` | none, `.yml`, `.yaml` |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod graph;
pub mod algebra;
pub mod config;
pub mod gdf;
pub mod json;
pub mod dot;
pub mod yaml;
pub mod codec;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    attrs, AttributeMap, Edge, EdgeArray, Element, ElementArray, ElementKind,
    Node, NodeArray, Value,
};

// ============================================================================
// Re-exports: Graph, algebra, codecs
// ============================================================================

pub use graph::{Graph, NodeRef};
pub use config::{AlgebraOptions, CodecOptions};
pub use codec::{Codec, CodecRegistry, Format, WriteContext};
pub use dot::GraphNamer;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Type error: expected {expected}, got {got}")]
    TypeError { expected: String, got: String },

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("No handler for '{0}' file extension")]
    NoHandler(String),

    #[error("Unsupported: {0}")]
    Unsupported(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
