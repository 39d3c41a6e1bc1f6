//! # Graph Model
//!
//! The data types every codec and operator works on: scalar values,
//! attribute maps, nodes, edges and their collections.
//!
//! This module is pure data with no I/O.

pub mod value;
pub mod attribute_map;
pub mod element;
pub mod node;
pub mod edge;
pub mod element_array;

pub use value::Value;
pub use attribute_map::{attrs, normalize_key, normalize_keys, AttributeMap};
pub use element::{Element, ElementKind};
pub use node::Node;
pub use edge::Edge;
pub use element_array::{EdgeArray, ElementArray, NodeArray};
