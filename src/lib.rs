//! Undirected graphs with a fixed vertex count, the `.grl` graph-list text
//! format, Graphviz export, and a heuristic 3-colouring propagation.

pub mod colouring;
#[cfg(feature = "dot")]
pub mod dot;
pub mod error;
pub mod graph;
pub mod graph_id;
pub mod graph_test_support;
pub mod grl;
pub mod prelude;
pub mod tracing_support;

mod util;

pub use error::{GraphError, Result};
pub use graph::{Colour, Edge, Graph, Label, Vertex, VertexId};
