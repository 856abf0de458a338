pub use crate::colouring::Outcome;
pub use crate::error::{GraphError, Result};
pub use crate::graph::{Colour, Edge, Graph, Label, Vertex, VertexId};
pub use crate::grl::GrlRecord;
