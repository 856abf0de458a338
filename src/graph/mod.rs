//! The graph model: a fixed set of vertices, an append-only edge list, and
//! per-vertex colour state.

mod edge;
mod vertex;

use std::ops::Index;

use derivative::Derivative;

pub use self::edge::Edge;
pub use self::vertex::{Colour, Label, Vertex, VertexId};
use crate::{
    error::{GraphError, Result},
    graph_id::GraphId,
};

/// An undirected graph with a vertex count fixed at construction.
///
/// Vertices are indexed `0..n` and iterate in index order.  Edges are kept in
/// insertion order and may repeat; the neighbour sets they induce never do.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Graph {
    #[derivative(Debug = "ignore")]
    id: GraphId,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph with `n` uncoloured, unconnected vertices.
    pub fn new(n: usize) -> Self {
        let id = GraphId::new();
        Self {
            id,
            vertices: (0..n).map(|i| Vertex::new(VertexId::new(id, i))).collect(),
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    /// Gets the number of vertices, fixed for the graph's lifetime.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Gets the number of edge records, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Gets an iterator over all vertices in index order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.iter()
    }

    /// Gets an iterator over all vertex handles in index order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().map(Vertex::id)
    }

    /// Gets an iterator over the edge list in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Gets the vertex at `index`.
    pub fn vertex(&self, index: usize) -> Result<&Vertex> {
        self.vertices
            .get(index)
            .ok_or_else(|| GraphError::index(index, self.vertex_count()))
    }

    /// Gets the handle of the vertex at `index`.
    pub fn vertex_id(&self, index: usize) -> Result<VertexId> {
        self.vertex(index).map(Vertex::id)
    }

    /// True if `id` names a vertex of this graph.
    pub fn owns(&self, id: VertexId) -> bool {
        self.check_valid_vertex_id(id).is_ok()
    }

    /// Checks if a VertexId is valid in the graph, returning a reason if it
    /// is not.
    pub fn check_valid_vertex_id(&self, id: VertexId) -> std::result::Result<(), &'static str> {
        if id.graph() != self.id {
            Err("VertexId belongs to a different graph")
        } else if id.index() >= self.vertices.len() {
            Err("VertexId index out of range")
        } else {
            Ok(())
        }
    }

    /// Panics if the given VertexId is not valid in the graph.
    pub fn assert_valid_vertex_id(&self, id: VertexId) {
        if let Err(reason) = self.check_valid_vertex_id(id) {
            panic!("Invalid VertexId: {:?}: {}", id, reason);
        }
    }

    /// Connects the vertices at indices `u` and `v`.
    ///
    /// Each becomes a neighbour of the other (once, however often the edge is
    /// added) and one record is appended to the edge list.  The record's tail
    /// is `v` and its head is `u`.  Self-loops are allowed.  On error the
    /// graph is unchanged.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        let head = self.vertex_id(u)?;
        let tail = self.vertex_id(v)?;
        self.vertices[u].add_neighbour(tail);
        self.vertices[v].add_neighbour(head);
        self.edges.push(Edge::new(tail, head));
        Ok(())
    }

    /// True if the vertices at `u` and `v` are neighbours.  Out-of-range
    /// indices are never adjacent.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        match (self.vertex(u), self.vertex_id(v)) {
            (Ok(a), Ok(b)) => a.has_neighbour(b),
            _ => false,
        }
    }

    /// Replaces the label of the vertex at `index`.
    pub fn set_label(&mut self, index: usize, label: impl Into<Label>) -> Result<()> {
        let count = self.vertex_count();
        self.vertices
            .get_mut(index)
            .ok_or_else(|| GraphError::index(index, count))?
            .set_label(label.into());
        Ok(())
    }

    /// Sets the colour of a vertex.  Panics if `id` is not a vertex of this
    /// graph.
    pub fn set_colour(&mut self, id: VertexId, colour: Colour) {
        self.assert_valid_vertex_id(id);
        self.vertices[id.index()].set_colour(colour);
    }

    /// Marks every vertex uncoloured.
    pub fn reset_colours(&mut self) {
        for vertex in &mut self.vertices {
            vertex.set_colour(Colour::UNCOLOURED);
        }
    }

    /// Gets the colours of all vertices in index order.
    pub fn colours(&self) -> Vec<Colour> {
        self.vertices.iter().map(Vertex::colour).collect()
    }
}

impl TryFrom<i64> for Graph {
    type Error = GraphError;

    /// Creates a graph with `n` vertices, rejecting negative counts.
    fn try_from(n: i64) -> Result<Self> {
        usize::try_from(n)
            .map(Graph::new)
            .map_err(|_| GraphError::InvalidSize {
                value: n.to_string(),
            })
    }
}

impl Clone for Graph {
    /// The copy is a distinct graph: it gets its own [`GraphId`] and handles
    /// from one are not valid in the other.
    fn clone(&self) -> Self {
        let id = GraphId::new();
        let rehome = |v: VertexId| VertexId::new(id, v.index());
        Self {
            id,
            vertices: self.vertices.iter().map(|v| v.rehome(id)).collect(),
            edges: self
                .edges
                .iter()
                .map(|e| Edge::new(rehome(e.tail()), rehome(e.head())))
                .collect(),
        }
    }
}

impl Index<VertexId> for Graph {
    type Output = Vertex;

    fn index(&self, id: VertexId) -> &Vertex {
        self.assert_valid_vertex_id(id);
        &self.vertices[id.index()]
    }
}
