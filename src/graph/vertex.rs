use std::{collections::BTreeSet, fmt};

use derivative::Derivative;

use crate::graph_id::GraphId;

/// A handle to a vertex: the owning graph's [`GraphId`] plus the vertex's
/// index.  Handles are plain values and never keep the graph alive.  Within
/// one graph, handles order by index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    graph: GraphId,
    index: usize,
}

impl VertexId {
    pub(crate) fn new(graph: GraphId, index: usize) -> Self {
        Self { graph, index }
    }

    /// The vertex's position in its graph's vertex sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The graph this handle belongs to.
    pub fn graph(&self) -> GraphId {
        self.graph
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.index)
    }
}

/// Display label of a vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    Int(i64),
    Str(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Int(n) => write!(f, "{}", n),
            Label::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Label {
    fn from(n: i64) -> Self {
        Label::Int(n)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::Str(s.to_string())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label::Str(s)
    }
}

/// Colour state of a vertex.
///
/// `0` is uncoloured, `1..=3` are the colour classes used by
/// [`crate::colouring`], and `4` marks a conflict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Colour(u32);

impl Colour {
    pub const UNCOLOURED: Colour = Colour(0);
    pub const CONFLICT: Colour = Colour(4);

    pub const fn new(value: u32) -> Self {
        Colour(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns `None` for an uncoloured vertex.
    pub fn assigned(self) -> Option<Colour> {
        (self != Self::UNCOLOURED).then_some(self)
    }

    /// True for the three colour classes `1..=3`.
    pub fn is_class(self) -> bool {
        (1..=3).contains(&self.0)
    }

    pub fn is_conflict(self) -> bool {
        self == Self::CONFLICT
    }
}

impl From<u32> for Colour {
    fn from(value: u32) -> Self {
        Colour(value)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn format_neighbours(neighbours: &BTreeSet<VertexId>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set()
        .entries(neighbours.iter().map(VertexId::index))
        .finish()
}

/// A vertex owned by a [`Graph`](super::Graph).
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Vertex {
    id: VertexId,
    label: Label,
    colour: Colour,
    #[derivative(Debug(format_with = "format_neighbours"))]
    neighbours: BTreeSet<VertexId>,
}

impl Vertex {
    pub(crate) fn new(id: VertexId) -> Self {
        Self {
            id,
            label: Label::Int(id.index as i64),
            colour: Colour::UNCOLOURED,
            neighbours: BTreeSet::new(),
        }
    }

    /// Copies this vertex into the graph identified by `graph`, rewriting
    /// every handle it holds.
    pub(crate) fn rehome(&self, graph: GraphId) -> Self {
        Self {
            id: VertexId::new(graph, self.id.index),
            label: self.label.clone(),
            colour: self.colour,
            neighbours: self
                .neighbours
                .iter()
                .map(|n| VertexId::new(graph, n.index))
                .collect(),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn index(&self) -> usize {
        self.id.index
    }

    /// The graph that owns this vertex.
    pub fn graph(&self) -> GraphId {
        self.id.graph
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// Gets an iterator over the neighbours of this vertex.  Each neighbour
    /// appears once; callers must not rely on the order.
    pub fn neighbours(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.neighbours.iter().copied()
    }

    /// Number of distinct neighbours.  A self-loop counts once.
    pub fn degree(&self) -> usize {
        self.neighbours.len()
    }

    pub fn has_neighbour(&self, other: VertexId) -> bool {
        self.neighbours.contains(&other)
    }

    pub(crate) fn add_neighbour(&mut self, other: VertexId) -> bool {
        self.neighbours.insert(other)
    }

    pub(crate) fn set_label(&mut self, label: Label) {
        self.label = label;
    }

    pub(crate) fn set_colour(&mut self, colour: Colour) {
        self.colour = colour;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vertex_is_uncoloured_and_isolated() {
        let v = Vertex::new(VertexId::new(GraphId::new(), 7));
        assert_eq!(v.index(), 7);
        assert_eq!(v.label(), &Label::Int(7));
        assert_eq!(v.colour(), Colour::UNCOLOURED);
        assert_eq!(v.degree(), 0);
    }

    #[test]
    fn test_neighbours_are_deduplicated() {
        let graph = GraphId::new();
        let mut v = Vertex::new(VertexId::new(graph, 0));
        let other = VertexId::new(graph, 1);
        assert!(v.add_neighbour(other));
        assert!(!v.add_neighbour(other));
        assert_eq!(v.neighbours().collect::<Vec<_>>(), vec![other]);
    }

    #[test]
    fn test_colour_assigned() {
        assert_eq!(Colour::UNCOLOURED.assigned(), None);
        assert_eq!(Colour::new(2).assigned(), Some(Colour::new(2)));
        assert!(Colour::new(3).is_class());
        assert!(!Colour::CONFLICT.is_class());
        assert!(Colour::CONFLICT.is_conflict());
    }

    #[test]
    fn test_debug_shows_neighbour_indices() {
        let graph = GraphId::new();
        let mut v = Vertex::new(VertexId::new(graph, 0));
        v.add_neighbour(VertexId::new(graph, 2));
        let text = format!("{:?}", v);
        assert!(text.contains("neighbours: {2}"), "{}", text);
    }

    #[test]
    fn test_rehome_rewrites_handles() {
        let old = GraphId::new();
        let new = GraphId::new();
        let mut v = Vertex::new(VertexId::new(old, 0));
        v.add_neighbour(VertexId::new(old, 1));
        let copy = v.rehome(new);
        assert_eq!(copy.graph(), new);
        assert!(copy.neighbours().all(|n| n.graph() == new));
        assert!(copy.has_neighbour(VertexId::new(new, 1)));
    }
}
