use crate::util::sort_pair;

use super::vertex::VertexId;

/// One record of a graph's edge list.  The relation it stands for is
/// undirected; `tail` and `head` only fix the order in which the ends are
/// written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    tail: VertexId,
    head: VertexId,
}

impl Edge {
    pub(crate) fn new(tail: VertexId, head: VertexId) -> Self {
        Self { tail, head }
    }

    pub fn tail(&self) -> VertexId {
        self.tail
    }

    pub fn head(&self) -> VertexId {
        self.head
    }

    /// Gets both ends of the edge as a tuple (tail, head).
    pub fn ends(&self) -> (VertexId, VertexId) {
        (self.tail, self.head)
    }

    /// Both end indices, smallest first.  Two records describe the same
    /// undirected edge exactly when their keys are equal.
    pub fn undirected_key(&self) -> (usize, usize) {
        sort_pair(self.tail.index(), self.head.index())
    }

    pub fn is_self_loop(&self) -> bool {
        self.tail == self.head
    }
}
