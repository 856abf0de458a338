use std::sync::atomic::{AtomicUsize, Ordering};

/// A global graph identifier counter. We assume no two live graphs will share
/// an identifier; wrapping would need `usize::MAX` graphs to be created in one
/// process, and the only impact would be a missed foreign-handle check.
static GRAPH_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A unique identifier for a graph instance.  Vertex handles carry the
/// `GraphId` of the graph that created them, which is how a vertex refers
/// back to its owner without keeping the owner alive.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct GraphId(usize);

impl GraphId {
    /// Create a new unique graph identifier.
    pub fn new() -> Self {
        GraphId(GRAPH_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for GraphId {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = GraphId::new();
        let b = GraphId::new();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
