use std::fmt;

/// Index of a node in a graph (`0..num_nodes`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

/// Index of an edge in a graph (`0..num_edges`), assigned in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<usize> for EdgeId {
    fn from(index: usize) -> Self {
        EdgeId(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Type alias for a single edge list entry: (from, to, weight)
pub type Edge = (usize, usize, i64);

/// Outcome of a minimum mean cycle computation.
///
/// Fields:
/// - `lambda`: the minimum cycle mean (total weight / number of edges).
/// - `iterations`: main-loop iterations the solver needed. For Karp this is
///   the number of dynamic-programming rows, i.e. the node count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanCycle {
    pub lambda: f64,
    pub iterations: usize,
}

impl MeanCycle {
    pub fn new(lambda: f64, iterations: usize) -> Self {
        Self { lambda, iterations }
    }

    /// Absolute difference between two results' lambdas.
    pub fn deviation(&self, other: &MeanCycle) -> f64 {
        (self.lambda - other.lambda).abs()
    }
}
