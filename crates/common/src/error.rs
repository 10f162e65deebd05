use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// The graph has no nodes.
    #[error("Graph has no nodes.")]
    EmptyGraph,

    /// The graph has nodes but no edges, so it contains no cycle.
    #[error("Graph has no edges and therefore no cycle.")]
    NoCycle,

    /// Some node cannot reach, or cannot be reached from, the rest of the graph.
    #[error("Graph is not strongly connected.")]
    NotStronglyConnected,

    /// A finite value the solvers may compute could reach the caller's `plus_infinity` sentinel.
    #[error("Sentinel {sentinel} does not exceed the reachable path cost bound {bound}.")]
    SentinelOverflow { bound: i128, sentinel: i64 },

    /// Indicates an attempt to access a node index that exceeds the graph size (N).
    #[error("Node index {0} is out of bounds.")]
    NodeIndexOutOfBounds(usize),

    /// Indicates an attempt to access an edge index that exceeds the edge count (M).
    #[error("Edge index {0} is out of bounds.")]
    EdgeIndexOutOfBounds(usize),

    /// Indicates a structural inconsistency found during graph processing or validation.
    #[error("Graph structure is invalid or inconsistent.")]
    InvalidGraph,

    /// A tolerance is zero, negative or not finite.
    #[error("Tolerance {name} must be positive and finite, got {value}.")]
    InvalidTolerance { name: &'static str, value: f64 },

    /// The lambda hint is NaN or negative infinity.
    #[error("Lambda hint must be a number above negative infinity, got {0}.")]
    InvalidHint(f64),

    #[error("Unknown algorithm '{0}'. Expected one of: karp, burns, lawler, howard.")]
    UnknownAlgorithm(String),
}
