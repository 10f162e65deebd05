use common::error::Error;
use common::types::{Edge, EdgeId, NodeId};

/// Read-only weighted multigraph in Compressed Sparse Row (CSR) format, indexed both ways.
///
/// Edge ids are the positions of the edges in the input list. Both adjacency
/// directions are stored as CSR blocks of edge ids:
/// - `out_pointers[u]..out_pointers[u+1]` → ids of edges leaving `u` in `out_edge_ids`
/// - `in_pointers[v]..in_pointers[v+1]` → ids of edges entering `v` in `in_edge_ids`
/// - `edge_sources[e]`, `edge_targets[e]`, `edge_weights[e]` → endpoints and weight of edge `e`
///
/// Within a block, edges keep ascending id order, so "the i-th outgoing edge"
/// is stable across rebuilds of the same edge list.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphCSR {
    num_nodes: usize,
    edge_sources: Vec<usize>,
    edge_targets: Vec<usize>,
    edge_weights: Vec<i64>,
    out_pointers: Vec<usize>,
    out_edge_ids: Vec<usize>,
    in_pointers: Vec<usize>,
    in_edge_ids: Vec<usize>,
}

impl GraphCSR {
    /// Creates a CSR graph from a list of edges `(src, dst, weight)`.
    ///
    /// # Errors
    /// Returns `Error::NodeIndexOutOfBounds` if an endpoint is `>= num_nodes`.
    pub fn from_edges(num_nodes: usize, edges: &[Edge]) -> Result<Self, Error> {
        for &(u, v, _) in edges {
            if u >= num_nodes {
                return Err(Error::NodeIndexOutOfBounds(u));
            }
            if v >= num_nodes {
                return Err(Error::NodeIndexOutOfBounds(v));
            }
        }

        let edge_sources: Vec<usize> = edges.iter().map(|&(u, _, _)| u).collect();
        let edge_targets: Vec<usize> = edges.iter().map(|&(_, v, _)| v).collect();
        let edge_weights: Vec<i64> = edges.iter().map(|&(_, _, w)| w).collect();

        let (out_pointers, out_edge_ids) = Self::build_index(num_nodes, &edge_sources);
        let (in_pointers, in_edge_ids) = Self::build_index(num_nodes, &edge_targets);

        Ok(Self {
            num_nodes,
            edge_sources,
            edge_targets,
            edge_weights,
            out_pointers,
            out_edge_ids,
            in_pointers,
            in_edge_ids,
        })
    }

    /// Groups edge ids by `key[e]` with the two-pass counting technique.
    ///
    /// Returns the pointer array (size |V| + 1) and the edge ids ordered by
    /// key, ascending id order inside each group.
    fn build_index(num_nodes: usize, key: &[usize]) -> (Vec<usize>, Vec<usize>) {
        let mut pointers = vec![0; num_nodes + 1];

        for &node in key {
            pointers[node + 1] += 1;
        }

        for i in 1..=num_nodes {
            pointers[i] += pointers[i - 1];
        }

        let mut edge_ids = vec![0; key.len()];
        let mut cursor = pointers.clone();

        for (edge, &node) in key.iter().enumerate() {
            edge_ids[cursor[node]] = edge;
            cursor[node] += 1;
        }

        (pointers, edge_ids)
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn num_edges(&self) -> usize {
        self.edge_weights.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.num_nodes).map(NodeId)
    }

    /// All edges as `(id, source, target, weight)` in id order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, NodeId, NodeId, i64)> + '_ {
        (0..self.num_edges()).map(move |e| {
            (
                EdgeId(e),
                NodeId(self.edge_sources[e]),
                NodeId(self.edge_targets[e]),
                self.edge_weights[e],
            )
        })
    }

    pub fn source(&self, e: EdgeId) -> NodeId {
        NodeId(self.edge_sources[e.0])
    }

    pub fn target(&self, e: EdgeId) -> NodeId {
        NodeId(self.edge_targets[e.0])
    }

    pub fn weight(&self, e: EdgeId) -> i64 {
        self.edge_weights[e.0]
    }

    /// Checked lookup of `(source, target, weight)` for an edge.
    ///
    /// # Errors
    /// Returns `Error::EdgeIndexOutOfBounds` if `e` is not an edge of this graph.
    pub fn edge(&self, e: EdgeId) -> Result<(NodeId, NodeId, i64), Error> {
        if e.0 >= self.num_edges() {
            return Err(Error::EdgeIndexOutOfBounds(e.0));
        }
        Ok((self.source(e), self.target(e), self.weight(e)))
    }

    pub fn out_degree(&self, v: NodeId) -> usize {
        self.out_pointers[v.0 + 1] - self.out_pointers[v.0]
    }

    pub fn in_degree(&self, v: NodeId) -> usize {
        self.in_pointers[v.0 + 1] - self.in_pointers[v.0]
    }

    pub fn ith_out_edge(&self, v: NodeId, i: usize) -> EdgeId {
        assert!(i < self.out_degree(v), "{v} has no outgoing edge #{i}");
        EdgeId(self.out_edge_ids[self.out_pointers[v.0] + i])
    }

    pub fn ith_out_target(&self, v: NodeId, i: usize) -> NodeId {
        self.target(self.ith_out_edge(v, i))
    }

    pub fn ith_out_weight(&self, v: NodeId, i: usize) -> i64 {
        self.weight(self.ith_out_edge(v, i))
    }

    pub fn ith_in_edge(&self, v: NodeId, i: usize) -> EdgeId {
        assert!(i < self.in_degree(v), "{v} has no incoming edge #{i}");
        EdgeId(self.in_edge_ids[self.in_pointers[v.0] + i])
    }

    pub fn ith_in_source(&self, v: NodeId, i: usize) -> NodeId {
        self.source(self.ith_in_edge(v, i))
    }

    pub fn ith_in_weight(&self, v: NodeId, i: usize) -> i64 {
        self.weight(self.ith_in_edge(v, i))
    }

    /// Edges leaving `u` as `(id, target, weight)`.
    pub fn out_edges(&self, u: NodeId) -> impl Iterator<Item = (EdgeId, NodeId, i64)> + '_ {
        let block = &self.out_edge_ids[self.out_pointers[u.0]..self.out_pointers[u.0 + 1]];
        block.iter().map(move |&e| {
            (
                EdgeId(e),
                NodeId(self.edge_targets[e]),
                self.edge_weights[e],
            )
        })
    }

    /// Edges entering `v` as `(id, source, weight)`.
    pub fn in_edges(&self, v: NodeId) -> impl Iterator<Item = (EdgeId, NodeId, i64)> + '_ {
        let block = &self.in_edge_ids[self.in_pointers[v.0]..self.in_pointers[v.0 + 1]];
        block.iter().map(move |&e| {
            (
                EdgeId(e),
                NodeId(self.edge_sources[e]),
                self.edge_weights[e],
            )
        })
    }

    pub fn min_weight(&self) -> Option<i64> {
        self.edge_weights.iter().copied().min()
    }

    pub fn max_weight(&self) -> Option<i64> {
        self.edge_weights.iter().copied().max()
    }

    /// Largest `|w|` over all edges, widened so that `i64::MIN` is representable.
    pub fn max_abs_weight(&self) -> Option<i128> {
        self.edge_weights
            .iter()
            .map(|&w| (w as i128).abs())
            .max()
    }

    /// The edge list this graph was built from, in id order.
    pub fn to_edge_list(&self) -> Vec<Edge> {
        self.edges()
            .map(|(_, u, v, w)| (u.0, v.0, w))
            .collect()
    }
}
