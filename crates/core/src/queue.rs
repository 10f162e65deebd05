use std::collections::VecDeque;

use common::types::NodeId;

/// FIFO of node ids used for topological traversal and reachability sweeps.
#[derive(Debug, Clone, Default)]
pub struct NodeQueue {
    items: VecDeque<NodeId>,
}

impl NodeQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Empties the queue, keeping its allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn put(&mut self, v: NodeId) {
        self.items.push_back(v);
    }

    pub fn get(&mut self) -> Option<NodeId> {
        self.items.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Entry of a [`PhaseQueue`]: a node to relax or the end-of-phase marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseItem {
    Node(NodeId),
    EndPhase,
}

/// FIFO that carries an end-of-phase marker between relaxation rounds.
///
/// The caller puts one `EndPhase` after the seed nodes and re-inserts it each
/// time it is popped while work remains, so everything queued during round
/// `k` is popped in round `k + 1`.
#[derive(Debug, Clone, Default)]
pub struct PhaseQueue {
    items: VecDeque<PhaseItem>,
}

impl PhaseQueue {
    /// Room for every node plus the marker.
    pub fn with_capacity(num_nodes: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(num_nodes + 1),
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn put(&mut self, v: NodeId) {
        self.items.push_back(PhaseItem::Node(v));
    }

    pub fn put_end_phase(&mut self) {
        self.items.push_back(PhaseItem::EndPhase);
    }

    pub fn get(&mut self) -> Option<PhaseItem> {
        self.items.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
