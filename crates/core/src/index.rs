//! Per-node and per-edge working arrays keyed by typed ids.
//!
//! Every solver keeps parallel arrays indexed by node or edge. Keying them by
//! `NodeId` / `EdgeId` instead of `usize` keeps the two index spaces from
//! being mixed up; out-of-range access panics like a `Vec` does.

use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use common::types::{EdgeId, NodeId};

/// An id type usable as a dense array index.
pub trait Idx: Copy {
    fn from_index(index: usize) -> Self;
    fn index(self) -> usize;
}

impl Idx for NodeId {
    fn from_index(index: usize) -> Self {
        NodeId(index)
    }

    fn index(self) -> usize {
        self.0
    }
}

impl Idx for EdgeId {
    fn from_index(index: usize) -> Self {
        EdgeId(index)
    }

    fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexVec<I: Idx, T> {
    items: Vec<T>,
    _marker: PhantomData<fn(I)>,
}

pub type NodeVec<T> = IndexVec<NodeId, T>;
pub type EdgeVec<T> = IndexVec<EdgeId, T>;

impl<I: Idx, T: Clone> IndexVec<I, T> {
    pub fn filled(len: usize, value: T) -> Self {
        Self {
            items: vec![value; len],
            _marker: PhantomData,
        }
    }

    pub fn fill(&mut self, value: T) {
        self.items.fill(value);
    }
}

impl<I: Idx, T> IndexVec<I, T> {
    pub fn from_fn(len: usize, mut f: impl FnMut(I) -> T) -> Self {
        Self {
            items: (0..len).map(|i| f(I::from_index(i))).collect(),
            _marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: I) -> Option<&T> {
        self.items.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.iter_mut()
    }

    pub fn iter_enumerated(&self) -> impl Iterator<Item = (I, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (I::from_index(i), item))
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<I: Idx, T> Index<I> for IndexVec<I, T> {
    type Output = T;

    fn index(&self, id: I) -> &T {
        &self.items[id.index()]
    }
}

impl<I: Idx, T> IndexMut<I> for IndexVec<I, T> {
    fn index_mut(&mut self, id: I) -> &mut T {
        &mut self.items[id.index()]
    }
}

impl<I: Idx, T> FromIterator<T> for IndexVec<I, T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Self {
            items: iter.into_iter().collect(),
            _marker: PhantomData,
        }
    }
}

/// Dense `(k, v)` table of walk costs for `k = 0..rows`, one column per node.
///
/// Stored row-major in one allocation. Access is checked on both axes so a
/// column overflow can never alias into the next row.
#[derive(Debug, Clone, PartialEq)]
pub struct DistTable {
    rows: usize,
    width: usize,
    cells: Vec<Option<i64>>,
}

impl DistTable {
    /// All cells start as `None` (no walk).
    pub fn new(rows: usize, width: usize) -> Self {
        Self {
            rows,
            width,
            cells: vec![None; rows * width],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn offset(&self, k: usize, v: NodeId) -> usize {
        assert!(k < self.rows, "row {k} out of range 0..{}", self.rows);
        assert!(v.0 < self.width, "column {v} out of range 0..{}", self.width);
        k * self.width + v.0
    }

    pub fn get(&self, k: usize, v: NodeId) -> Option<i64> {
        self.cells[self.offset(k, v)]
    }

    pub fn set(&mut self, k: usize, v: NodeId, value: Option<i64>) {
        let offset = self.offset(k, v);
        self.cells[offset] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_vec_indexes_by_node_id() {
        let mut dist: NodeVec<f64> = NodeVec::filled(3, 0.0);
        dist[NodeId(2)] = 4.5;

        assert_eq!(dist[NodeId(2)], 4.5);
        assert_eq!(dist.get(NodeId(3)), None);
        assert_eq!(dist.len(), 3);

        dist.fill(1.0);
        assert!(dist.iter().all(|&d| d == 1.0));
    }

    #[test]
    fn from_fn_passes_typed_ids() {
        let ids: EdgeVec<usize> = EdgeVec::from_fn(4, |e| e.0 * 10);
        let collected: Vec<_> = ids.iter_enumerated().map(|(e, &x)| (e, x)).collect();

        assert_eq!(collected[3], (EdgeId(3), 30));
    }

    #[test]
    #[should_panic]
    fn node_vec_out_of_range_panics() {
        let v: NodeVec<u8> = NodeVec::filled(2, 0);
        let _ = v[NodeId(2)];
    }

    #[test]
    fn dist_table_rows_are_independent() {
        let mut table = DistTable::new(3, 2);
        table.set(1, NodeId(1), Some(7));

        assert_eq!(table.get(1, NodeId(1)), Some(7));
        assert_eq!(table.get(2, NodeId(0)), None);
        assert_eq!(table.rows(), 3);
        assert_eq!(table.width(), 2);
    }

    #[test]
    #[should_panic]
    fn dist_table_rejects_column_overflow() {
        let table = DistTable::new(3, 2);
        // (0, 2) would alias (1, 0) in the flat layout.
        let _ = table.get(0, NodeId(2));
    }
}
