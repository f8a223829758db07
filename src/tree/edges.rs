//! Edge table keyed by `(origin, first symbol)`
//!
//! The key guarantees at most one outgoing edge per first symbol, which is
//! what makes child lookup O(1).

use super::types::{Edge, NodeId, Symbol};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct EdgeTable<S> {
    edges: FxHashMap<(NodeId, S), Edge>,
}

impl<S: Symbol> EdgeTable<S> {
    pub fn new() -> Self {
        Self {
            edges: FxHashMap::default(),
        }
    }

    #[inline]
    pub fn get(&self, origin: NodeId, symbol: S) -> Option<&Edge> {
        self.edges.get(&(origin, symbol))
    }

    #[inline]
    pub fn contains(&self, origin: NodeId, symbol: S) -> bool {
        self.edges.contains_key(&(origin, symbol))
    }

    /// Add a new edge. Panics if `origin` already has an edge for `symbol`.
    pub fn insert(&mut self, origin: NodeId, symbol: S, edge: Edge) {
        let previous = self.edges.insert((origin, symbol), edge);
        assert!(
            previous.is_none(),
            "duplicate edge from node {origin} on {symbol:?}"
        );
    }

    /// Overwrite an existing edge (edge splitting). Panics if absent.
    pub fn replace(&mut self, origin: NodeId, symbol: S, edge: Edge) {
        match self.edges.get_mut(&(origin, symbol)) {
            Some(slot) => *slot = edge,
            None => panic!("no edge from node {origin} on {symbol:?} to replace"),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, S, &Edge)> {
        self.edges
            .iter()
            .map(|(&(origin, symbol), edge)| (origin, symbol, edge))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
