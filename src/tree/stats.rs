//! Shape summary of a tree
//!
//! `text_len` counts every appended symbol, including a terminator.

use super::builder::SuffixTree;
use super::types::Symbol;
use serde::{Deserialize, Serialize};

/// Shape summary of a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TreeStats {
    /// Symbols appended so far, terminator included
    pub text_len: u64,
    /// All nodes including the root
    pub node_count: u64,
    /// Root plus every node with outgoing edges
    pub internal_nodes: u64,
    /// Nodes without outgoing edges
    pub leaf_nodes: u64,
    pub edge_count: u64,
}

impl<S: Symbol> SuffixTree<S> {
    pub fn stats(&self) -> TreeStats {
        let leaf_nodes = self.edges.iter().filter(|(_, _, e)| e.is_leaf()).count() as u64;
        let node_count = self.node_count() as u64;
        TreeStats {
            text_len: self.len() as u64,
            node_count,
            internal_nodes: node_count - leaf_nodes,
            leaf_nodes,
            edge_count: self.edge_count() as u64,
        }
    }
}
