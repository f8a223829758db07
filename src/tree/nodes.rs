//! Node arena holding suffix links
//!
//! A node is nothing but its handle; the only per-node state is the suffix
//! link, a plain back-reference by index.

use super::types::{NodeId, ROOT};

#[derive(Debug, Clone)]
pub struct NodeStore {
    links: Vec<Option<NodeId>>,
}

impl NodeStore {
    /// Store containing only the root
    pub fn new() -> Self {
        Self { links: vec![None] }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut links = Vec::with_capacity(capacity.max(1));
        links.push(None);
        Self { links }
    }

    pub fn reserve(&mut self, additional: usize) {
        self.links.reserve(additional);
    }

    pub fn allocate(&mut self) -> NodeId {
        self.links.push(None);
        self.links.len() - 1
    }

    #[inline]
    pub fn link(&self, node: NodeId) -> Option<NodeId> {
        self.links[node]
    }

    /// Set the suffix link of `node`. Panics if it was already set.
    pub fn set_link(&mut self, node: NodeId, target: NodeId) {
        debug_assert_ne!(node, ROOT, "the root has no suffix link");
        let slot = &mut self.links[node];
        assert!(
            slot.is_none(),
            "suffix link of node {node} already set to {:?}",
            slot
        );
        *slot = Some(target);
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }
}

impl Default for NodeStore {
    fn default() -> Self {
        Self::new()
    }
}
