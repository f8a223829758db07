//! Online suffix tree construction (Ukkonen)
//!
//! After processing the first k symbols of everything ever appended, the
//! tree contains every substring starting within those k symbols. Each
//! symbol is added by extending all suffixes that are not yet implicitly
//! present, walking from the longest such suffix (the active point) to
//! shorter ones via suffix links, and stopping at the first suffix that
//! already continues with the new symbol.
//!
//! Leaf edges are open-ended: their label runs to the current end of the
//! text, so leaves grow with later `extend` calls for free.

use super::edges::EdgeTable;
use super::nodes::NodeStore;
use super::text::TextStore;
use super::types::*;

/// A suffix tree over an append-only sequence of symbols
#[derive(Debug, Clone)]
pub struct SuffixTree<S> {
    pub(crate) text: TextStore<S>,
    pub(crate) edges: EdgeTable<S>,
    pub(crate) nodes: NodeStore,
    active: ActivePoint,
}

impl<S: Symbol> SuffixTree<S> {
    /// Empty tree: only the root, no edges
    pub fn new() -> Self {
        Self {
            text: TextStore::new(),
            edges: EdgeTable::new(),
            nodes: NodeStore::new(),
            active: ActivePoint::new(),
        }
    }

    /// Empty tree with room for `text_len` symbols
    pub fn with_capacity(text_len: usize) -> Self {
        Self {
            text: TextStore::with_capacity(text_len),
            edges: EdgeTable::new(),
            nodes: NodeStore::with_capacity(2 * text_len + 1),
            active: ActivePoint::new(),
        }
    }

    /// Build a tree over `text` in a single batch
    pub fn from_symbols(text: &[S]) -> Self {
        let mut tree = Self::with_capacity(text.len());
        tree.extend(text);
        tree
    }

    /// Append `batch` to the text and add all substrings it introduces.
    ///
    /// An empty batch is a no-op.
    pub fn extend(&mut self, batch: &[S]) {
        if batch.is_empty() {
            return;
        }

        let first = self.text.append(batch);
        // Each symbol adds at most one leaf and one internal node
        self.nodes.reserve(2 * batch.len());

        for index in first..self.text.len() {
            self.extend_symbol(index);
        }
    }

    fn extend_symbol(&mut self, index: usize) {
        let symbol = self.text.at(index);
        // Internal node created in the previous iteration, awaiting its link
        let mut pending: Option<NodeId> = None;

        loop {
            let parent = if self.active.is_explicit() {
                if self.edges.contains(self.active.origin, symbol) {
                    break;
                }
                self.active.origin
            } else {
                match self.split_active_edge(symbol) {
                    Some(node) => node,
                    None => break,
                }
            };

            let leaf = self.nodes.allocate();
            self.edges.insert(parent, symbol, Edge::leaf(index, leaf));

            if let Some(node) = pending.take() {
                self.nodes.set_link(node, parent);
            }
            if parent != self.active.origin {
                pending = Some(parent);
            }

            if self.active.origin == ROOT {
                self.active.start += 1;
            } else {
                self.active.origin = self.follow_link(self.active.origin);
            }
            self.canonicalize();
        }

        if let Some(node) = pending {
            debug_assert!(self.active.is_explicit());
            self.nodes.set_link(node, self.active.origin);
        }

        self.active.end = index + 1;
        self.canonicalize();
    }

    /// Split the edge the active point sits in, unless its next symbol is
    /// already `symbol`. Returns the new internal node.
    fn split_active_edge(&mut self, symbol: S) -> Option<NodeId> {
        let origin = self.active.origin;
        let key = self.text.at(self.active.start);
        let edge = *self
            .edges
            .get(origin, key)
            .expect("canonical active point must lie on an edge");

        let split_at = edge.start + self.active.span();
        let next = self.text.at(split_at);
        if next == symbol {
            return None;
        }

        let middle = self.nodes.allocate();
        self.edges
            .replace(origin, key, Edge::closed(edge.start, split_at, middle));
        self.edges.insert(
            middle,
            next,
            Edge {
                start: split_at,
                end: edge.end,
                target: edge.target,
            },
        );
        Some(middle)
    }

    fn follow_link(&self, node: NodeId) -> NodeId {
        match self.nodes.link(node) {
            Some(target) => target,
            None => panic!("internal node {node} has no suffix link"),
        }
    }

    /// Walk the active point down past every edge it fully spans, so that
    /// `origin` is the deepest node on its path.
    fn canonicalize(&mut self) {
        let text_len = self.text.len();
        while !self.active.is_explicit() {
            let key = self.text.at(self.active.start);
            let edge = self
                .edges
                .get(self.active.origin, key)
                .expect("active point must lie on an edge");
            let len = edge.len(text_len);
            if len > self.active.span() {
                break;
            }
            self.active.start += len;
            self.active.origin = edge.target;
        }
    }

    /// The full text appended so far
    pub fn text(&self) -> &[S] {
        self.text.as_slice()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges as `(origin, first symbol, edge)`, in no particular order
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, S, &Edge)> {
        self.edges.iter()
    }

    pub fn edge(&self, origin: NodeId, symbol: S) -> Option<&Edge> {
        self.edges.get(origin, symbol)
    }

    /// Suffix link of an internal node; `None` for the root and leaves
    pub fn suffix_link(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.link(node)
    }

    pub fn edge_len(&self, edge: &Edge) -> usize {
        edge.len(self.text.len())
    }

    /// Label of `edge` as a view into the text
    pub fn label(&self, edge: &Edge) -> &[S] {
        let range = edge.range(self.text.len());
        self.text.slice(range.start, range.end)
    }
}

impl<S: Symbol> Default for SuffixTree<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixTree<char> {
    /// Build a tree over the characters of `text`
    pub fn from_text(text: &str) -> Self {
        let symbols: Vec<char> = text.chars().collect();
        Self::from_symbols(&symbols)
    }
}
