//! Types for suffix tree construction
//!
//! Nodes are plain indices into arena storage; edges carry index ranges into
//! the shared text instead of copied labels.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Range;

/// Handle of a node in the tree arena
pub type NodeId = usize;

/// The root node, representing the empty string
pub const ROOT: NodeId = 0;

/// Anything that can be stored in the text and used as an edge key.
///
/// Implemented for every `Copy + Eq + Hash + Ord + Debug` type, so both
/// `u8` and `char` texts work out of the box.
pub trait Symbol: Copy + Eq + Hash + Ord + Debug {}

impl<T: Copy + Eq + Hash + Ord + Debug> Symbol for T {}

/// An edge of the tree, labeled by `text[start..end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Start of the label in the text (inclusive)
    pub start: usize,
    /// End of the label (exclusive); `None` for leaf edges, which always
    /// run to the current end of the text
    pub end: Option<usize>,
    /// Destination node
    pub target: NodeId,
}

impl Edge {
    /// Open-ended edge leading to a leaf
    pub fn leaf(start: usize, target: NodeId) -> Self {
        Self {
            start,
            end: None,
            target,
        }
    }

    /// Edge with a fixed label range
    pub fn closed(start: usize, end: usize, target: NodeId) -> Self {
        Self {
            start,
            end: Some(end),
            target,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.end.is_none()
    }

    /// Label range, resolving open ends against the current text length
    #[inline]
    pub fn range(&self, text_len: usize) -> Range<usize> {
        self.start..self.end.unwrap_or(text_len)
    }

    /// Label length, resolving open ends against the current text length
    #[inline]
    pub fn len(&self, text_len: usize) -> usize {
        self.end.unwrap_or(text_len) - self.start
    }
}

/// A location reached by walking a path from the root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position<S> {
    /// Exactly on a node
    Node(NodeId),
    /// Inside an edge: `offset` symbols of the edge keyed by
    /// `(origin, symbol)` have been consumed (`0 < offset < len`)
    Edge {
        origin: NodeId,
        symbol: S,
        offset: usize,
    },
}

/// Where construction currently stands: start at `origin` and follow
/// `text[start..end)`. Explicit (on a node) when `start >= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ActivePoint {
    pub origin: NodeId,
    pub start: usize,
    pub end: usize,
}

impl ActivePoint {
    pub fn new() -> Self {
        Self {
            origin: ROOT,
            start: 0,
            end: 0,
        }
    }

    #[inline]
    pub fn is_explicit(&self) -> bool {
        self.start >= self.end
    }

    /// Number of symbols matched past `origin`
    #[inline]
    pub fn span(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}
