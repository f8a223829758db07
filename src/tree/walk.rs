//! Path lookups from the root

use super::builder::SuffixTree;
use super::types::{NodeId, Position, ROOT, Symbol};
use crate::error::TreeError;

impl<S: Symbol> SuffixTree<S> {
    /// Follow `path` from the root, crossing into edge interiors as needed.
    ///
    /// Fails with [`TreeError::NoSuchPath`] at the first symbol that has no
    /// continuation, i.e. when `path` is not a substring of the text.
    pub fn walk(&self, path: &[S]) -> Result<Position<S>, TreeError> {
        let text_len = self.text.len();
        let mut node = ROOT;
        let mut depth = 0;

        while depth < path.len() {
            let symbol = path[depth];
            let edge = self
                .edges
                .get(node, symbol)
                .ok_or(TreeError::NoSuchPath { depth })?;
            let label = self.label(edge);

            let remaining = &path[depth..];
            let shared = label
                .iter()
                .zip(remaining)
                .take_while(|(a, b)| a == b)
                .count();

            if shared == label.len() {
                depth += shared;
                node = edge.target;
                continue;
            }
            if shared == remaining.len() {
                return Ok(Position::Edge {
                    origin: node,
                    symbol,
                    offset: shared,
                });
            }
            debug_assert!(shared < edge.len(text_len));
            return Err(TreeError::NoSuchPath {
                depth: depth + shared,
            });
        }

        Ok(Position::Node(node))
    }

    /// Whether `path` occurs in the text
    pub fn contains(&self, path: &[S]) -> bool {
        self.walk(path).is_ok()
    }

    /// Debugging walk that only crosses single-symbol edges.
    ///
    /// Every step must land exactly on a node; an edge with a longer label
    /// is reported as [`TreeError::MultiSymbolEdge`] rather than skipped.
    /// Use [`walk`](Self::walk) for general lookups.
    pub fn follow(&self, path: &[S]) -> Result<NodeId, TreeError> {
        let mut node = ROOT;
        for (depth, &symbol) in path.iter().enumerate() {
            let edge = self
                .edges
                .get(node, symbol)
                .ok_or(TreeError::NoSuchPath { depth })?;
            let len = self.edge_len(edge);
            if len != 1 {
                return Err(TreeError::MultiSymbolEdge { depth, len });
            }
            node = edge.target;
        }
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_empty_path_is_root() {
        let tree = SuffixTree::from_symbols(b"abc");
        assert_eq!(tree.walk(b""), Ok(Position::Node(ROOT)));
    }

    #[test]
    fn test_walk_into_edge() {
        let tree = SuffixTree::from_symbols(b"abc");
        assert_eq!(
            tree.walk(b"ab"),
            Ok(Position::Edge {
                origin: ROOT,
                symbol: b'a',
                offset: 2
            })
        );
    }

    #[test]
    fn test_walk_across_nodes() {
        let tree = SuffixTree::from_symbols(b"abcabxabcd$");
        let Ok(Position::Node(node)) = tree.walk(b"abc") else {
            panic!("\"abc\" should end on a node");
        };
        assert_eq!(tree.alphabet(node), vec![b'a', b'd']);
        assert!(tree.contains(b"abcd$"));
        assert!(tree.contains(b"bxa"));
    }

    #[test]
    fn test_walk_rejects_non_substring() {
        let tree = SuffixTree::from_symbols(b"banana$");
        assert_eq!(tree.walk(b"nab"), Err(TreeError::NoSuchPath { depth: 2 }));
        assert_eq!(tree.walk(b"x"), Err(TreeError::NoSuchPath { depth: 0 }));
        assert!(!tree.contains(b"banana$a"));
    }

    #[test]
    fn test_follow_single_symbol_edges() {
        let tree = SuffixTree::from_symbols(b"aaa$");
        let node = tree.follow(b"aa").unwrap();
        assert_eq!(tree.alphabet(node), vec![b'$', b'a']);
    }

    #[test]
    fn test_follow_rejects_long_edges() {
        let tree = SuffixTree::from_symbols(b"aaa$");
        // The third 'a' edge is "a$"
        assert_eq!(
            tree.follow(b"aaa"),
            Err(TreeError::MultiSymbolEdge { depth: 2, len: 2 })
        );
        assert_eq!(tree.follow(b"b"), Err(TreeError::NoSuchPath { depth: 0 }));
    }
}
