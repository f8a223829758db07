//! Read-only statistics over a built tree
//!
//! Both counters accumulate bottom-up over an explicit stack so that long
//! chains (highly repetitive input) cannot overflow the call stack.

use super::builder::SuffixTree;
use super::types::{NodeId, ROOT, Symbol};
use crate::error::TreeError;

/// Per-node distinct substring counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstringCounts {
    /// Substrings whose path passes through or ends below each node
    pub per_node: Vec<u64>,
    /// Value at the root: all distinct substrings free of the terminator
    pub total: u64,
}

/// Per-node suffix counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixCounts {
    /// Suffixes of the terminated text passing through each node
    pub per_node: Vec<u64>,
    /// Value at the root
    pub total: u64,
}

impl<S: Symbol> SuffixTree<S> {
    /// Sorted first symbols of the edges leaving `node`.
    ///
    /// Recomputed from the edge table on every call.
    pub fn alphabet(&self, node: NodeId) -> Vec<S> {
        let mut symbols: Vec<S> = self
            .edges
            .iter()
            .filter(|&(origin, _, _)| origin == node)
            .map(|(_, symbol, _)| symbol)
            .collect();
        symbols.sort_unstable();
        symbols
    }

    /// Sorted outgoing symbols of every node, indexed by node id
    pub fn alphabets(&self) -> Vec<Vec<S>> {
        let mut choices = vec![Vec::new(); self.nodes.len()];
        for (origin, symbol, _) in self.edges.iter() {
            choices[origin].push(symbol);
        }
        for symbols in &mut choices {
            symbols.sort_unstable();
        }
        choices
    }

    /// Count distinct substrings below every node, ignoring everything from
    /// the first `terminator` on along any edge.
    ///
    /// With a unique terminator appended last, `total` is the number of
    /// distinct non-empty substrings of the un-terminated text.
    pub fn count_substrings(&self, terminator: S) -> SubstringCounts {
        let choices = self.alphabets();
        let stops = self.occurrences(terminator);
        let text_len = self.text.len();
        let mut counts = vec![0u64; self.nodes.len()];

        for node in self.reverse_preorder(&choices) {
            let mut total = 0u64;
            for &symbol in &choices[node] {
                let Some(edge) = self.edges.get(node, symbol) else {
                    continue;
                };
                let range = edge.range(text_len);
                // First terminator at or after the label start
                let idx = stops.partition_point(|&p| p < range.start);
                match stops.get(idx) {
                    Some(&stop) if stop < range.end => {
                        total += (stop - range.start) as u64;
                    }
                    _ => {
                        total += range.len() as u64 + counts[edge.target];
                    }
                }
            }
            counts[node] = total;
        }

        SubstringCounts {
            total: counts[ROOT],
            per_node: counts,
        }
    }

    /// Count suffixes of the terminated text passing through every node.
    ///
    /// The text must end with `terminator` and contain it nowhere else. For
    /// a text of `n` symbols before the terminator the root count is
    /// `n + 1`: the bare terminator stands for the empty suffix.
    pub fn count_suffixes(&self, terminator: S) -> Result<SuffixCounts, TreeError> {
        if !self.is_terminated_by(terminator) {
            return Err(TreeError::NotTerminated);
        }

        let choices = self.alphabets();
        let mut counts = vec![0u64; self.nodes.len()];

        for node in self.reverse_preorder(&choices) {
            let symbols = &choices[node];
            let total = if symbols.is_empty() {
                1
            } else {
                symbols
                    .iter()
                    .map(|&symbol| {
                        if symbol == terminator {
                            return 1;
                        }
                        self.edges
                            .get(node, symbol)
                            .map_or(0, |edge| counts[edge.target])
                    })
                    .sum::<u64>()
            };
            counts[node] = total;
        }

        Ok(SuffixCounts {
            total: counts[ROOT],
            per_node: counts,
        })
    }

    /// Whether the text ends with `terminator` and contains it exactly once
    pub fn is_terminated_by(&self, terminator: S) -> bool {
        let text = self.text.as_slice();
        match text.split_last() {
            Some((&last, rest)) => last == terminator && !rest.contains(&terminator),
            None => false,
        }
    }

    fn occurrences(&self, symbol: S) -> Vec<usize> {
        self.text
            .as_slice()
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == symbol)
            .map(|(i, _)| i)
            .collect()
    }

    /// Nodes reachable from the root, children before their parents
    fn reverse_preorder(&self, choices: &[Vec<S>]) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![ROOT];
        while let Some(node) = stack.pop() {
            order.push(node);
            for &symbol in &choices[node] {
                if let Some(edge) = self.edges.get(node, symbol) {
                    stack.push(edge.target);
                }
            }
        }
        order.reverse();
        order
    }
}
