//! Errors reported to callers of tree queries.
//!
//! Structural defects inside the builder (duplicate edge keys, a suffix link
//! set twice) are not represented here: they panic.

/// Query failures on a built tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The path leaves the tree after `depth` matched symbols.
    #[error("no such path (matched {depth} symbols)")]
    NoSuchPath { depth: usize },

    /// `follow` reached an edge spanning more than one symbol.
    #[error("edge at depth {depth} spans {len} symbols; follow only crosses single-symbol edges")]
    MultiSymbolEdge { depth: usize, len: usize },

    /// Suffix counting needs text ending in a terminator that occurs nowhere else.
    #[error("text is not terminated by a unique terminator symbol")]
    NotTerminated,
}
