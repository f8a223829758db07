//! Append-only text store
//!
//! Positions never move once appended, which is what lets edges store index
//! ranges rather than copies of their labels.

use super::types::Symbol;

#[derive(Debug, Clone, Default)]
pub struct TextStore<S> {
    symbols: Vec<S>,
}

impl<S: Symbol> TextStore<S> {
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            symbols: Vec::with_capacity(capacity),
        }
    }

    /// Append a batch; returns the absolute index of its first symbol
    pub fn append(&mut self, batch: &[S]) -> usize {
        let start = self.symbols.len();
        self.symbols.extend_from_slice(batch);
        start
    }

    #[inline]
    pub fn at(&self, index: usize) -> S {
        self.symbols[index]
    }

    /// Borrowed view of `[start, end)`
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &[S] {
        &self.symbols[start..end]
    }

    pub fn as_slice(&self) -> &[S] {
        &self.symbols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn last(&self) -> Option<S> {
        self.symbols.last().copied()
    }
}
