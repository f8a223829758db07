//! # sufx - Online Suffix Trees
//!
//! sufx builds a suffix tree over an append-only text with Ukkonen's online
//! algorithm. The text can grow batch by batch; after every `extend` call the
//! tree indexes every substring of everything appended so far.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`tree`] - Text store, edge table, node arena, builder, walks, analytics
//! - [`error`] - Errors reported by tree queries
//! - [`config`] - Build configuration for the command line front end
//! - [`build`] - Batched construction with progress and diagnostics
//! - [`utils`] - Input loading and progress bars
//!
//! ## Quick Start
//!
//! ```
//! use sufx::tree::{SuffixTree, ROOT};
//!
//! let mut tree = SuffixTree::new();
//! tree.extend(b"abcab");
//! tree.extend(b"xabcd$");
//!
//! assert!(tree.contains(b"bxab"));
//! assert!(!tree.contains(b"abd"));
//! assert_eq!(tree.count_substrings(b'$').total, 46);
//! assert_eq!(tree.count_suffixes(b'$').unwrap().total, 11);
//! assert_eq!(tree.alphabet(ROOT), vec![b'$', b'a', b'b', b'c', b'd', b'x']);
//! ```
//!
//! ## Terminators
//!
//! Without a terminator some suffixes end inside an edge instead of at a
//! leaf. Append a symbol that occurs nowhere else as the last symbol of the
//! last batch when per-suffix statistics matter.

pub mod build;
pub mod config;
pub mod error;
pub mod tree;
pub mod utils;

pub use error::TreeError;
pub use tree::SuffixTree;
