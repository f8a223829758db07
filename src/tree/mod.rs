//! Suffix tree module
//!
//! Online construction of a suffix tree over an append-only text, plus
//! lookups and statistics over the result.
//!
//! ## Architecture
//!
//! - `text`: Append-only symbol storage addressed by absolute index
//! - `edges`: Edge table keyed by `(origin, first symbol)`
//! - `nodes`: Node arena holding suffix links
//! - `builder`: The active-point construction engine
//! - `walk`: Path lookups (`walk`, `contains`, `follow`)
//! - `analytics`: Alphabets, substring and suffix counts
//! - `stats`: Shape summary

pub mod analytics;
pub mod builder;
pub mod edges;
pub mod nodes;
pub mod stats;
pub mod text;
pub mod types;
pub mod walk;

// Re-exports for convenience
pub use analytics::{SubstringCounts, SuffixCounts};
pub use builder::SuffixTree;
pub use stats::TreeStats;
pub use types::{Edge, NodeId, Position, ROOT, Symbol};
