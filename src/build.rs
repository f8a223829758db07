//! Feeding prepared input into a tree in batches

use crate::config::BuildConfig;
use crate::tree::SuffixTree;
use crate::utils::progress::build_bar;
use std::time::Instant;

/// Options controlling console output while building
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Print timing and shape diagnostics to stderr
    pub verbose: bool,
    /// Show a progress bar
    pub progress: bool,
}

/// Build a tree over `text` followed by `config.terminator`.
///
/// `text` must not contain the terminator (see [`crate::utils::prepare`]).
pub fn build_tree(text: &[u8], config: &BuildConfig, options: BuildOptions) -> SuffixTree<u8> {
    let start = Instant::now();
    let batch_size = config.batch_size.max(1);
    let mut tree = SuffixTree::with_capacity(text.len() + 1);

    let progress_bar = options.progress.then(|| build_bar(text.len() as u64));

    for batch in text.chunks(batch_size) {
        tree.extend(batch);
        if let Some(ref pb) = progress_bar {
            pb.inc(batch.len() as u64);
        }
    }
    tree.extend(&[config.terminator]);

    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }

    if options.verbose {
        let stats = tree.stats();
        eprintln!(
            "sufx: built tree over {} symbols in {:.2?} ({} nodes, {} edges, batch size {})",
            stats.text_len,
            start.elapsed(),
            stats.node_count,
            stats.edge_count,
            batch_size
        );
    }

    tree
}
