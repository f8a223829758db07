#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sufx::tree::SuffixTree;

#[derive(Debug, Arbitrary)]
struct Input {
    batches: Vec<Vec<u8>>,
    probe: Vec<u8>,
}

fuzz_target!(|input: Input| {
    // Small alphabet so repeats (and edge splits) are common
    let batches: Vec<Vec<u8>> = input
        .batches
        .iter()
        .map(|b| b.iter().map(|x| x % 4).collect())
        .collect();
    let probe: Vec<u8> = input.probe.iter().map(|x| x % 4).collect();

    let mut tree: SuffixTree<u8> = SuffixTree::new();
    for batch in &batches {
        tree.extend(batch.as_slice());
    }

    let text = tree.text().to_vec();
    let naive = probe.is_empty() || text.windows(probe.len()).any(|w| w == probe.as_slice());
    assert_eq!(tree.contains(&probe), naive);

    tree.extend(&[4]);
    assert_eq!(
        tree.count_suffixes(4).unwrap().total,
        text.len() as u64 + 1
    );
});
