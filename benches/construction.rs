//! Suffix tree construction and analytics benchmarks
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sufx::tree::SuffixTree;

/// Deterministic pseudo-random DNA-like text
fn dna(len: usize) -> Vec<u8> {
    let mut state = 0x2545_f491_u32;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            b"acgt"[(state & 3) as usize]
        })
        .collect()
}

fn bench_extend(c: &mut Criterion) {
    let mut group = c.benchmark_group("extend");
    for &len in &[1_000usize, 10_000, 100_000] {
        let text = dna(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("single_batch", len), &text, |b, text| {
            b.iter(|| SuffixTree::from_symbols(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("4k_batches", len), &text, |b, text| {
            b.iter(|| {
                let mut tree = SuffixTree::new();
                for batch in text.chunks(4096) {
                    tree.extend(black_box(batch));
                }
                tree
            })
        });
    }
    group.finish();
}

fn bench_repetitive(c: &mut Criterion) {
    let text = vec![b'a'; 100_000];
    c.bench_function("extend_repetitive_100k", |b| {
        b.iter(|| SuffixTree::from_symbols(black_box(&text)))
    });
}

fn bench_analytics(c: &mut Criterion) {
    let mut text = dna(100_000);
    text.push(b'$');
    let tree = SuffixTree::from_symbols(&text);

    c.bench_function("count_substrings_100k", |b| {
        b.iter(|| tree.count_substrings(black_box(b'$')))
    });
    c.bench_function("count_suffixes_100k", |b| {
        b.iter(|| tree.count_suffixes(black_box(b'$')))
    });
    c.bench_function("contains_100k", |b| {
        b.iter(|| tree.contains(black_box(&text[40_000..40_032])))
    });
}

criterion_group!(benches, bench_extend, bench_repetitive, bench_analytics);
criterion_main!(benches);
