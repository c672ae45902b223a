use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use partition_comp::{patterns, scan, tree, Partition};

#[inline(never)]
fn bench_partition<P: Partition>(
    c: &mut Criterion,
    test_size: usize,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(&format!("{}-{pattern_name}-{test_size}", P::name()), |b| {
        b.iter_batched_ref(
            || pattern_provider(test_size),
            |test_data| {
                let pivot_index = test_data.len() / 2;
                black_box(P::partition(black_box(test_data.as_mut_slice()), pivot_index).unwrap())
            },
            batch_size,
        )
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_sizes = [1_000, 10_000, 100_000, 1_000_000];

    let pattern_providers: Vec<(&str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_uniform", |size| {
            patterns::random_uniform(size, 0..=10_000)
        }),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saw_mixed", |size| {
            patterns::saw_mixed(size, ((size as f64).log2().round()) as usize)
        }),
    ];

    for test_size in test_sizes {
        for (pattern_name, pattern_provider) in &pattern_providers {
            bench_partition::<scan::lomuto::PartitionImpl>(c, test_size, pattern_name, pattern_provider);
            bench_partition::<tree::sequential::PartitionImpl>(c, test_size, pattern_name, pattern_provider);
            bench_partition::<tree::fork_join::PartitionImpl>(c, test_size, pattern_name, pattern_provider);
        }
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
