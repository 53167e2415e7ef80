// Criterion benchmarks for the sum and search kernels on a 1M-element buffer.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use parallel_benchmarks::{data, parallel_search, parallel_sum, pool, BenchSettings, Schedule, SearchConfig};

const LEN: usize = 1_000_000;

fn sum_benchmark(c: &mut Criterion) {
    let data = data::ones(LEN).expect("allocate sum buffer");
    let mut group = c.benchmark_group("sum");

    for threads in [1, 2] {
        let pool = pool::build(threads, "bench-sum").expect("build pool");
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, _| {
            b.iter(|| black_box(parallel_sum(&pool, black_box(&data))));
        });
    }

    group.finish();
}

fn search_benchmark(c: &mut Criterion) {
    let settings = BenchSettings {
        len: LEN,
        ..BenchSettings::default()
    };
    let haystack = data::symbols(&settings).expect("allocate search buffer");
    let mut group = c.benchmark_group("search");

    let runs = [
        (1, Schedule::Static, LEN),
        (2, Schedule::Static, LEN / 2),
        (2, Schedule::Static, 4_096),
        (2, Schedule::Dynamic, 4_096),
        (2, Schedule::Dynamic, 1),
    ];
    for (threads, schedule, chunk) in runs {
        let config = SearchConfig::new(threads, schedule, chunk).expect("valid config");
        let pool = pool::build(threads, "bench-search").expect("build pool");
        let id = format!("{threads}t/{schedule}/{chunk}");
        group.bench_with_input(BenchmarkId::from_parameter(id), &config, |b, config| {
            b.iter(|| black_box(parallel_search(&pool, &haystack, &settings.pattern, config)));
        });
    }

    group.finish();
}

criterion_group!(benches, sum_benchmark, search_benchmark);
criterion_main!(benches);
