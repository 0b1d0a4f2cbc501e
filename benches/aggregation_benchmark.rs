use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use taskpoints::config::ParallelConfig;
use taskpoints::core::{Status, Task, TaskCollection};
use taskpoints::pipeline::aggregate;

fn create_tasks(n: u32) -> TaskCollection {
    (0..n)
        .map(|i| {
            let status = if i % 3 == 0 { Status::Closed } else { Status::Open };
            Task::new(status, i % 21)
        })
        .collect()
}

fn benchmark_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for size in [1_000u32, 100_000, 1_000_000] {
        let tasks = create_tasks(size);

        group.bench_with_input(BenchmarkId::new("sequential", size), &tasks, |b, tasks| {
            let config = ParallelConfig::sequential();
            b.iter(|| aggregate(black_box(tasks), &config).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &tasks, |b, tasks| {
            let config = ParallelConfig::always();
            b.iter(|| aggregate(black_box(tasks), &config).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_aggregation);
criterion_main!(benches);
