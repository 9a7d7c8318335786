//! # Ordering Engine Benchmarks
//!
//! | Operation | Expected cost |
//! |-----------|---------------|
//! | Move | one key, O(n) lookup |
//! | Filtered move | O(n) view + reconcile |
//! | Rebalance | O(n), only changed keys emitted |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use todo_ordering::{
    position_for_filtered_move, position_for_move, position_for_new_item, rebalance, OrderKey,
    OrderingConfig, Placement, Position, TodoItem,
};

fn spaced_list(len: usize, gap: f64) -> Vec<OrderKey> {
    (0..len)
        .map(|i| OrderKey::new(format!("item-{i}"), Position::new(i as f64 * gap).unwrap()))
        .collect()
}

fn bench_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("moves");
    let config = OrderingConfig::default();
    let mut rng = rand::thread_rng();

    for size in [100, 1_000, 10_000] {
        let list = spaced_list(size, config.gap);
        let pairs: Vec<(usize, usize)> = (0..64)
            .map(|_| (rng.gen_range(0..size), rng.gen_range(0..size)))
            .collect();

        group.throughput(Throughput::Elements(pairs.len() as u64));
        group.bench_with_input(BenchmarkId::new("position_for_move", size), &list, |b, list| {
            b.iter(|| {
                for (from, to) in &pairs {
                    black_box(position_for_move(list, &list[*from].id, &list[*to].id, &config));
                }
            })
        });
    }

    group.finish();
}

fn bench_filtered_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered-moves");
    let config = OrderingConfig::default();

    for size in [100, 1_000, 10_000] {
        let full: Vec<TodoItem> = spaced_list(size, config.gap)
            .into_iter()
            .enumerate()
            .map(|(i, k)| TodoItem::with_id(k.id, "task", k.position).completed(i % 3 == 0))
            .collect();
        let dragged = full[size - 1].id.clone();
        let target = full[1].id.clone();

        group.bench_with_input(BenchmarkId::new("active_view", size), &full, |b, full| {
            b.iter(|| {
                black_box(position_for_filtered_move(
                    full,
                    |t: &TodoItem| !t.completed,
                    &dragged,
                    &target,
                    &config,
                ))
            })
        });
    }

    group.finish();
}

fn bench_rebalance(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebalance");
    let config = OrderingConfig::default();

    for size in [100, 1_000, 10_000] {
        // Dense keys so every entry changes
        let list = spaced_list(size, 0.001);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("dense", size), &list, |b, list| {
            b.iter(|| black_box(rebalance(list, &config)))
        });
    }

    let list = spaced_list(1_000, config.gap);
    group.bench_function("prepend_1000", |b| {
        b.iter(|| black_box(position_for_new_item(&list, Placement::Prepend, &config)))
    });

    group.finish();
}

criterion_group!(benches, bench_moves, bench_filtered_moves, bench_rebalance);
criterion_main!(benches);
