use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use faraway_core::AggregateId;
use faraway_packing::{Item, ItemId, PackingList, SortCriterion};

fn list_of(size: usize) -> PackingList {
    let items = (0..size)
        .map(|i| {
            // Scrambled descriptions so the description sort has real work to do.
            let description = format!("item-{:05}", (i * 7919) % size.max(1));
            Item::new(ItemId(i as u64 + 1), description, 1).with_packed(i % 3 == 0)
        })
        .collect();
    PackingList::with_items(AggregateId::new(), items)
}

fn bench_sorted_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorted_view");
    for size in [10usize, 100, 1_000] {
        let list = list_of(size);
        group.throughput(Throughput::Elements(size as u64));
        for criterion in SortCriterion::ALL {
            group.bench_with_input(
                BenchmarkId::new(criterion.as_str(), size),
                &list,
                |b, list| b.iter(|| black_box(list.sorted_view(black_box(criterion)).len())),
            );
        }
    }
    group.finish();
}

fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats");
    for size in [10usize, 100, 1_000] {
        let list = list_of(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &list, |b, list| {
            b.iter(|| black_box(list.stats()))
        });
    }
    group.finish();
}

fn bench_toggle_round_trip(c: &mut Criterion) {
    let list = list_of(1_000);
    c.bench_function("toggle_twice_1000", |b| {
        b.iter(|| {
            let next = list.clone().toggle(ItemId(500)).toggle(ItemId(500));
            black_box(next.len())
        })
    });
}

criterion_group!(benches, bench_sorted_views, bench_stats, bench_toggle_round_trip);
criterion_main!(benches);
