use count_core::count::{CountTracker, simulate_seeded};
use count_core::model::Rank;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn simulate_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");
    for cards in [52i64, 312, 10_000] {
        group.bench_function(format!("seeded_{cards}"), |b| {
            b.iter(|| black_box(simulate_seeded(cards, 2024)))
        });
    }
    group.finish();
}

fn tracker_bench(c: &mut Criterion) {
    let shoe: Vec<Rank> = Rank::ORDERED.iter().copied().cycle().take(416).collect();
    c.bench_function("tracker_apply_eight_decks", |b| {
        b.iter(|| {
            let mut tracker = CountTracker::new();
            black_box(tracker.apply_all(shoe.iter().copied()))
        })
    });
}

criterion_group!(benches, simulate_bench, tracker_bench);
criterion_main!(benches);
