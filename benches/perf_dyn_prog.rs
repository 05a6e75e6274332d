//! Benchmark: dynamic-programming solver on large random grids.
//!
//! Run with:
//! `cargo bench --bench perf_dyn_prog`

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use cranes::algorithms::ValueTable;
use cranes::{crane_unloading_dyn_prog, Grid};
use rand::{rngs::StdRng, SeedableRng};

fn random_grid(side: usize) -> Grid {
    let mut rng = StdRng::seed_from_u64(42);
    let cells = side * side;
    Grid::random(side, side, cells / 5, cells / 50, &mut rng).unwrap()
}

fn bench_dyn_prog(c: &mut Criterion) {
    let mut group = c.benchmark_group("dyn_prog");
    for &side in &[128usize, 512, 1024] {
        group.bench_function(format!("solve_{side}x{side}"), |b| {
            b.iter_batched(
                || random_grid(side),
                |grid| {
                    let score = crane_unloading_dyn_prog(&grid).map(|p| p.total_cranes());
                    criterion::black_box(score)
                },
                BatchSize::LargeInput,
            )
        });
        let grid = random_grid(side);
        group.bench_function(format!("value_table_{side}x{side}"), |b| {
            b.iter(|| criterion::black_box(ValueTable::compute(&grid).optimum()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dyn_prog);
criterion_main!(benches);
