use clonesim_core::config::SimulationConfig;
use clonesim_core::lifecycle::{create_founder, CellLogic};
use clonesim_core::Population;
use clonesim_data::Genome;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn capped_population() -> Population {
    let config = SimulationConfig {
        seed: Some(42),
        ..Default::default()
    };
    let mut population = Population::new(config);
    let mut founder = create_founder(Genome::default(), 100.0);
    founder.genome.max_lifespan = 1_000_000;
    founder.vitals.ticks_to_live = 1_000_000;
    population.seed(&founder, 100);
    population
}

/// Benchmark a full tick over a population sitting at the cap.
fn bench_tick_at_cap(c: &mut Criterion) {
    c.bench_function("tick_at_cap", |b| {
        b.iter_batched(
            capped_population,
            |mut population| black_box(population.tick()),
            criterion::BatchSize::SmallInput,
        )
    });
}

/// Benchmark a repair pass on a heavily damaged cell.
fn bench_repair(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let template = create_founder(Genome::default(), 100.0);

    c.bench_function("repair_after_division", |b| {
        b.iter(|| {
            let mut cell = template.clone();
            cell.vitals.new_errors = 800_000;
            black_box(cell.repair(&mut rng))
        })
    });
}

/// Benchmark mutation of a cell with many unrepaired errors.
fn bench_mutate(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let template = create_founder(Genome::default(), 100.0);

    c.bench_function("mutate_100_errors", |b| {
        b.iter(|| {
            let mut cell = template.clone();
            cell.vitals.new_errors = 100;
            black_box(cell.mutate(&mut rng))
        })
    });
}

criterion_group!(benches, bench_tick_at_cap, bench_repair, bench_mutate);
criterion_main!(benches);
