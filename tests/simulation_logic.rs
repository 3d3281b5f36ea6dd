#[macro_use]
mod common;

use clonesim_lib::model::CellLogic;
use common::PopulationBuilder;

fn founders() -> PopulationBuilder {
    PopulationBuilder::new().with_genome(|g| {
        g.drug_resistance = 2.0;
        g.mitosis_period = 5;
    })
}

#[test]
fn test_founders_survive_first_tick() {
    let mut population = founders().with_seed(21).build();
    assert_population!(population, 10);
    assert_eq!(population.current_tick(), 1);

    let report = population.tick();

    assert_eq!(report.tick, 1);
    assert_eq!(report.births, 0);
    assert_eq!(report.deaths.total(), 0);
    assert_population!(population, 10);
    assert_eq!(population.current_tick(), 2);
}

#[test]
fn test_heavy_poison_wipes_out_unprotected_cells() {
    let mut population = PopulationBuilder::new()
        .with_seed(22)
        .with_genome(|g| g.drug_resistance = 0.0)
        .build();
    let first = population.cells()[0].identity.id;

    let lost = population.poison(1000.0);
    assert!(lost > 0.0);
    let report = population.tick();

    assert_eq!(report.deaths.exhausted, 10);
    assert!(population.is_empty());
    assert_cell_dead!(population, first);
}

#[test]
fn test_resistant_cells_shrug_off_weak_poison() {
    let mut population = PopulationBuilder::new()
        .with_seed(23)
        .with_genome(|g| g.drug_resistance = 50.0)
        .build();

    let lost = population.poison(1.0);

    assert_eq!(lost, 0.0);
    population.tick();
    assert_population!(population, 10);
}

#[test]
fn test_invariants_hold_after_every_tick() {
    let mut population = founders()
        .with_seed(24)
        .with_config(|c| c.population_cap = 200)
        .with_cell(|cell| cell.vitals.energy = 3.5)
        .build();

    for tick in 0..200 {
        if tick == 60 {
            population.poison(4.0);
        }
        population.tick();
        for cell in population.cells() {
            assert!(cell.is_alive());
            assert_cell_invariants!(cell);
        }
        if population.is_empty() {
            break;
        }
    }
}

#[test]
fn test_population_grows_under_a_generous_cap() {
    let mut population = founders()
        .with_seed(25)
        .with_config(|c| {
            c.population_cap = 500;
            c.environmental_damage = 0.0;
        })
        .with_genome(|g| {
            g.mitosis_period = 1;
            g.max_lifespan = 50;
        })
        .build();

    let mut births = 0;
    for _ in 0..12 {
        births += population.tick().births;
    }

    assert!(births > 0, "well-fed cells should divide");
    assert_eq!(population.stats().total_births, births as u64);
    assert!(population.stats().max_generation >= 2);
}

#[test]
fn test_cap_limits_growth() {
    let mut population = founders()
        .with_seed(26)
        .with_config(|c| {
            c.population_cap = 15;
            c.environmental_damage = 0.0;
        })
        .with_genome(|g| {
            g.mitosis_period = 1;
            g.max_lifespan = 100;
        })
        .with_cell(|cell| cell.vitals.energy = 50.0)
        .build();

    for _ in 0..30 {
        let before = population.len();
        let report = population.tick();
        if before >= 15 {
            assert_eq!(report.births, 0);
        }
        // One tick can at most double the starting count.
        assert!(population.len() <= before * 2);
    }
}

#[test]
fn test_stats_track_current_population() {
    let mut population = founders().with_seed(27).build();
    for _ in 0..5 {
        population.tick();
    }
    let stats = population.stats();
    assert_eq!(stats.tick, population.current_tick());
    assert_eq!(stats.population, population.len());
    assert!(stats.mean_life > 0.0);
}
