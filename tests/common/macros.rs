/// Asserts that the live cell count matches the expected value.
#[macro_export]
macro_rules! assert_population {
    ($population:expr, $count:expr) => {
        assert_eq!($population.len(), $count, "Population count mismatch");
    };
}

/// Asserts that no cell with the given ID is still in the population.
#[macro_export]
macro_rules! assert_cell_dead {
    ($population:expr, $id:expr) => {
        let exists = $population.cells().iter().any(|c| c.identity.id == $id);
        assert!(!exists, "Cell {} should be dead but was found alive", $id);
    };
}

/// Asserts the value bounds every live cell must respect.
#[macro_export]
macro_rules! assert_cell_invariants {
    ($cell:expr) => {
        let cell = &$cell;
        assert!(
            (0.0..=150.0).contains(&cell.vitals.life),
            "life {} out of range",
            cell.vitals.life
        );
        assert!(
            (0.0..1.0).contains(&cell.genome.repair_success),
            "repair success {} out of range",
            cell.genome.repair_success
        );
        assert!(cell.genome.drug_resistance >= 0.0);
        assert!(cell.genome.tumor_suppression >= 0.0);
        assert!(cell.genome.mitosis_period >= 1);
        assert!(cell.genome.max_lifespan >= 1);
        assert!(cell.vitals.energy >= 0.0);
        assert!(cell.lineage.generation >= 1);
    };
}
