use crate::population::TickReport;
use clonesim_data::{Cell, PopulationStats};

/// Recomputes the snapshot fields of `stats` from the live cells.
pub fn update_population_stats(stats: &mut PopulationStats, cells: &[Cell], tick: u64) {
    stats.tick = tick;
    stats.population = cells.len();
    stats.max_generation = cells
        .iter()
        .map(|c| c.lineage.generation)
        .max()
        .unwrap_or(0);
    stats.total_lineage_mutations = cells.iter().map(|c| c.lineage.mutations).sum();

    if cells.is_empty() {
        stats.mean_life = 0.0;
        stats.mean_drug_resistance = 0.0;
        stats.mean_repair_success = 0.0;
        stats.mean_tumor_suppression = 0.0;
        return;
    }

    let n = cells.len() as f64;
    stats.mean_life = cells.iter().map(|c| c.vitals.life).sum::<f64>() / n;
    stats.mean_drug_resistance = cells.iter().map(|c| c.genome.drug_resistance).sum::<f64>() / n;
    stats.mean_repair_success = cells.iter().map(|c| c.genome.repair_success).sum::<f64>() / n;
    stats.mean_tumor_suppression =
        cells.iter().map(|c| c.genome.tumor_suppression).sum::<f64>() / n;
}

/// Folds the births and deaths of one tick into the running totals.
pub fn record_tick_report(stats: &mut PopulationStats, report: &TickReport) {
    stats.total_births += report.births as u64;
    stats.total_deaths += report.deaths.total() as u64;
    stats.total_apoptoses += report.deaths.apoptosis as u64;
}
