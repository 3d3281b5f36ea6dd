use anyhow::Result;

use crate::model::config::AppConfig;
use crate::model::lifecycle;
use crate::model::population::{Population, TickReport};

/// A running simulation: the population plus the configuration it was
/// built from.
pub struct App {
    pub running: bool,
    pub config: AppConfig,
    pub population: Population,
}

impl App {
    /// Validates `config`, then seeds a fresh population from its founder
    /// template.
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;

        let template = lifecycle::create_founder(config.founder.genome(), config.founder.life);
        let mut population = Population::new(config.simulation.clone());
        population.seed(&template, config.simulation.seed_count);

        tracing::info!(
            fingerprint = %config.fingerprint(),
            seed = ?config.simulation.seed,
            "Simulation initialised"
        );

        Ok(Self {
            running: true,
            config,
            population,
        })
    }

    /// Runs exactly `ticks` ticks. The clock keeps advancing after
    /// extinction.
    pub fn run_ticks(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.population.tick();
        }
    }

    /// Poisons the population, then lets one tick pass so the dead are
    /// reaped.
    pub fn apply_poison(&mut self, amount: f64) -> TickReport {
        self.population.poison(amount);
        self.population.tick()
    }

    /// One-line summary of the current population.
    #[must_use]
    pub fn summary(&self) -> String {
        let stats = self.population.stats();
        format!(
            "tick={} population={} max_gen={} births={} deaths={} apoptoses={} \
             mean_dr={:.2} mean_rep={:.5} mean_ts={:.3} lineage_mutations={}",
            stats.tick,
            stats.population,
            stats.max_generation,
            stats.total_births,
            stats.total_deaths,
            stats.total_apoptoses,
            stats.mean_drug_resistance,
            stats.mean_repair_success,
            stats.mean_tumor_suppression,
            stats.total_lineage_mutations
        )
    }
}
