//! The population engine: owns every live cell, the tick counter and the
//! RNG, and drives each cell through its lifecycle once per tick.

use crate::config::SimulationConfig;
use crate::lifecycle::{CellLogic, MutationSummary, RepairOutcome};
use crate::metrics::TickMetrics;
use crate::{sampling, stats};
use clonesim_data::{Cell, PopulationStats};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use uuid::Uuid;

pub const DEFAULT_SEED_COUNT: usize = 10;

/// Mean life lost per unit of poison effectiveness.
pub const POISON_BASE_DAMAGE: f64 = 100.0;
/// Relative spread of both the poison dose and a cell's resistance to it.
pub const POISON_VARIANCE: f64 = 0.12;

/// Cells removed by a reap pass, by cause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathTally {
    pub apoptosis: usize,
    /// Life ran out: poison, lethal mutation, old age.
    pub exhausted: usize,
}

impl DeathTally {
    #[must_use]
    pub fn total(&self) -> usize {
        self.apoptosis + self.exhausted
    }

    fn absorb(&mut self, other: DeathTally) {
        self.apoptosis += other.apoptosis;
        self.exhausted += other.exhausted;
    }
}

/// What happened during one call to [`Population::tick`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// The tick that was simulated.
    pub tick: u64,
    pub births: usize,
    pub deaths: DeathTally,
    pub mutations: MutationSummary,
    /// Live cells once the tick finished.
    pub population: usize,
}

/// Life a single cell loses to `amount` of poison.
///
/// Both the dose and the cell's resistance vary per cell; resistance at or
/// above the dose neutralises it on average.
pub fn poison_damage<R: Rng + ?Sized>(rng: &mut R, amount: f64, drug_resistance: f64) -> f64 {
    let base_damage =
        sampling::non_negative(rng, POISON_BASE_DAMAGE, POISON_BASE_DAMAGE * POISON_VARIANCE);
    let strength = amount - drug_resistance * sampling::normal(rng, 1.0, POISON_VARIANCE);
    let effectiveness = if strength > 0.0 { strength / 2.0 } else { 0.0 };
    base_damage * effectiveness
}

pub struct Population {
    cells: Vec<Cell>,
    tick: u64,
    config: SimulationConfig,
    rng: ChaCha8Rng,
    stats: PopulationStats,
    metrics: TickMetrics,
}

impl Population {
    /// Creates an empty population. The RNG is seeded from `config.seed`, or
    /// from OS entropy when no seed is configured.
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        let rng = if let Some(seed) = config.seed {
            ChaCha8Rng::seed_from_u64(seed)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self::with_rng(config, rng)
    }

    #[must_use]
    pub fn with_rng(config: SimulationConfig, rng: ChaCha8Rng) -> Self {
        Self {
            cells: Vec::new(),
            tick: 1,
            config,
            rng,
            stats: PopulationStats {
                tick: 1,
                ..Default::default()
            },
            metrics: TickMetrics::new(),
        }
    }

    /// Adds `count` independent copies of `template`, each with its own id.
    pub fn seed(&mut self, template: &Cell, count: usize) {
        self.cells.reserve(count);
        for _ in 0..count {
            let mut cell = template.clone();
            cell.identity.id = Uuid::from_u128(self.rng.gen());
            self.cells.push(cell);
        }
        stats::update_population_stats(&mut self.stats, &self.cells, self.tick);
        tracing::info!(count, population = self.cells.len(), "Seeded founder cells");
    }

    /// Applies a one-off dose of poison to every live cell.
    ///
    /// Life is floored at zero; the dead are reaped at the start of the next
    /// tick. Returns the total life lost across the population.
    pub fn poison(&mut self, amount: f64) -> f64 {
        let mut total_loss = 0.0;
        for cell in self.cells.iter_mut().filter(|c| c.is_alive()) {
            let loss = poison_damage(&mut self.rng, amount, cell.genome.drug_resistance)
                .min(cell.vitals.life);
            cell.vitals.life -= loss;
            total_loss += loss;
        }
        let lethal = self.cells.iter().filter(|c| !c.is_alive()).count();
        tracing::info!(amount, total_loss, lethal, "Poison applied");
        total_loss
    }

    /// Advances the whole population by one tick.
    pub fn tick(&mut self) -> TickReport {
        let started = Instant::now();
        let mut report = TickReport {
            tick: self.tick,
            ..Default::default()
        };

        report.deaths.absorb(self.reap());

        // The cap is checked against the count at the start of the tick, so
        // a burst of divisions may overshoot it.
        let may_divide = self.cells.len() < self.config.population_cap;
        let mut newborns = Vec::new();

        for cell in &mut self.cells {
            cell.gain_energy(&mut self.rng);
            if self.config.regenerate_life {
                cell.gain_life(&mut self.rng);
            }
            cell.damage(&mut self.rng, self.config.environmental_damage);

            if may_divide {
                if self.tick % u64::from(cell.genome.mitosis_period) == 0
                    && cell.is_ready_to_divide()
                {
                    cell.time_to_divide = true;
                }

                if cell.time_to_divide && cell.repair(&mut self.rng) == RepairOutcome::Cleared {
                    // A cleared checkpoint spends the attempt even when the
                    // mutations leave the cell unable to pay for division.
                    cell.time_to_divide = false;
                    // Residual errors are fixed into the genome as it is
                    // copied, so the daughter inherits them.
                    report.mutations.absorb(cell.mutate(&mut self.rng));
                    if let Some(child) = cell.divide(&mut self.rng) {
                        newborns.push(child);
                    }
                }
            }

            cell.age(1);
        }

        report.births = newborns.len();
        self.cells.append(&mut newborns);
        report.deaths.absorb(self.reap());
        report.population = self.cells.len();

        self.tick += 1;
        stats::record_tick_report(&mut self.stats, &report);
        stats::update_population_stats(&mut self.stats, &self.cells, self.tick);
        self.metrics.record_tick(started.elapsed(), self.cells.len());

        tracing::debug!(
            tick = report.tick,
            population = report.population,
            births = report.births,
            deaths = report.deaths.total(),
            mutations = report.mutations.total(),
            "Tick complete"
        );
        if self.cells.is_empty() && report.deaths.total() > 0 {
            tracing::info!(tick = report.tick, "Population went extinct");
        }

        report
    }

    /// Removes dead and self-destructing cells.
    fn reap(&mut self) -> DeathTally {
        let mut tally = DeathTally::default();
        self.cells.retain(|cell| {
            if cell.is_alive() {
                return true;
            }
            if cell.signaling_apoptosis {
                tally.apoptosis += 1;
            } else {
                tally.exhausted += 1;
            }
            false
        });
        tally
    }

    /// One line per live cell, in collection order.
    #[must_use]
    pub fn dump(&self) -> String {
        self.cells
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Direct access for tests and tools that need to force cell state.
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The tick that the next call to [`Population::tick`] will simulate.
    #[must_use]
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    #[must_use]
    pub fn stats(&self) -> &PopulationStats {
        &self.stats
    }

    #[must_use]
    pub fn metrics(&self) -> &TickMetrics {
        &self.metrics
    }
}
