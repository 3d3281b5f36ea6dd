#[macro_use]
pub mod macros;

use clonesim_lib::model::config::SimulationConfig;
use clonesim_lib::model::lifecycle;
use clonesim_lib::model::population::Population;
use clonesim_lib::model::state::{Cell, Genome};

type CellMod = Box<dyn FnOnce(&mut Cell)>;

#[allow(dead_code)]
pub struct PopulationBuilder {
    config: SimulationConfig,
    genome: Genome,
    life: f64,
    founders: usize,
    cell_mods: Vec<CellMod>,
}

#[allow(dead_code)]
impl PopulationBuilder {
    pub fn new() -> Self {
        Self {
            config: SimulationConfig {
                seed: Some(0),
                ..SimulationConfig::default()
            },
            genome: Genome::default(),
            life: 100.0,
            founders: 10,
            cell_mods: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut SimulationConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_genome<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut Genome),
    {
        modifier(&mut self.genome);
        self
    }

    pub fn with_life(mut self, life: f64) -> Self {
        self.life = life;
        self
    }

    pub fn with_founders(mut self, count: usize) -> Self {
        self.founders = count;
        self
    }

    /// Applied to the founder template before it is copied.
    pub fn with_cell<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut Cell) + 'static,
    {
        self.cell_mods.push(Box::new(modifier));
        self
    }

    pub fn template(&self) -> Cell {
        lifecycle::create_founder(self.genome.clone(), self.life)
    }

    pub fn build(self) -> Population {
        let mut template = lifecycle::create_founder(self.genome, self.life);
        for modifier in self.cell_mods {
            modifier(&mut template);
        }
        let mut population = Population::new(self.config);
        population.seed(&template, self.founders);
        population
    }
}
