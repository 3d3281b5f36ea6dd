use serde::{Deserialize, Serialize};

/// Population-wide summary, refreshed after every tick.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PopulationStats {
    pub tick: u64,
    pub population: usize,
    pub max_generation: u32,
    pub mean_life: f64,
    pub mean_drug_resistance: f64,
    pub mean_repair_success: f64,
    pub mean_tumor_suppression: f64,
    pub total_lineage_mutations: u64,
    pub total_births: u64,
    pub total_deaths: u64,
    pub total_apoptoses: u64,
}
