use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identification of a cell.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    /// `None` for founders.
    pub parent_id: Option<Uuid>,
}

/// Heritable genetic state, copied into every daughter cell.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Genome {
    /// Subtracted from the strength of any poison before it takes effect.
    pub drug_resistance: f64,
    /// Ticks between division attempts. Never below 1.
    pub mitosis_period: u32,
    /// Ticks a newborn cell lives before dying of old age. Never below 1.
    pub max_lifespan: u32,
    /// Fraction of DNA errors fixed by one repair pass.
    pub repair_success: f64,
    /// Damage checkpoint strength. The chance that a damaged cell is held
    /// back is `tumor_suppression ^ errors`.
    pub tumor_suppression: f64,
}

impl Default for Genome {
    fn default() -> Self {
        Self {
            drug_resistance: 3.0,
            mitosis_period: 5,
            max_lifespan: 10,
            repair_success: 0.99999,
            tumor_suppression: 0.95,
        }
    }
}

/// Per-instance physiological state. Reset for every newborn cell.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Vitals {
    /// Physical fitness. Death at zero.
    pub life: f64,
    pub ticks_to_live: u32,
    /// Stored food, spent on division.
    pub energy: f64,
    /// DNA errors accrued since the last repair or mutation pass.
    pub new_errors: u64,
    pub lifetime_errors: u64,
}

impl Vitals {
    #[must_use]
    pub fn fresh(life: f64, max_lifespan: u32) -> Self {
        Self {
            life,
            ticks_to_live: max_lifespan,
            energy: 0.0,
            new_errors: 0,
            lifetime_errors: 0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lineage {
    /// 1 for founders, parent's generation + 1 for offspring.
    pub generation: u32,
    /// Running total of mutations along this cell's line of descent.
    pub mutations: u64,
}

impl Default for Lineage {
    fn default() -> Self {
        Self {
            generation: 1,
            mutations: 0,
        }
    }
}

/// One simulated cell.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Cell {
    pub identity: Identity,
    pub genome: Genome,
    pub vitals: Vitals,
    pub lineage: Lineage,
    /// Set when the mitosis clock fires; cleared by a successful division.
    pub time_to_divide: bool,
    /// Outcome of the most recent repair pass.
    pub can_divide: bool,
    /// Permanent loss of the ability to divide.
    pub sterile: bool,
    /// Apoptosis signal. Terminal.
    pub signaling_apoptosis: bool,
}

impl Cell {
    /// Builds a first-generation cell with fresh vitals.
    #[must_use]
    pub fn new(id: Uuid, genome: Genome, life: f64) -> Self {
        let vitals = Vitals::fresh(life, genome.max_lifespan);
        Self {
            identity: Identity {
                id,
                parent_id: None,
            },
            genome,
            vitals,
            lineage: Lineage::default(),
            time_to_divide: false,
            can_divide: true,
            sterile: false,
            signaling_apoptosis: false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cell(dr={}, mr={}, err={}, mut={}, L={:.2}, rep={:.5}, ts={:.3}, ttl={}, g={})",
            self.genome.drug_resistance,
            self.genome.mitosis_period,
            self.vitals.new_errors,
            self.lineage.mutations,
            self.vitals.life,
            self.genome.repair_success,
            self.genome.tumor_suppression,
            self.vitals.ticks_to_live,
            self.lineage.generation
        )
    }
}
