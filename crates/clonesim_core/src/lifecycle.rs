//! Cell lifecycle: energy and life intake, DNA damage, repair, mutation,
//! division, ageing and death.
//!
//! Behaviour is attached to the plain [`Cell`] data type through the
//! [`CellLogic`] extension trait. Operations that need randomness take the
//! caller's RNG; none of them touch the owning population.

use crate::sampling;
use clonesim_data::{Cell, Genome, Identity, Lineage, Vitals};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// DNA errors a cell accrues per tick at a damage multiplier of 1.0.
pub const ERRORS_PER_TICK: f64 = 122_000.0;
/// Extra error burden of replicating the genome during division.
pub const DIVISION_DAMAGE_MULTIPLIER: f64 = 4.0;

pub const ENERGY_TO_DIVIDE: f64 = 4.0;
/// Life handed from the parent to its daughter.
pub const LIFE_TO_DIVIDE: f64 = 30.0;
pub const AVERAGE_ENERGY_PER_TICK: f64 = 1.0;
pub const AVERAGE_LIFE_PER_TICK: f64 = 0.2;
pub const MAX_LIFE: f64 = 150.0;
pub const NEWBORN_LIFE: f64 = 100.0;

pub const REPAIR_SUCCESS_CAP: f64 = 0.99999;
pub const TUMOR_SUPPRESSION_CAP: f64 = 2.0;

/// Rolls below this (out of 1000) hold a damaged cell for another repair
/// pass; the rest signal apoptosis.
pub const REPAIR_HOLD_PER_1000: u32 = 900;

pub const MUTATION_LETHAL_PER_1000: u32 = 396;
pub const MUTATION_HARMFUL_PER_1000: u32 = 312;
pub const MUTATION_NEUTRAL_PER_1000: u32 = 271;
pub const MUTATION_ADVANTAGEOUS_PER_1000: u32 = 21;

/// Result of a repair pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepairOutcome {
    /// The checkpoint held the cell back; it retries next tick.
    Hold,
    /// Damage judged irreparable. The cell is signalling apoptosis.
    SelfDestruct,
    /// No residual errors, or the checkpoint let them through.
    Cleared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationClass {
    Lethal,
    Harmful,
    Neutral,
    Advantageous,
}

impl MutationClass {
    /// Classifies a roll in `1..=1000` by the cumulative mutation weights.
    #[must_use]
    pub fn from_roll(roll: u32) -> Self {
        const HARMFUL_FROM: u32 = MUTATION_LETHAL_PER_1000;
        const NEUTRAL_FROM: u32 = HARMFUL_FROM + MUTATION_HARMFUL_PER_1000;
        const ADVANTAGEOUS_FROM: u32 = NEUTRAL_FROM + MUTATION_NEUTRAL_PER_1000;

        if roll < HARMFUL_FROM {
            Self::Lethal
        } else if roll < NEUTRAL_FROM {
            Self::Harmful
        } else if roll < ADVANTAGEOUS_FROM {
            Self::Neutral
        } else {
            Self::Advantageous
        }
    }
}

/// Mutation events drawn during one or more `mutate` calls, by class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationSummary {
    pub lethal: u64,
    pub harmful: u64,
    pub neutral: u64,
    pub advantageous: u64,
}

impl MutationSummary {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.lethal + self.harmful + self.neutral + self.advantageous
    }

    pub fn record(&mut self, class: MutationClass) {
        match class {
            MutationClass::Lethal => self.lethal += 1,
            MutationClass::Harmful => self.harmful += 1,
            MutationClass::Neutral => self.neutral += 1,
            MutationClass::Advantageous => self.advantageous += 1,
        }
    }

    pub fn absorb(&mut self, other: MutationSummary) {
        self.lethal += other.lethal;
        self.harmful += other.harmful;
        self.neutral += other.neutral;
        self.advantageous += other.advantageous;
    }
}

/// Builds a founder template. Its id is nil; the population assigns a fresh
/// id to every copy it seeds.
#[must_use]
pub fn create_founder(genome: Genome, life: f64) -> Cell {
    Cell::new(Uuid::nil(), genome, life.clamp(0.0, MAX_LIFE))
}

/// Builds the daughter of `parent`: same genome, running mutation total
/// carried over, next generation, fresh vitals and cleared flags.
#[must_use]
pub fn create_offspring(parent: &Cell, id: Uuid) -> Cell {
    let genome = parent.genome.clone();
    let vitals = Vitals::fresh(NEWBORN_LIFE, genome.max_lifespan);
    Cell {
        identity: Identity {
            id,
            parent_id: Some(parent.identity.id),
        },
        genome,
        vitals,
        lineage: Lineage {
            generation: parent.lineage.generation + 1,
            mutations: parent.lineage.mutations,
        },
        time_to_divide: false,
        can_divide: true,
        sterile: false,
        signaling_apoptosis: false,
    }
}

pub trait CellLogic {
    /// Alive means positive life and no apoptosis signal.
    fn is_alive(&self) -> bool;
    fn gain_energy<R: Rng + ?Sized>(&mut self, rng: &mut R);
    fn gain_life<R: Rng + ?Sized>(&mut self, rng: &mut R);
    fn has_energy_to_divide(&self) -> bool;
    fn has_life_to_divide(&self) -> bool;
    /// Whether the mitosis clock may arm this cell.
    fn is_ready_to_divide(&self) -> bool;
    fn age(&mut self, ticks: u32);
    fn kill(&mut self);
    fn damage<R: Rng + ?Sized>(&mut self, rng: &mut R, multiplier: f64);
    fn repair<R: Rng + ?Sized>(&mut self, rng: &mut R) -> RepairOutcome;
    fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> MutationSummary;
    fn divide<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Cell>;
}

impl CellLogic for Cell {
    fn is_alive(&self) -> bool {
        self.vitals.life > 0.0 && !self.signaling_apoptosis
    }

    fn gain_energy<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.vitals.energy += sampling::non_negative(
            rng,
            AVERAGE_ENERGY_PER_TICK,
            AVERAGE_ENERGY_PER_TICK / 4.0,
        );
    }

    fn gain_life<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let gain =
            sampling::non_negative(rng, AVERAGE_LIFE_PER_TICK, AVERAGE_LIFE_PER_TICK / 4.0);
        self.vitals.life = (self.vitals.life + gain).min(MAX_LIFE);
    }

    fn has_energy_to_divide(&self) -> bool {
        self.vitals.energy >= ENERGY_TO_DIVIDE
    }

    fn has_life_to_divide(&self) -> bool {
        self.vitals.life > LIFE_TO_DIVIDE
    }

    fn is_ready_to_divide(&self) -> bool {
        !self.sterile && self.has_energy_to_divide() && self.has_life_to_divide()
    }

    fn age(&mut self, ticks: u32) {
        self.vitals.ticks_to_live = self.vitals.ticks_to_live.saturating_sub(ticks);
        if self.vitals.ticks_to_live == 0 {
            self.kill();
        }
    }

    fn kill(&mut self) {
        self.vitals.life = 0.0;
    }

    fn damage<R: Rng + ?Sized>(&mut self, rng: &mut R, multiplier: f64) {
        let errors = sampling::count(rng, ERRORS_PER_TICK * multiplier);
        self.vitals.lifetime_errors = self.vitals.lifetime_errors.saturating_add(errors);
        self.vitals.new_errors = self.vitals.new_errors.saturating_add(errors);
    }

    fn repair<R: Rng + ?Sized>(&mut self, rng: &mut R) -> RepairOutcome {
        let expected = (1.0 - self.genome.repair_success) * self.vitals.new_errors as f64;
        self.vitals.new_errors = sampling::count(rng, expected);

        // The checkpoint only engages on residual damage, and gets
        // exponentially less likely to hold as errors pile up.
        let checkpoint_holds = self.vitals.new_errors > 0
            && rng.gen::<f64>()
                <= self
                    .genome
                    .tumor_suppression
                    .powf(self.vitals.new_errors as f64);

        if !checkpoint_holds {
            self.can_divide = true;
            return RepairOutcome::Cleared;
        }

        self.can_divide = false;
        if sampling::per_mille(rng) < REPAIR_HOLD_PER_1000 {
            RepairOutcome::Hold
        } else {
            self.signaling_apoptosis = true;
            RepairOutcome::SelfDestruct
        }
    }

    fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> MutationSummary {
        let mut summary = MutationSummary::default();
        let events = sampling::count(rng, self.vitals.new_errors as f64);
        self.lineage.mutations = self.lineage.mutations.saturating_add(events);

        for _ in 0..events {
            let class = MutationClass::from_roll(sampling::per_mille(rng));
            summary.record(class);
            if !self.is_alive() {
                continue;
            }
            match class {
                MutationClass::Lethal => self.kill(),
                MutationClass::Harmful => apply_harmful_mutation(self, rng),
                MutationClass::Neutral => {}
                MutationClass::Advantageous => apply_advantageous_mutation(self, rng),
            }
        }

        // Whatever was not repaired is now part of the genome.
        self.vitals.new_errors = 0;
        summary
    }

    fn divide<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Cell> {
        if self.sterile || !self.has_energy_to_divide() || !self.has_life_to_divide() {
            return None;
        }

        self.vitals.energy -= ENERGY_TO_DIVIDE;
        self.vitals.life -= LIFE_TO_DIVIDE;

        let mut child = create_offspring(self, Uuid::from_u128(rng.gen()));
        child.damage(rng, DIVISION_DAMAGE_MULTIPLIER);
        self.damage(rng, DIVISION_DAMAGE_MULTIPLIER);
        Some(child)
    }
}

/// Applies one of seven weighted harmful effects.
pub fn apply_harmful_mutation<R: Rng + ?Sized>(cell: &mut Cell, rng: &mut R) {
    let roll = sampling::per_mille(rng);
    let genome = &mut cell.genome;

    if roll < 250 {
        let loss = f64::from(rng.gen_range(1..=15u32));
        genome.drug_resistance = (genome.drug_resistance - loss).max(0.0);
    } else if roll < 500 {
        genome.mitosis_period = genome.mitosis_period.saturating_add(rng.gen_range(1..=2));
    } else if roll < 750 {
        let max_loss = cell.vitals.life.max(0.0).floor() as u32 + 1;
        let loss = rng.gen_range(1..=max_loss);
        cell.vitals.life = (cell.vitals.life - f64::from(loss)).max(0.0);
    } else if roll < 900 {
        genome.repair_success =
            (genome.repair_success - rng.gen_range(0.0001..=0.0050)).max(0.0);
    } else if roll < 960 {
        genome.max_lifespan = genome.max_lifespan.saturating_sub(rng.gen_range(1..=3)).max(1);
    } else if roll < 999 {
        cell.sterile = true;
    } else {
        genome.tumor_suppression =
            (genome.tumor_suppression - rng.gen_range(0.01..=1.0)).max(0.0);
    }
}

/// Applies one of six weighted beneficial effects.
pub fn apply_advantageous_mutation<R: Rng + ?Sized>(cell: &mut Cell, rng: &mut R) {
    let roll = sampling::per_mille(rng);
    let genome = &mut cell.genome;

    if roll < 250 {
        genome.drug_resistance += f64::from(rng.gen_range(1..=15u32));
    } else if roll < 500 {
        genome.mitosis_period = genome
            .mitosis_period
            .saturating_sub(rng.gen_range(1..=2))
            .max(1);
    } else if roll < 750 {
        let gain = f64::from(rng.gen_range(1..=15u32));
        cell.vitals.life = (cell.vitals.life + gain).min(MAX_LIFE);
    } else if roll < 810 {
        genome.max_lifespan = genome.max_lifespan.saturating_add(rng.gen_range(1..=2));
    } else if roll < 999 {
        genome.repair_success =
            (genome.repair_success + rng.gen_range(0.0001..=0.0050)).min(REPAIR_SUCCESS_CAP);
    } else {
        genome.tumor_suppression =
            (genome.tumor_suppression + rng.gen_range(0.01..=0.3)).min(TUMOR_SUPPRESSION_CAP);
    }
}
