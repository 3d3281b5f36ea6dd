//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `clonesim.toml` file. Missing sections and keys fall back to the
//! defaults below.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `clonesim.toml` file (overrides defaults)
//! 3. Command-line flags (`--seed`)
//!
//! ## Example `clonesim.toml`
//!
//! ```toml
//! [simulation]
//! seed = 42
//! population_cap = 100
//! seed_count = 10
//! environmental_damage = 0.5
//! regenerate_life = true
//!
//! [founder]
//! drug_resistance = 2.0
//! mitosis_period = 5
//! life = 100.0
//! ```

use crate::lifecycle::{MAX_LIFE, REPAIR_SUCCESS_CAP, TUMOR_SUPPRESSION_CAP};
use clonesim_data::Genome;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Population-level parameters.
///
/// These govern the tick loop rather than any single cell.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Divisions are only attempted while the live count is below this.
    pub population_cap: usize,
    /// Number of founder copies seeded at start-up.
    pub seed_count: usize,
    /// Damage multiplier applied to every cell once per tick.
    pub environmental_damage: f64,
    /// Whether cells heal a little every tick.
    pub regenerate_life: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            population_cap: 100,
            seed_count: 10,
            environmental_damage: 0.5,
            regenerate_life: true,
        }
    }
}

/// The template every founder cell is copied from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FounderConfig {
    pub drug_resistance: f64,
    pub mitosis_period: u32,
    pub life: f64,
    pub repair_success: f64,
    pub max_lifespan: u32,
    pub tumor_suppression: f64,
}

impl Default for FounderConfig {
    fn default() -> Self {
        let genome = Genome::default();
        Self {
            drug_resistance: 2.0,
            mitosis_period: genome.mitosis_period,
            life: 100.0,
            repair_success: genome.repair_success,
            max_lifespan: genome.max_lifespan,
            tumor_suppression: genome.tumor_suppression,
        }
    }
}

impl FounderConfig {
    #[must_use]
    pub fn genome(&self) -> Genome {
        Genome {
            drug_resistance: self.drug_resistance,
            mitosis_period: self.mitosis_period,
            max_lifespan: self.max_lifespan,
            repair_success: self.repair_success,
            tumor_suppression: self.tumor_suppression,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub founder: FounderConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        let sim = &self.simulation;
        anyhow::ensure!(sim.population_cap > 0, "Population cap must be positive");
        anyhow::ensure!(
            sim.seed_count <= 10_000,
            "Seed count too large (max 10000)"
        );
        anyhow::ensure!(
            sim.environmental_damage.is_finite() && sim.environmental_damage >= 0.0,
            "Environmental damage must be a non-negative number"
        );

        let founder = &self.founder;
        anyhow::ensure!(
            founder.drug_resistance.is_finite() && founder.drug_resistance >= 0.0,
            "Drug resistance must be non-negative"
        );
        anyhow::ensure!(
            founder.mitosis_period >= 1,
            "Mitosis period must be at least 1"
        );
        anyhow::ensure!(
            founder.max_lifespan >= 1,
            "Max lifespan must be at least 1"
        );
        anyhow::ensure!(
            founder.life > 0.0 && founder.life <= MAX_LIFE,
            "Founder life must be in (0, {MAX_LIFE}]"
        );
        anyhow::ensure!(
            (0.0..=REPAIR_SUCCESS_CAP).contains(&founder.repair_success),
            "Repair success must be in [0.0, {REPAIR_SUCCESS_CAP}]"
        );
        anyhow::ensure!(
            (0.0..=TUMOR_SUPPRESSION_CAP).contains(&founder.tumor_suppression),
            "Tumor suppression must be in [0.0, {TUMOR_SUPPRESSION_CAP}]"
        );

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Hash of every parameter that shapes a run, seed included.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.simulation).as_bytes());
        hasher.update(format!("{:?}", self.founder).as_bytes());
        hex::encode(hasher.finalize())
    }
}
