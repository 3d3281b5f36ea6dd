//! # Clonesim Core
//!
//! The simulation engine for clonesim, a stochastic model of a clonal cell
//! colony.
//!
//! This crate contains the deterministic simulation logic, including:
//! - Cell lifecycle: energy, DNA damage, repair, mutation, division, ageing
//! - Population ticking, reaping and poisoning
//! - Configuration loading and validation
//! - Population statistics and tick metrics
//!
//! ## Architecture
//!
//! Data types live in `clonesim_data`; this crate attaches behaviour to them:
//! - **Extension traits**: [`CellLogic`] implements every per-cell operation
//! - **Owned world state**: a [`Population`] owns its cells, tick counter and RNG
//! - **Deterministic simulation**: all draws come from one seeded `ChaCha8Rng`
//!
//! ## Example
//!
//! ```
//! use clonesim_core::config::SimulationConfig;
//! use clonesim_core::lifecycle::create_founder;
//! use clonesim_core::Population;
//! use clonesim_data::Genome;
//!
//! let config = SimulationConfig {
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! let mut population = Population::new(config);
//! population.seed(&create_founder(Genome::default(), 100.0), 10);
//!
//! let report = population.tick();
//! assert_eq!(report.tick, 1);
//! assert_eq!(population.current_tick(), 2);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Cell lifecycle operations (damage, repair, mutation, division, death)
pub mod lifecycle;
/// Tick timing and structured logging setup
pub mod metrics;
/// Population engine: seeding, poisoning and the tick loop
pub mod population;
/// Random draws shared across systems
pub mod sampling;
/// Population-wide statistics
pub mod stats;

pub use config::AppConfig;
pub use lifecycle::{CellLogic, MutationClass, MutationSummary, RepairOutcome};
pub use metrics::{init_logging, TickMetrics};
pub use population::{DeathTally, Population, TickReport};
