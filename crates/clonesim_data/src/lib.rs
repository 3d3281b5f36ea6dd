//! Plain data types shared across the clonesim workspace.
//!
//! Nothing in this crate draws random numbers or advances time; behaviour
//! lives in `clonesim_core`.

pub mod data;

pub use data::cell::{Cell, Genome, Identity, Lineage, Vitals};
pub use data::stats::PopulationStats;
