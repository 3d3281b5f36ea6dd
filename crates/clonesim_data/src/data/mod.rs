//! Core data structures for the clonesim population.

pub mod cell;
pub mod stats;
