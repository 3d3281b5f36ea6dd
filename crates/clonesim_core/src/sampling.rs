//! Random draws shared by the lifecycle and population systems.
//!
//! Every draw goes through the caller's RNG, so a seeded `ChaCha8Rng`
//! replays a run exactly.

use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Draws from `N(mean, std_dev)`.
///
/// A negative or non-finite deviation has no valid distribution; the mean is
/// returned unchanged in that case.
pub fn normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    match Normal::new(mean, std_dev) {
        Ok(dist) => dist.sample(rng),
        Err(_) => mean,
    }
}

/// Normal draw floored at zero.
pub fn non_negative<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    normal(rng, mean, std_dev).max(0.0)
}

/// Non-negative integer count with a deviation of a quarter of the mean.
///
/// This is the statistical stand-in used wherever the model would otherwise
/// simulate `mean` independent events one by one.
pub fn count<R: Rng + ?Sized>(rng: &mut R, mean: f64) -> u64 {
    non_negative(rng, mean, mean / 4.0) as u64
}

/// Uniform roll in `1..=1000`.
pub fn per_mille<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(1..=1000)
}
