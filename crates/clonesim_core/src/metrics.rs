//! Tick timing and logging setup.

use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Ticks between periodic `info` summaries.
const SUMMARY_INTERVAL: u64 = 1000;

/// Tick counter and timing for one population.
#[derive(Debug, Clone)]
pub struct TickMetrics {
    ticks: u64,
    population: usize,
    busiest_tick: Duration,
    total_time: Duration,
    start_time: Instant,
}

impl Default for TickMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl TickMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ticks: 0,
            population: 0,
            busiest_tick: Duration::ZERO,
            total_time: Duration::ZERO,
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&mut self, duration: Duration, population: usize) {
        self.ticks += 1;
        self.population = population;
        self.total_time += duration;
        self.busiest_tick = self.busiest_tick.max(duration);

        if self.ticks.is_multiple_of(SUMMARY_INTERVAL) {
            tracing::info!(
                ticks = self.ticks,
                population = population,
                mean_us = self.mean_tick_time().as_micros() as u64,
                max_us = self.busiest_tick.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.population
    }

    #[must_use]
    pub fn mean_tick_time(&self) -> Duration {
        if self.ticks == 0 {
            return Duration::ZERO;
        }
        self.total_time / u32::try_from(self.ticks).unwrap_or(u32::MAX)
    }

    /// Wall-clock time since the metrics were created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used. Output goes
/// to stderr so it never interleaves with population dumps on stdout.
pub fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
