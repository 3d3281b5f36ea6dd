//! Non-interactive batch runs.

use serde::Serialize;

use super::state::App;
use crate::model::state::PopulationStats;

/// Outcome of a headless run, printable as text or JSON.
#[derive(Debug, Clone, Serialize)]
pub struct HeadlessSummary {
    pub fingerprint: String,
    pub seed: Option<u64>,
    pub ticks_run: u64,
    pub extinct: bool,
    pub stats: PopulationStats,
}

/// Runs up to `ticks` ticks without any operator, stopping on extinction.
pub fn run_headless(app: &mut App, ticks: u64) -> HeadlessSummary {
    let mut ticks_run = 0;
    while ticks_run < ticks {
        let report = app.population.tick();
        ticks_run += 1;
        tracing::debug!(
            tick = report.tick,
            population = report.population,
            births = report.births,
            apoptoses = report.deaths.apoptosis,
            exhausted = report.deaths.exhausted,
            lethal_mutations = report.mutations.lethal,
            "Headless tick"
        );
        if app.population.is_empty() {
            break;
        }
    }

    let metrics = app.population.metrics();
    tracing::info!(
        ticks_run,
        population = app.population.len(),
        mean_tick_us = metrics.mean_tick_time().as_micros() as u64,
        "Headless run finished"
    );

    HeadlessSummary {
        fingerprint: app.config.fingerprint(),
        seed: app.config.simulation.seed,
        ticks_run,
        extinct: app.population.is_empty(),
        stats: app.population.stats().clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::AppConfig;

    #[test]
    fn test_headless_run_counts_ticks() {
        let mut config = AppConfig::default();
        config.simulation.seed = Some(11);
        let mut app = App::new(config).unwrap();

        let summary = run_headless(&mut app, 5);

        assert!(summary.ticks_run <= 5);
        assert_eq!(summary.seed, Some(11));
        assert_eq!(summary.stats.tick, 1 + summary.ticks_run);
        assert_eq!(summary.extinct, app.population.is_empty());
    }

    #[test]
    fn test_headless_stops_on_extinction() {
        let mut config = AppConfig::default();
        config.simulation.seed = Some(12);
        let mut app = App::new(config).unwrap();
        app.population.poison(1000.0);

        let summary = run_headless(&mut app, 50);

        assert_eq!(summary.ticks_run, 1);
        assert!(summary.extinct);
        assert_eq!(app.population.current_tick(), 2);
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let mut config = AppConfig::default();
        config.simulation.seed = Some(11);
        let mut app = App::new(config).unwrap();
        let summary = run_headless(&mut app, 1);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"ticks_run\":1"));
        assert!(json.contains("\"stats\""));
    }
}
