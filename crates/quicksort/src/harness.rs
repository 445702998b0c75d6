use std::hint::black_box;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, info};

use crate::generator::{self, ALL_DISTRIBUTIONS, Distribution};
use crate::{ALL_STRATEGIES, Error, PivotStrategy, UniformRandom, sort_with_policy};

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Generate(#[from] Error),

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

#[derive(Clone, Copy, Debug)]
pub struct HarnessConfig {
    pub size: usize,
    pub strategies: &'static [PivotStrategy],
    pub distributions: &'static [Distribution],
    /// Seeds input generation and random pivots. `None` draws from the thread-local rng.
    pub seed: Option<u64>,
}

pub const DEFAULT_CONFIG: HarnessConfig = HarnessConfig {
    size: 1_000_000,
    strategies: &ALL_STRATEGIES,
    distributions: &ALL_DISTRIBUTIONS,
    seed: None,
};

impl Default for HarnessConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Timing {
    pub strategy: PivotStrategy,
    pub distribution: Distribution,
    pub size: usize,
    pub elapsed: Duration,
}

/// Generates every configured input, times each strategy on it and writes the report to `out`.
///
/// Only the sort call is timed. Inputs are generated once per strategy, so every strategy sees
/// inputs of the same shape.
pub fn run<W: Write>(config: &HarnessConfig, out: &mut W) -> Result<Vec<Timing>, HarnessError> {
    let mut timings = Vec::with_capacity(config.strategies.len() * config.distributions.len());

    for &strategy in config.strategies {
        let inputs = generate_inputs(config)?;

        for (distribution, input) in inputs {
            writeln!(out, "{}", header_line(strategy, distribution))?;

            let elapsed = time_sort(strategy, &input, config.seed);
            writeln!(out, "Elapsed time: {:.6} seconds", elapsed.as_secs_f64())?;

            info!(
                strategy = crate::strategy_name(strategy),
                distribution = distribution.label(),
                size = input.len(),
                elapsed_ms = elapsed.as_secs_f64() * 1e3,
                "sorted"
            );
            timings.push(Timing {
                strategy,
                distribution,
                size: input.len(),
                elapsed,
            });
        }
    }

    Ok(timings)
}

fn generate_inputs(config: &HarnessConfig) -> Result<Vec<(Distribution, Vec<i64>)>, Error> {
    let size = i64::try_from(config.size)
        .map_err(|_| Error::InvalidArgument(format!("size = {} is too large", config.size)))?;
    let mut rng = config.seed.map(StdRng::seed_from_u64);

    config
        .distributions
        .iter()
        .map(|&dist| {
            let start = Instant::now();
            let input = match rng.as_mut() {
                Some(rng) => generator::generate_with_rng(config.size, dist, rng),
                None => generator::generate(size, dist.label())?,
            };
            debug!(
                distribution = dist.label(),
                size = input.len(),
                generate_ms = start.elapsed().as_secs_f64() * 1e3,
                "generated input"
            );
            Ok((dist, input))
        })
        .collect()
}

fn time_sort(strategy: PivotStrategy, input: &[i64], seed: Option<u64>) -> Duration {
    let start;
    let sorted = match (strategy, seed) {
        (PivotStrategy::UniformRandom, Some(seed)) => {
            let mut policy = UniformRandom::seeded(seed);
            start = Instant::now();
            sort_with_policy(input, &mut policy)
        }
        _ => {
            start = Instant::now();
            crate::sort(strategy, input)
        }
    };
    let elapsed = start.elapsed();

    debug!(sorted = sorted.is_sorted(), "checked output");
    black_box(sorted);
    elapsed
}

fn header_line(strategy: PivotStrategy, distribution: Distribution) -> String {
    let flavor = match strategy {
        PivotStrategy::MedianOfThree => "deterministic",
        PivotStrategy::UniformRandom => "randomized",
    };
    match distribution {
        Distribution::Duplicates => {
            format!("Sorting list with duplicates using {flavor} quicksort...")
        }
        _ => format!("Sorting {} list with {flavor} quicksort...", distribution.label()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_CONFIG: HarnessConfig = HarnessConfig {
        size: 512,
        strategies: &ALL_STRATEGIES,
        distributions: &ALL_DISTRIBUTIONS,
        seed: Some(0x5EED_2026),
    };

    #[test]
    fn default_config_matches_reference_runs() {
        let config = HarnessConfig::default();
        assert_eq!(config.size, 1_000_000);
        assert_eq!(config.strategies.len(), 2);
        assert_eq!(config.distributions, &ALL_DISTRIBUTIONS);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn report_lists_every_run_in_order() {
        let mut out = Vec::new();
        let timings = run(&SMALL_CONFIG, &mut out).unwrap();
        assert_eq!(timings.len(), 8);
        assert!(timings.iter().all(|t| t.size == 512));

        let report = String::from_utf8(out).unwrap();
        let lines = report.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 16);
        assert_eq!(lines[0], "Sorting ascending list with deterministic quicksort...");
        assert_eq!(lines[2], "Sorting descending list with deterministic quicksort...");
        assert_eq!(lines[4], "Sorting random list with deterministic quicksort...");
        assert_eq!(
            lines[6],
            "Sorting list with duplicates using deterministic quicksort..."
        );
        assert_eq!(lines[8], "Sorting ascending list with randomized quicksort...");
        assert_eq!(
            lines[14],
            "Sorting list with duplicates using randomized quicksort..."
        );

        for line in lines.iter().skip(1).step_by(2) {
            let secs = line
                .strip_prefix("Elapsed time: ")
                .and_then(|rest| rest.strip_suffix(" seconds"))
                .unwrap();
            assert_eq!(secs.split('.').nth(1).map(str::len), Some(6), "{line}");
            assert!(secs.parse::<f64>().unwrap() >= 0.0);
        }
    }

    #[test]
    fn unseeded_run_uses_thread_rng() {
        let config = HarnessConfig {
            size: 64,
            seed: None,
            ..SMALL_CONFIG
        };
        let mut out = Vec::new();
        let timings = run(&config, &mut out).unwrap();
        assert_eq!(timings.len(), 8);
    }

    #[test]
    fn empty_config_writes_nothing() {
        let config = HarnessConfig {
            size: 0,
            strategies: &[],
            ..SMALL_CONFIG
        };
        let mut out = Vec::new();
        assert!(run(&config, &mut out).unwrap().is_empty());
        assert!(out.is_empty());
    }
}
