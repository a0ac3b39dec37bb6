//! The benchmark driver.
//!
//! Grows a [`MajoritySequence`] one element at a time and, at every
//! checkpoint, shuffles it and times each finder on it.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::algorithms::Algorithm;
use crate::config::BenchConfig;
use crate::error::{BenchError, ConfigError};
use crate::gen_sequences::{log_checkpoints, MajoritySequence};
use crate::utils::{observe, time_us};

/// Timings taken at one checkpoint, in microseconds per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchRow {
    pub size: usize,
    pub moore_us: f64,
    pub sort_us: f64,
    /// `None` above the brute force cap.
    pub brute_us: Option<f64>,
}

impl BenchRow {
    /// Time for `algo`, if it was measured.
    pub fn time_us(&self, algo: Algorithm) -> Option<f64> {
        match algo {
            Algorithm::BoyerMoore => Some(self.moore_us),
            Algorithm::Sort => Some(self.sort_us),
            Algorithm::BruteForce => self.brute_us,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Benchmark {
    config: BenchConfig,
}

impl Benchmark {
    pub fn new(config: BenchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Runs the whole benchmark. `on_row` is called with each row as soon
    /// as it is measured; all rows are returned in checkpoint order.
    ///
    /// Fails with [`BenchError::Disagreement`] if a finder misses the
    /// injected majority value.
    pub fn run<F>(&self, mut on_row: F) -> Result<Vec<BenchRow>, BenchError>
    where
        F: FnMut(&BenchRow),
    {
        let config = &self.config;
        let checkpoints = log_checkpoints(config.max_size);
        info!(
            max_size = config.max_size,
            brute_force_cap = config.brute_force_cap,
            repeats = config.repeats,
            seed = config.seed,
            checkpoints = checkpoints.len(),
            "starting majority benchmark"
        );

        let mut seq = MajoritySequence::with_capacity(
            config.majority_value,
            config.filler_range(),
            config.seed,
            config.max_size,
        );
        let mut rows = Vec::with_capacity(checkpoints.len());

        for &size in &checkpoints {
            seq.grow_to(size);
            seq.shuffle();

            let row = self.measure(&seq)?;
            debug!(
                size,
                moore_us = row.moore_us,
                sort_us = row.sort_us,
                brute_us = ?row.brute_us,
                "checkpoint measured"
            );
            on_row(&row);
            rows.push(row);
        }

        info!(
            rows = rows.len(),
            dataset_bytes = seq.heap_size(),
            "majority benchmark finished"
        );
        Ok(rows)
    }

    fn measure(&self, seq: &MajoritySequence) -> Result<BenchRow, BenchError> {
        let size = seq.len();
        let moore_us = self.time_checked(Algorithm::BoyerMoore, seq)?;
        let sort_us = self.time_checked(Algorithm::Sort, seq)?;
        let brute_us = if self.config.times_brute_force(size) {
            Some(self.time_checked(Algorithm::BruteForce, seq)?)
        } else {
            None
        };

        Ok(BenchRow {
            size,
            moore_us,
            sort_us,
            brute_us,
        })
    }

    fn time_checked(&self, algo: Algorithm, seq: &MajoritySequence) -> Result<f64, BenchError> {
        let data = seq.as_slice();
        let (mean_us, found) = time_us(self.config.repeats, || observe(algo.find(data)));

        let found = found.flatten();
        if found != Some(seq.majority()) {
            return Err(BenchError::Disagreement {
                size: data.len(),
                algorithm: algo,
                expected: seq.majority(),
                found,
            });
        }
        Ok(mean_us)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = Benchmark::new(BenchConfig::default().with_repeats(0)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "repeats", .. }));
    }

    #[test]
    fn test_row_time_lookup() {
        let row = BenchRow {
            size: 100_000,
            moore_us: 1.5,
            sort_us: 20.0,
            brute_us: None,
        };
        assert_eq!(row.time_us(Algorithm::BoyerMoore), Some(1.5));
        assert_eq!(row.time_us(Algorithm::Sort), Some(20.0));
        assert_eq!(row.time_us(Algorithm::BruteForce), None);
    }
}
