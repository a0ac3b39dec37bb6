//! Benchmark parameters.
//!
//! The defaults are the fixed constants of the benchmark; the builder methods
//! exist so tests can run the same driver on small inputs.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Largest dataset size measured.
pub const DEFAULT_MAX_SIZE: usize = 1_000_000;
/// Brute force is only timed up to this size.
pub const DEFAULT_BRUTE_FORCE_CAP: usize = 50_000;
/// Calls per timing sample.
pub const DEFAULT_REPEATS: usize = 10;
pub const DEFAULT_SEED: u64 = 42;
/// Value injected to keep a majority at every length.
pub const DEFAULT_MAJORITY_VALUE: i32 = 1;
pub const DEFAULT_FILLER_MIN: i32 = 2;
pub const DEFAULT_FILLER_MAX: i32 = 1_000_000;
pub const DEFAULT_OUTPUT_PATH: &str = "benchmark.html";

/// Benchmark configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Largest dataset size; also the last checkpoint when it is 1, 2 or 5 times a power of ten.
    pub max_size: usize,
    /// Sizes above this are not timed for brute force.
    pub brute_force_cap: usize,
    /// Number of calls averaged per measurement.
    pub repeats: usize,
    /// Seed of the generator and shuffle RNG.
    pub seed: u64,
    /// The injected majority value.
    pub majority_value: i32,
    /// Lower bound of random filler values (inclusive).
    pub filler_min: i32,
    /// Upper bound of random filler values (inclusive).
    pub filler_max: i32,
    /// Where the HTML report is written.
    pub output_path: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            brute_force_cap: DEFAULT_BRUTE_FORCE_CAP,
            repeats: DEFAULT_REPEATS,
            seed: DEFAULT_SEED,
            majority_value: DEFAULT_MAJORITY_VALUE,
            filler_min: DEFAULT_FILLER_MIN,
            filler_max: DEFAULT_FILLER_MAX,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl BenchConfig {
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_brute_force_cap(mut self, cap: usize) -> Self {
        self.brute_force_cap = cap;
        self
    }

    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Filler values as an inclusive range.
    pub fn filler_range(&self) -> RangeInclusive<i32> {
        self.filler_min..=self.filler_max
    }

    /// Whether brute force is timed at `size`.
    #[inline]
    pub fn times_brute_force(&self, size: usize) -> bool {
        size <= self.brute_force_cap
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_size == 0 {
            return Err(ConfigError::invalid("max_size", "must be at least 1"));
        }
        if self.repeats == 0 {
            return Err(ConfigError::invalid("repeats", "must be at least 1"));
        }
        if self.filler_min > self.filler_max {
            return Err(ConfigError::invalid(
                "filler_min",
                format!(
                    "{} is greater than filler_max {}",
                    self.filler_min, self.filler_max
                ),
            ));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigError::invalid("output_path", "must not be empty"));
        }
        Ok(())
    }
}
