//! Benchmark of three majority-element algorithms: Boyer-Moore voting,
//! sort-based and brute force.
//!
//! A synthetic sequence with a guaranteed majority element is grown up to a
//! maximum size and the finders are timed at logarithmically spaced
//! checkpoints. Results are printed as a table and rendered as an HTML chart.

pub mod algorithms;
pub use algorithms::{majority, majority_brute_force, majority_by_sort, Algorithm};

pub mod gen_sequences;
pub use gen_sequences::{log_checkpoints, MajoritySequence};

pub mod utils;

pub mod config;
pub use config::BenchConfig;

pub mod error;
pub use error::{BenchError, ConfigError};

pub mod bench;
pub use bench::{BenchRow, Benchmark};

pub mod report;
