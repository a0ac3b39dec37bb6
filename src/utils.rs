use std::hint::black_box;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, Instant};

/// Value recorded by [`observe`] when no majority was found.
pub const NO_MAJORITY: i64 = -1;

static SINK: AtomicI64 = AtomicI64::new(0);

/// Records the result of a measured call in a process-wide atomic, so the
/// optimizer cannot drop the call. Returns `result` unchanged.
#[inline(always)]
pub fn observe(result: Option<i32>) -> Option<i32> {
    SINK.store(result.map_or(NO_MAJORITY, i64::from), Ordering::Relaxed);
    result
}

/// The last value stored by [`observe`].
pub fn last_observed() -> i64 {
    SINK.load(Ordering::Relaxed)
}

pub struct TimingQueries {
    timings: Vec<Duration>,
    time: Instant,
    n_queries: usize,
}

impl TimingQueries {
    pub fn new(n_runs: usize, n_queries: usize) -> Self {
        Self {
            timings: Vec::with_capacity(n_runs),
            time: Instant::now(),
            n_queries,
        }
    }

    #[inline(always)]
    pub fn start(&mut self) {
        self.time = Instant::now();
    }

    #[inline(always)]
    pub fn stop(&mut self) {
        self.timings.push(self.time.elapsed());
    }

    /// Returns minimum, maximum, average time per query in nanosecs.
    /// All zeros if nothing was timed.
    pub fn get_float(&self) -> (f64, f64, f64) {
        if self.timings.is_empty() || self.n_queries == 0 {
            return (0.0, 0.0, 0.0);
        }
        let n_queries = self.n_queries as f64;
        let nanos = |d: &Duration| d.as_nanos() as f64;

        let min = self.timings.iter().map(nanos).fold(f64::INFINITY, f64::min) / n_queries;
        let max = self.timings.iter().map(nanos).fold(0.0, f64::max) / n_queries;
        let avg = self.timings.iter().map(nanos).sum::<f64>()
            / (self.timings.len() as f64 * n_queries);
        (min, max, avg)
    }

    /// Same as [`get_float`](Self::get_float), in microsecs.
    pub fn get_micros(&self) -> (f64, f64, f64) {
        let (min, max, avg) = self.get_float();
        (min / 1_000.0, max / 1_000.0, avg / 1_000.0)
    }
}

/// Runs `op` `repeats` times back to back and returns the mean time per call
/// in microseconds, together with the result of the last call.
///
/// The whole batch is timed at once with a monotonic clock.
///
/// ## Examples
/// ```
/// use majority_bench::utils::time_us;
///
/// let (mean, last) = time_us(10, || 2 + 2);
/// assert!(mean >= 0.0);
/// assert_eq!(last, Some(4));
/// ```
pub fn time_us<R>(repeats: usize, mut op: impl FnMut() -> R) -> (f64, Option<R>) {
    if repeats == 0 {
        return (0.0, None);
    }

    let mut last = None;
    let mut t = TimingQueries::new(1, repeats);
    t.start();
    for _ in 0..repeats {
        last = Some(black_box(op()));
    }
    t.stop();

    let (_, _, avg) = t.get_micros();
    (avg, last)
}
