use mem_dbg::{MemSize, SizeFlags};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Generates the sizes `base * {1, 2, 5}` for `base = 1, 10, 100, ...` up to `max_n`.
///
/// The result is strictly increasing and logarithmically spaced. The last
/// decade is still enumerated once `base` exceeds `max_n / 10`.
///
/// ## Examples
/// ```
/// use majority_bench::gen_sequences::log_checkpoints;
///
/// assert_eq!(log_checkpoints(100), vec![1, 2, 5, 10, 20, 50, 100]);
/// assert_eq!(log_checkpoints(30), vec![1, 2, 5, 10, 20]);
/// assert!(log_checkpoints(0).is_empty());
/// ```
pub fn log_checkpoints(max_n: usize) -> Vec<usize> {
    let mut checkpoints = Vec::new();
    let mut base = 1;
    while base <= max_n {
        for factor in [1, 2, 5] {
            let value = base * factor;
            if value <= max_n {
                checkpoints.push(value);
            }
        }
        if base > max_n / 10 {
            break;
        }
        base *= 10;
    }
    checkpoints
}

/// A growing sequence of `i32` that has a majority element at every length.
///
/// Each call to [`push_next`](Self::push_next) appends the majority value if
/// its count would otherwise be at most half of the new length, and a random
/// filler value otherwise. So after `n >= 1` pushes the majority value occurs
/// more than `n / 2` times.
///
/// Filler values are drawn uniformly from a range that may contain the
/// majority value itself; such collisions only increase its share.
///
/// ## Examples
/// ```
/// use majority_bench::gen_sequences::MajoritySequence;
/// use majority_bench::algorithms::majority;
///
/// let mut seq = MajoritySequence::new(1, 2..=1_000, 42);
/// seq.grow_to(101);
/// seq.shuffle();
/// assert_eq!(seq.len(), 101);
/// assert_eq!(majority(seq.as_slice()), Some(&1));
/// ```
#[derive(Debug, Clone)]
pub struct MajoritySequence {
    data: Vec<i32>,
    majority: i32,
    majority_count: usize,
    filler: RangeInclusive<i32>,
    rng: StdRng,
}

impl MajoritySequence {
    pub fn new(majority: i32, filler: RangeInclusive<i32>, seed: u64) -> Self {
        Self::with_capacity(majority, filler, seed, 0)
    }

    /// Same as [`new`](Self::new), reserving room for `capacity` values.
    pub fn with_capacity(
        majority: i32,
        filler: RangeInclusive<i32>,
        seed: u64,
        capacity: usize,
    ) -> Self {
        assert!(!filler.is_empty(), "filler range must not be empty");
        Self {
            data: Vec::with_capacity(capacity),
            majority,
            majority_count: 0,
            filler,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Appends one value and returns it.
    pub fn push_next(&mut self) -> i32 {
        let n = self.data.len() + 1;
        let value = if self.majority_count <= n / 2 {
            self.majority_count += 1;
            self.majority
        } else {
            self.rng.random_range(self.filler.clone())
        };
        self.data.push(value);
        value
    }

    /// Pushes values until the sequence holds `n` elements.
    /// Does nothing if it is already at least that long.
    pub fn grow_to(&mut self, n: usize) {
        self.data.reserve(n.saturating_sub(self.data.len()));
        while self.data.len() < n {
            self.push_next();
        }
    }

    /// Shuffles the whole sequence in place.
    ///
    /// Uses the same random stream as the filler values, so a run is fully
    /// determined by the seed.
    pub fn shuffle(&mut self) {
        self.data.shuffle(&mut self.rng);
    }

    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The injected majority value.
    #[inline]
    pub fn majority(&self) -> i32 {
        self.majority
    }

    /// How many times the majority value was injected. Filler collisions are
    /// not counted, so the real number of occurrences can be higher.
    #[inline]
    pub fn majority_count(&self) -> usize {
        self.majority_count
    }

    /// Bytes held by the values, including spare capacity.
    pub fn heap_size(&self) -> usize {
        self.data.mem_size(SizeFlags::CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;

    #[test]
    fn test_checkpoints_up_to_one_million() {
        let checkpoints = log_checkpoints(1_000_000);
        let mut expected = Vec::new();
        let mut base = 1;
        while base < 1_000_000 {
            expected.extend([base, 2 * base, 5 * base]);
            base *= 10;
        }
        expected.push(1_000_000);

        assert_eq!(checkpoints, expected);
        assert_eq!(checkpoints.len(), 19);
        assert!(checkpoints.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_checkpoints_not_power_of_ten() {
        assert_eq!(log_checkpoints(1), vec![1]);
        assert_eq!(log_checkpoints(4), vec![1, 2]);
        assert_eq!(log_checkpoints(12), vec![1, 2, 5, 10]);
        assert_eq!(
            log_checkpoints(250),
            vec![1, 2, 5, 10, 20, 50, 100, 200]
        );
    }

    #[test]
    fn test_majority_invariant_while_growing() {
        let mut seq = MajoritySequence::new(1, 2..=1_000_000, 42);
        for n in 1..=20_000 {
            seq.push_next();
            assert_eq!(seq.len(), n);
            assert!(
                seq.majority_count() > n / 2,
                "majority count {} not above half of {}",
                seq.majority_count(),
                n
            );
        }
        let actual = seq.as_slice().iter().filter(|&&v| v == 1).count();
        assert!(actual >= seq.majority_count());
    }

    #[test]
    fn test_filler_stays_in_range() {
        let mut seq = MajoritySequence::new(-3, 10..=20, 5);
        seq.grow_to(5_000);
        assert!(seq
            .as_slice()
            .iter()
            .all(|&v| v == -3 || (10..=20).contains(&v)));
    }

    #[test]
    fn test_filler_collisions_are_harmless() {
        // the filler range only contains the majority value
        let mut seq = MajoritySequence::new(4, 4..=4, 1);
        seq.grow_to(1_000);
        assert!(seq.as_slice().iter().all(|&v| v == 4));
        assert!(seq.majority_count() < 1_000);
    }

    #[test]
    fn test_shuffle_keeps_values() {
        let mut seq = MajoritySequence::new(1, 2..=100, 42);
        seq.grow_to(2_000);
        let mut before = seq.as_slice().to_vec();
        seq.shuffle();
        let mut after = seq.as_slice().to_vec();
        assert_ne!(before, after);

        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn test_heap_size_counts_capacity() {
        let seq = MajoritySequence::with_capacity(1, 2..=10, 0, 1_000);
        assert!(seq.is_empty());
        assert!(seq.heap_size() >= 1_000 * std::mem::size_of::<i32>());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = MajoritySequence::new(1, 2..=1_000_000, 42);
        let mut b = MajoritySequence::new(1, 2..=1_000_000, 42);
        a.grow_to(500);
        b.grow_to(500);
        a.shuffle();
        b.shuffle();
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn test_finders_agree_at_checkpoints() {
        let mut seq = MajoritySequence::new(1, 2..=1_000_000, 42);
        for n in log_checkpoints(2_000) {
            seq.grow_to(n);
            seq.shuffle();
            for algo in Algorithm::ALL {
                assert_eq!(algo.find(seq.as_slice()), Some(1), "{algo} at n = {n}");
            }
        }
    }
}
