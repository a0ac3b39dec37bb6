//! Majority-element finders: Boyer-Moore voting, sort-based and brute force.
//!
//! The **majority element** of a sequence of length `n` is the value that
//! appears more than ⌊n/2⌋ times. All finders return [`None`] when there is
//! no such value, and they agree whenever one exists.

use serde::{Deserialize, Serialize};

/// Boyer-Moore majority vote algorithm to find the majority element in a slice, if it exists.
///
/// This function uses the Boyer–Moore Majority Vote algorithm,
/// which runs in O(n) time and O(1) additional space.
/// It first determines a candidate by canceling out different
/// elements, then verifies whether that candidate actually is
/// the majority by counting its occurrences.
///
/// # Type Parameters
/// - `T`: element type, must implement `Eq` for comparisons.
///
/// # Arguments
/// - `a`: a slice of elements to search for the majority element.
///
/// # Returns
/// - `Some(&T)` if a majority element exists.
/// - `None` if no majority element is present.
///
/// # Examples
/// ```
/// use majority_bench::algorithms::majority;
///
/// let nums = [3, 3, 4, 2, 3, 3, 5];
/// assert_eq!(majority(&nums), Some(&3));
///
/// let nums = [1, 2, 3, 4];
/// assert_eq!(majority(&nums), None);
/// ```
pub fn majority<T: Eq>(a: &[T]) -> Option<&T> {
    let (candidate, _) = a.iter().fold((None, 0usize), |(cand, count), x| {
        if count == 0 {
            (Some(x), 1)
        } else if Some(x) == cand {
            (cand, count + 1)
        } else {
            (cand, count - 1)
        }
    });
    match candidate {
        Some(c) if a.iter().filter(|&v| v == c).count() > a.len() / 2 => Some(c),
        _ => None,
    }
}

/// Sort-based majority finder.
///
/// Takes the sequence by value, sorts it and checks the element at position
/// `n/2`: a majority element always covers the middle of a sorted sequence,
/// so it is the only possible candidate. Runs in O(n log n) time.
///
/// The caller keeps its own data untouched by passing a copy.
///
/// # Examples
/// ```
/// use majority_bench::algorithms::majority_by_sort;
///
/// let data = vec![2, 1, 2, 3, 2];
/// assert_eq!(majority_by_sort(data.clone()), Some(2));
/// assert_eq!(data, vec![2, 1, 2, 3, 2]);
///
/// assert_eq!(majority_by_sort(vec![1, 1, 2, 2, 3]), None);
/// ```
pub fn majority_by_sort<T: Ord>(mut a: Vec<T>) -> Option<T> {
    if a.is_empty() {
        return None;
    }

    a.sort_unstable();
    let mid = a.len() / 2;
    let occurrences = a.iter().filter(|&v| *v == a[mid]).count();

    if occurrences > a.len() / 2 {
        Some(a.swap_remove(mid))
    } else {
        None
    }
}

/// Brute-force majority finder.
///
/// Counts the occurrences of every element across the whole slice and keeps
/// the most frequent one. On ties the first element reaching the best count
/// wins. Runs in O(n²) time and O(1) space; only meant as a trusted baseline
/// on small inputs.
///
/// # Examples
/// ```
/// use majority_bench::algorithms::majority_brute_force;
///
/// assert_eq!(majority_brute_force(&[1, 1, 1, 2, 3]), Some(&1));
/// assert_eq!(majority_brute_force(&[7]), Some(&7));
/// assert_eq!(majority_brute_force(&[1, 1, 2, 2, 3]), None);
/// ```
pub fn majority_brute_force<T: Eq>(a: &[T]) -> Option<&T> {
    let mut best: Option<(&T, usize)> = None;

    for x in a {
        let count = a.iter().filter(|&v| v == x).count();
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((x, count));
        }
    }

    match best {
        Some((x, count)) if count > a.len() / 2 => Some(x),
        _ => None,
    }
}

/// The majority finders compared by the benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    BoyerMoore,
    Sort,
    BruteForce,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::BoyerMoore, Algorithm::Sort, Algorithm::BruteForce];

    /// Short label used in tables and log lines.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BoyerMoore => "Moore",
            Algorithm::Sort => "Sort",
            Algorithm::BruteForce => "Brute",
        }
    }

    /// Runs the finder on `a`. The sort-based finder works on a private copy.
    #[inline]
    pub fn find<T: Ord + Copy>(self, a: &[T]) -> Option<T> {
        match self {
            Algorithm::BoyerMoore => majority(a).copied(),
            Algorithm::Sort => majority_by_sort(a.to_vec()),
            Algorithm::BruteForce => majority_brute_force(a).copied(),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
