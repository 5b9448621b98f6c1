//! Enumeration of fixed-size subsets
//!
//! Subsets are produced iteratively from an increasing index array, in
//! lexicographic order of original indices: for `[a, b, c]` and `k = 2`
//! the order is `[a, b]`, `[a, c]`, `[b, c]`. Elements inside a subset keep
//! their original relative order.

use num_bigint::BigUint;
use num_traits::One;

/// Lazy iterator over every size-`k` subset of a slice
///
/// Cloning the iterator (or calling [`subsets`] again) restarts the
/// enumeration and yields the identical sequence.
#[derive(Debug, Clone)]
pub struct Subsets<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

/// Enumerates all `C(n, k)` subsets of `items` with exactly `k` elements
///
/// `k = 0` yields a single empty subset, `k > n` yields nothing.
///
/// # Examples
///
/// ```rust
/// use shamvote::subsets::subsets;
///
/// let picked: Vec<Vec<&char>> = subsets(&['a', 'b', 'c'], 2).collect();
/// assert_eq!(picked, vec![vec![&'a', &'b'], vec![&'a', &'c'], vec![&'b', &'c']]);
/// ```
#[must_use]
pub fn subsets<T>(items: &[T], k: usize) -> Subsets<'_, T> {
    Subsets {
        items,
        indices: (0..k).collect(),
        started: false,
        exhausted: k > items.len(),
    }
}

impl<T> Subsets<'_, T> {
    /// Moves the index array to the next combination, returning false when done
    fn advance(&mut self) -> bool {
        let n = self.items.len();
        let k = self.indices.len();

        // Rightmost position that can still move right
        let Some(pos) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) else {
            return false;
        };

        self.indices[pos] += 1;
        for i in pos + 1..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
        true
    }
}

impl<'a, T> Iterator for Subsets<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        if self.started {
            if !self.advance() {
                self.exhausted = true;
                return None;
            }
        } else {
            self.started = true;
        }

        Some(self.indices.iter().map(|&i| &self.items[i]).collect())
    }
}

/// Exact binomial coefficient `C(n, k)`
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigUint;
/// use shamvote::subsets::binomial;
///
/// assert_eq!(binomial(4, 2), BigUint::from(6u32));
/// assert_eq!(binomial(3, 5), BigUint::from(0u32));
/// ```
#[must_use]
pub fn binomial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::ZERO;
    }
    let k = k.min(n - k);

    // Each prefix product is itself a binomial coefficient, so the division is exact
    let mut result = BigUint::one();
    for i in 0..k {
        result = result * BigUint::from(n - i) / BigUint::from(i + 1);
    }
    result
}
