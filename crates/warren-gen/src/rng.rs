//! Dice rolls and table sampling on top of [`rand::Rng`].

use rand::{Rng, RngExt};

/// Roll one die with `sides` faces, yielding a value in `1..=sides`.
#[inline]
pub fn roll_die<R: Rng>(rng: &mut R, sides: i32) -> i32 {
    rng.random_range(1..=sides)
}

/// Sum of `count` rolls of a `sides`-sided die (`count`d`sides`).
pub fn roll_dice<R: Rng>(rng: &mut R, count: i32, sides: i32) -> i32 {
    (0..count).map(|_| roll_die(rng, sides)).sum()
}

/// Sample `count` distinct indices from `0..len`, uniformly without
/// replacement. If `count >= len` every index is returned.
///
/// Partial Fisher–Yates: only the first `count` slots are shuffled.
pub fn sample_indices<R: Rng>(rng: &mut R, len: usize, count: usize) -> Vec<usize> {
    let count = count.min(len);
    let mut pool: Vec<usize> = (0..len).collect();
    for i in 0..count {
        let j = rng.random_range(i..len);
        pool.swap(i, j);
    }
    pool.truncate(count);
    pool
}

/// A discrete distribution over values with relative integer frequencies.
///
/// Built from `(value, weight)` pairs; [`roll`](Self::roll) draws one value
/// with probability proportional to its weight.
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    entries: Vec<(T, u32)>,
    total: u32,
}

impl<T: Copy> WeightedTable<T> {
    /// Build a table from `(value, relative weight)` pairs.
    ///
    /// Zero-weight entries are dropped.
    ///
    /// # Panics
    ///
    /// Panics if no entry has a positive weight.
    pub fn new(entries: &[(T, u32)]) -> Self {
        let entries: Vec<(T, u32)> = entries.iter().copied().filter(|&(_, w)| w > 0).collect();
        let total = entries.iter().map(|&(_, w)| w).sum();
        assert!(total > 0, "weighted table needs at least one positive weight");
        Self { entries, total }
    }

    /// Draw one value from the table.
    pub fn roll<R: Rng>(&self, rng: &mut R) -> T {
        let mut hit = rng.random_range(0..self.total);
        for &(value, w) in &self.entries {
            if hit < w {
                return value;
            }
            hit -= w;
        }
        unreachable!("draw is below the total weight")
    }
}
