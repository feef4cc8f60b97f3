//! Record selection for simulated scans

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks an index into a non-empty collection
#[cfg_attr(test, mockall::automock)]
pub trait Selector: Send {
    /// Index in `0..len`; `len` is never zero
    fn select(&mut self, len: usize) -> usize;
}

/// Uniformly random selection
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Reproducible selector
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Selector seeded from the operating system
    #[must_use]
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Selector for RandomSelector {
    fn select(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Always the same position, wrapped to the collection length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedSelector(pub usize);

impl Selector for FixedSelector {
    fn select(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_selection_is_reproducible() {
        let mut a = RandomSelector::seeded(7);
        let mut b = RandomSelector::seeded(7);
        let left: Vec<_> = (0..16).map(|_| a.select(3)).collect();
        let right: Vec<_> = (0..16).map(|_| b.select(3)).collect();
        assert_eq!(left, right);
        assert!(left.iter().all(|&i| i < 3));
    }

    #[test]
    fn fixed_wraps() {
        assert_eq!(FixedSelector(1).select(3), 1);
        assert_eq!(FixedSelector(4).select(3), 1);
    }
}
