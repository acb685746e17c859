//! Minimum-entropy cell selection and the injected random source
//!
//! Selection is a pure scan of the grid; all randomness goes through
//! `RandomSelector`, so a seeded selector reproduces a whole run.

use crate::{
    algorithm::bitset::TileBitset,
    spatial::grid::{Entropy, Grid, Position},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Lowest entropy among undecided cells, `None` once every cell is decided
pub fn minimum_entropy(grid: &Grid) -> Option<Entropy> {
    grid.iter().filter_map(|(_, cell)| cell.entropy()).min()
}

/// Undecided positions sharing the lowest entropy on the grid
///
/// Decided cells never take part. Positions come back in row-major scan
/// order, so a fixed grid state always yields the same list. The list is
/// empty only when every cell is decided.
pub fn lowest_entropy_cells(grid: &Grid) -> Vec<Position> {
    let Some(lowest) = minimum_entropy(grid) else {
        return Vec::new();
    };

    grid.iter()
        .filter(|(_, cell)| cell.entropy() == Some(lowest))
        .map(|(position, _)| position)
        .collect()
}

/// Random source for tie-breaks and variant choice
///
/// Generic over the generator so callers can inject any `Rng`; the default is
/// a seeded `StdRng` for reproducible runs.
pub struct RandomSelector<R = StdRng> {
    rng: R,
}

impl RandomSelector<StdRng> {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a selector seeded from the operating system
    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSelector<R> {
    /// Wrap an existing generator
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Uniformly pick one of `positions`
    pub fn choose_position(&mut self, positions: &[Position]) -> Option<Position> {
        if positions.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..positions.len());
        positions.get(index).copied()
    }

    /// Uniformly pick one variant index present in `allowed`
    pub fn choose_variant(&mut self, allowed: &TileBitset) -> Option<usize> {
        let count = allowed.count();
        if count == 0 {
            return None;
        }
        allowed.nth(self.rng.random_range(0..count))
    }
}
