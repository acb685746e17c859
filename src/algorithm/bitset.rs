//! Variant sets over palette indices
//!
//! Every directional constraint and allowed set in the grid is a
//! `TileBitset` sized to the palette it was computed against.

use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over palette variant indices
///
/// Uses 0-based indexing matching `Palette::variants`. Provides O(1)
/// membership testing and in-place intersection for constraint sets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileBitset {
    bits: BitVec,
    max_tiles: usize,
}

impl TileBitset {
    /// Create a bitset with no variants present
    pub fn new(max_tiles: usize) -> Self {
        Self {
            bits: bitvec![0; max_tiles],
            max_tiles,
        }
    }

    /// Create a bitset containing every variant
    pub fn all(max_tiles: usize) -> Self {
        Self {
            bits: bitvec![1; max_tiles],
            max_tiles,
        }
    }

    /// Insert a variant index, ignoring indices past the capacity
    pub fn insert(&mut self, tile: usize) {
        if tile < self.max_tiles {
            self.bits.set(tile, true);
        }
    }

    /// Test variant membership
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Intersect this bitset with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Test if no variants are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count variants in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// The `n`-th present variant in ascending index order
    pub fn nth(&self, n: usize) -> Option<usize> {
        self.bits.iter_ones().nth(n)
    }

    /// Extract all variant indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for TileBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileBitset({} tiles: {:?})", self.count(), self.to_vec())
    }
}
