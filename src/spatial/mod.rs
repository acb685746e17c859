//! Spatial data structures for the collapse loop
//!
//! This module contains:
//! - The tile palette and connector signatures
//! - The grid of cells and its neighbour arithmetic

/// Grid state management and cell model
pub mod grid;
/// Tile variants, connector sides and palettes
pub mod tiles;

pub use grid::{Cell, Entropy, Grid, Position};
pub use tiles::{Direction, Palette, Sides, TileVariant};
