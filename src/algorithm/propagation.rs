//! Constraint propagation from decided neighbours
//!
//! Each pass rebuilds every undecided cell's four directional sets from its
//! decided neighbours and intersects them into the allowed set.

use crate::{
    algorithm::bitset::TileBitset,
    spatial::grid::{Cell, Grid, Position, Superposition},
    spatial::tiles::{Direction, Palette, TileVariant},
};
use tracing::trace;

/// Variants that may sit with `neighbor` on their `direction` side
///
/// A candidate qualifies when its code on `direction` equals the neighbour's
/// code on the opposite side, e.g. for `Up` the candidate's `up` must equal
/// the neighbour's `down`.
pub fn compatible_variants(
    palette: &Palette,
    direction: Direction,
    neighbor: &TileVariant,
) -> TileBitset {
    let mut result = TileBitset::new(palette.len());
    for (index, candidate) in palette.variants().iter().enumerate() {
        if candidate.fits_beside(direction, neighbor) {
            result.insert(index);
        }
    }
    result
}

/// Directional set imposed on `position` by its neighbour in `direction`
///
/// A decided neighbour restricts the set to compatible variants. An undecided
/// neighbour, or no neighbour at all past the grid edge, leaves the full
/// palette.
pub fn directional_constraint(
    grid: &Grid,
    palette: &Palette,
    position: Position,
    direction: Direction,
) -> TileBitset {
    match grid.neighbor_cell(position, direction) {
        Some(Cell::Decided { variant, .. }) => compatible_variants(palette, direction, variant),
        Some(Cell::Undecided(_)) | None => TileBitset::all(palette.len()),
    }
}

/// Constraint state for the cell at `position` given its current neighbours
pub fn superposition_at(grid: &Grid, palette: &Palette, position: Position) -> Superposition {
    let constraints = Direction::ALL
        .map(|direction| Some(directional_constraint(grid, palette, position, direction)));
    Superposition::from_constraints(constraints)
}

/// Recompute every undecided cell's directional sets, allowed set and entropy
///
/// Sets are rebuilt from scratch on each pass. Decided cells are left as they
/// are and only act as neighbours. Only decided neighbours constrain, so the
/// result does not depend on scan order and a second pass with no collapse in
/// between changes nothing.
pub fn propagate(grid: &mut Grid, palette: &Palette) {
    let mut contradictions = 0usize;

    for position in grid.positions() {
        if grid.get(position).is_none_or(Cell::is_decided) {
            continue;
        }

        let superposition = superposition_at(grid, palette, position);
        if superposition.is_contradiction() {
            contradictions += 1;
        }
        grid.constrain(position, superposition);
    }

    trace!(
        decided = grid.decided_count(),
        cells = grid.len(),
        contradictions,
        "propagated constraints"
    );
}
