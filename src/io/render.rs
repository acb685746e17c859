//! Text rendering of finished boards and entropy maps

use crate::io::configuration::{
    DECIDED_ENTROPY_GLYPH, ENTROPY_RADIX, UNCONSTRAINED_ENTROPY_GLYPH, UNDECIDED_GLYPH,
};
use crate::spatial::grid::{Cell, Entropy, Grid};

/// Glyph shown for one cell of the board
pub fn cell_glyph(cell: &Cell) -> char {
    cell.variant().map_or(UNDECIDED_GLYPH, |variant| variant.glyph)
}

/// Symbol shown for one cell of the entropy map
///
/// Counts print as a single base-36 digit; counts past the radix saturate
/// to the highest digit.
pub fn entropy_symbol(cell: &Cell) -> char {
    match cell.entropy() {
        None => DECIDED_ENTROPY_GLYPH,
        Some(Entropy::Unconstrained) => UNCONSTRAINED_ENTROPY_GLYPH,
        Some(Entropy::Options(count)) => {
            let digit =
                u32::try_from(count).map_or(ENTROPY_RADIX - 1, |c| c.min(ENTROPY_RADIX - 1));
            char::from_digit(digit, ENTROPY_RADIX).unwrap_or(UNCONSTRAINED_ENTROPY_GLYPH)
        }
    }
}

/// Board as text: one line per row, no trailing newline
pub fn render_board(grid: &Grid) -> String {
    render_with(grid, cell_glyph)
}

/// Entropy of every cell laid out like the board
pub fn render_entropy_map(grid: &Grid) -> String {
    render_with(grid, entropy_symbol)
}

fn render_with(grid: &Grid, symbol: impl Fn(&Cell) -> char) -> String {
    grid.rows()
        .map(|row| row.into_iter().map(&symbol).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
