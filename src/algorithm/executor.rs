//! Collapse step and the generation loop

use crate::{
    algorithm::propagation::propagate,
    algorithm::selection::{RandomSelector, lowest_entropy_cells},
    io::error::{AlgorithmError, ErrorContext, Result, WithContext, computation_error},
    spatial::grid::{Cell, Grid, Position, out_of_bounds},
    spatial::tiles::{Palette, TileVariant},
};
use rand::{Rng, rngs::StdRng};
use tracing::{debug, info, warn};

/// Whether the collapse loop still has undecided cells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// At least one cell is undecided
    Running,
    /// Every cell is decided
    Done,
}

/// Collapse the cell at `position` to a uniformly chosen allowed variant
///
/// The cell must have been reached by a propagation pass since its
/// neighbours last changed; the allowed set is read as it stands.
///
/// # Errors
///
/// Returns:
/// - `Contradiction` if the cell has no allowed variant (iteration is 0; the
///   executor fills in the real step)
/// - `InvalidParameter` if `position` is outside the grid
/// - `Computation` if the cell is decided or has never been propagated
/// - `InvalidVariantIndex` if the allowed set addresses a variant the
///   palette does not have
pub fn collapse<R: Rng>(
    grid: &mut Grid,
    palette: &Palette,
    position: Position,
    random_selector: &mut RandomSelector<R>,
) -> Result<TileVariant> {
    let cell = grid
        .get(position)
        .ok_or_else(|| out_of_bounds(position, grid.dimensions()))?;

    let superposition = match cell {
        Cell::Undecided(superposition) => superposition,
        Cell::Decided { .. } => {
            return Err(computation_error(
                "collapse",
                &format!("cell {position} is already decided"),
            ));
        }
    };

    if superposition.entropy().options().is_none() {
        return Err(computation_error(
            "collapse",
            &format!("cell {position} has not been propagated"),
        ));
    }

    let Some(variant_index) = random_selector.choose_variant(superposition.allowed()) else {
        return Err(AlgorithmError::Contradiction {
            position,
            iteration: 0,
        });
    };

    let variant = *palette
        .get(variant_index)
        .ok_or(AlgorithmError::InvalidVariantIndex {
            index: variant_index,
            palette_size: palette.len(),
        })?;

    grid.decide(position, variant_index, variant)?;
    Ok(variant)
}

/// Minimum-entropy collapse loop over a fixed grid
///
/// Each step propagates constraints, picks one of the lowest-entropy
/// undecided cells at random and collapses it. The palette is shared
/// read-only; the grid is owned by the executor until `finish`.
pub struct CollapseExecutor<'p, R = StdRng> {
    palette: &'p Palette,
    /// Board being collapsed
    pub grid: Grid,
    /// Random source for tie-breaks and variant choice
    pub random_selector: RandomSelector<R>,
    /// Number of completed collapse steps
    pub iteration: usize,
}

impl<'p, R: Rng> CollapseExecutor<'p, R> {
    /// Create an executor over `grid`
    pub const fn new(grid: Grid, palette: &'p Palette, random_selector: RandomSelector<R>) -> Self {
        Self {
            palette,
            grid,
            random_selector,
            iteration: 0,
        }
    }

    /// Palette the grid is collapsed against
    pub const fn palette(&self) -> &'p Palette {
        self.palette
    }

    /// Current board
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of steps the full loop runs: one per cell
    pub fn total_steps(&self) -> usize {
        self.grid.len()
    }

    /// Loop state derived from the grid
    pub fn state(&self) -> RunState {
        if self.grid.is_complete() {
            RunState::Done
        } else {
            RunState::Running
        }
    }

    /// Run one propagate, select, collapse step
    ///
    /// On a finished grid this propagates and reports `Done` without
    /// collapsing anything.
    ///
    /// # Errors
    ///
    /// Returns `Contradiction` if the selected cell has no allowed variant,
    /// plus any error from `collapse`.
    pub fn step(&mut self) -> Result<RunState> {
        propagate(&mut self.grid, self.palette);

        let candidates = lowest_entropy_cells(&self.grid);
        let Some(position) = self.random_selector.choose_position(&candidates) else {
            return Ok(RunState::Done);
        };

        self.iteration += 1;
        let context = ErrorContext {
            iteration: Some(self.iteration),
            position: Some(position),
            ..Default::default()
        };

        let variant = collapse(
            &mut self.grid,
            self.palette,
            position,
            &mut self.random_selector,
        )
        .with_context(context)
        .inspect_err(|error| {
            if matches!(error, AlgorithmError::Contradiction { .. }) {
                warn!(
                    row = position.row,
                    col = position.col,
                    iteration = self.iteration,
                    "contradiction, no variant fits"
                );
            }
        })?;

        debug!(
            row = position.row,
            col = position.col,
            glyph = %variant.glyph,
            candidates = candidates.len(),
            iteration = self.iteration,
            "collapsed cell"
        );

        Ok(self.state())
    }

    /// Final propagation so every remaining set reflects the finished board
    pub fn finish(mut self) -> Grid {
        propagate(&mut self.grid, self.palette);
        info!(
            rows = self.grid.height(),
            cols = self.grid.width(),
            steps = self.iteration,
            "collapse finished"
        );
        self.grid
    }

    /// Run `width * height` steps, then the final propagation
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a step; no partial grid is returned.
    pub fn run(mut self) -> Result<Grid> {
        for _ in 0..self.total_steps() {
            self.step()?;
        }
        Ok(self.finish())
    }
}

/// Collapse `grid` completely against `palette`
///
/// # Errors
///
/// Returns `Contradiction` when a selected cell has no allowed variant.
pub fn run_collapse<R: Rng>(
    grid: Grid,
    palette: &Palette,
    random_selector: RandomSelector<R>,
) -> Result<Grid> {
    CollapseExecutor::new(grid, palette, random_selector).run()
}

/// Build an empty `width` x `height` grid and collapse it
///
/// # Errors
///
/// Returns `InvalidParameter` for a zero-area or oversize grid and
/// `Contradiction` when a selected cell has no allowed variant.
pub fn generate_pattern<R: Rng>(
    width: usize,
    height: usize,
    palette: &Palette,
    random_selector: RandomSelector<R>,
) -> Result<Grid> {
    let grid = Grid::new(width, height)?;
    run_collapse(grid, palette, random_selector)
}
