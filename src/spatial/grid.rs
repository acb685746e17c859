//! Grid state for the collapse loop
//!
//! Cells are stored in a single row-major `Array2`. Each cell is either
//! undecided, carrying the constraint sets from its last propagation pass, or
//! decided with a fixed palette variant. Neighbours are found by index
//! arithmetic with bounds checks.

use ndarray::Array2;
use std::fmt;

use crate::algorithm::bitset::TileBitset;
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{AlgorithmError, Result, computation_error, invalid_parameter};
use crate::spatial::tiles::{Direction, TileVariant};

/// Row/column address of a cell
///
/// Ordering is row-major, matching the scan order of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Zero-based row, counted from the top
    pub row: usize,
    /// Zero-based column, counted from the left
    pub col: usize,
}

impl Position {
    /// Create a position
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Number of variants still consistent with a cell's neighbours
///
/// `Unconstrained` means the cell has not been reached by any propagation
/// pass. It ranks above every `Options` value, so a cell with zero options
/// always sorts first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Entropy {
    /// Count of allowed variants
    Options(usize),
    /// No directional information yet
    Unconstrained,
}

impl Entropy {
    /// Allowed-variant count, if known
    pub const fn options(self) -> Option<usize> {
        match self {
            Self::Options(count) => Some(count),
            Self::Unconstrained => None,
        }
    }
}

/// Constraint state of an undecided cell
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Superposition {
    constraints: [Option<TileBitset>; 4],
    allowed: TileBitset,
}

impl Superposition {
    /// Combine per-direction sets (in `Direction::ALL` order) into an allowed set
    ///
    /// The allowed set is the intersection of every present directional set.
    /// An empty directional set empties the intersection.
    pub fn from_constraints(constraints: [Option<TileBitset>; 4]) -> Self {
        let mut allowed: Option<TileBitset> = None;
        for set in constraints.iter().flatten() {
            match allowed.as_mut() {
                None => allowed = Some(set.clone()),
                Some(current) => current.intersect_with(set),
            }
        }

        Self {
            allowed: allowed.unwrap_or_default(),
            constraints,
        }
    }

    /// Directional set last computed for `direction`
    pub fn constraint(&self, direction: Direction) -> Option<&TileBitset> {
        self.constraints
            .get(direction.index())
            .and_then(Option::as_ref)
    }

    /// Variants consistent with every known neighbour
    pub const fn allowed(&self) -> &TileBitset {
        &self.allowed
    }

    /// Entropy derived from the allowed set
    pub fn entropy(&self) -> Entropy {
        if self.constraints.iter().any(Option::is_some) {
            Entropy::Options(self.allowed.count())
        } else {
            Entropy::Unconstrained
        }
    }

    /// Whether propagation left no variant for this cell
    pub fn is_contradiction(&self) -> bool {
        matches!(self.entropy(), Entropy::Options(0))
    }
}

/// State of a single grid cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Still open; holds the sets from the last propagation pass
    Undecided(Superposition),
    /// Fixed to one palette variant
    Decided {
        /// Index of the variant in the palette
        variant_index: usize,
        /// The chosen variant
        variant: TileVariant,
    },
}

impl Default for Cell {
    fn default() -> Self {
        Self::Undecided(Superposition::default())
    }
}

impl Cell {
    /// The chosen variant, if decided
    pub const fn variant(&self) -> Option<&TileVariant> {
        match self {
            Self::Decided { variant, .. } => Some(variant),
            Self::Undecided(_) => None,
        }
    }

    /// Palette index of the chosen variant, if decided
    pub const fn variant_index(&self) -> Option<usize> {
        match self {
            Self::Decided { variant_index, .. } => Some(*variant_index),
            Self::Undecided(_) => None,
        }
    }

    /// Constraint state, if undecided
    pub const fn superposition(&self) -> Option<&Superposition> {
        match self {
            Self::Undecided(superposition) => Some(superposition),
            Self::Decided { .. } => None,
        }
    }

    /// Whether the cell has been collapsed
    pub const fn is_decided(&self) -> bool {
        matches!(self, Self::Decided { .. })
    }

    /// Entropy of an undecided cell; `None` once decided
    pub fn entropy(&self) -> Option<Entropy> {
        self.superposition().map(Superposition::entropy)
    }
}

/// Fixed-size board of cells, `height` rows by `width` columns
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create a grid with every cell undecided and unconstrained
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero or exceeds
    /// `MAX_GRID_DIMENSION`.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;

        Ok(Self {
            cells: Array2::from_shape_fn((height, width), |_| Cell::default()),
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; zero-area grids are rejected at construction
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `position`
    pub fn get(&self, position: Position) -> Option<&Cell> {
        self.cells.get([position.row, position.col])
    }

    /// Mutable cell at `position`
    pub fn get_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.cells.get_mut([position.row, position.col])
    }

    /// Neighbouring position in `direction`, or `None` past the grid edge
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        let (d_row, d_col) = direction.offset();
        let row = position.row.checked_add_signed(d_row)?;
        let col = position.col.checked_add_signed(d_col)?;
        (row < self.height() && col < self.width()).then_some(Position::new(row, col))
    }

    /// Neighbouring cell in `direction`, or `None` past the grid edge
    pub fn neighbor_cell(&self, position: Position, direction: Direction) -> Option<&Cell> {
        self.neighbor(position, direction)
            .and_then(|neighbor| self.get(neighbor))
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (rows, cols) = self.dimensions();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// Cells with their positions in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| (Position::new(row, col), cell))
    }

    /// Cells grouped by row, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Cell>> + '_ {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.into_iter().collect())
    }

    /// Number of decided cells
    pub fn decided_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_decided()).count()
    }

    /// Whether every cell has been decided
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Cell::is_decided)
    }

    /// Fix the cell at `position` to a palette variant
    ///
    /// A cell is decided at most once.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a position outside the grid and
    /// `Computation` if the cell is already decided.
    pub fn decide(
        &mut self,
        position: Position,
        variant_index: usize,
        variant: TileVariant,
    ) -> Result<()> {
        let dimensions = self.dimensions();
        let cell = self
            .get_mut(position)
            .ok_or_else(|| out_of_bounds(position, dimensions))?;

        if cell.is_decided() {
            return Err(computation_error(
                "decide",
                &format!("cell {position} is already decided"),
            ));
        }

        *cell = Cell::Decided {
            variant_index,
            variant,
        };
        Ok(())
    }

    /// Replace the constraint state of an undecided cell
    ///
    /// Decided cells and out-of-bounds positions are left untouched.
    pub fn constrain(&mut self, position: Position, superposition: Superposition) {
        if let Some(cell) = self.get_mut(position).filter(|cell| !cell.is_decided()) {
            *cell = Cell::Undecided(superposition);
        }
    }
}

/// Error for a position outside a grid of the given (rows, cols)
pub fn out_of_bounds(position: Position, dimensions: (usize, usize)) -> AlgorithmError {
    invalid_parameter(
        "position",
        &position,
        &format!(
            "outside grid of {} rows by {} columns",
            dimensions.0, dimensions.1
        ),
    )
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(
            parameter,
            &value,
            &"grid must have at least one row and one column",
        ));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}
