//! Generation constants and runtime configuration defaults

// Default values for configurable parameters
/// Default pattern width in tiles
pub const DEFAULT_WIDTH: usize = 10;

/// Default pattern height in tiles
pub const DEFAULT_HEIGHT: usize = 10;

/// Default number of patterns generated per invocation
pub const DEFAULT_PATTERN_COUNT: usize = 1;

// Every collapse step rescans the whole grid, so cost grows with area squared
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 1_000;

// Rendering placeholders
/// Glyph printed for a cell that was never decided
pub const UNDECIDED_GLYPH: char = '*';
/// Entropy map symbol for a decided cell
pub const DECIDED_ENTROPY_GLYPH: char = '.';
/// Entropy map symbol for a cell no propagation pass has reached
pub const UNCONSTRAINED_ENTROPY_GLYPH: char = '?';
/// Radix used to print entropy counts as single characters
pub const ENTROPY_RADIX: u32 = 36;

