//! Tile palette and connector signatures
//!
//! A palette is a fixed, ordered list of tile variants. Each variant carries a
//! display glyph and one connector code per side. Two variants fit across an
//! edge when the codes on the touching sides are equal.

use crate::io::error::{Result, invalid_parameter};
use std::collections::HashSet;
use std::fmt;

/// Connector value on one side of a tile (0 = no connector in built-in palettes)
pub type ConnectorCode = u8;

/// The four orthogonal neighbour directions, in `up, right, down, left` order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards row - 1
    Up,
    /// Towards col + 1
    Right,
    /// Towards row + 1
    Down,
    /// Towards col - 1
    Left,
}

impl Direction {
    /// All directions in side order
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Direction pointing back from the neighbour
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Row and column step for this direction
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
        }
    }

    /// Position of this direction in `Direction::ALL`
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}

/// Connector codes for the `(up, right, down, left)` sides of a tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sides {
    /// Code on the top edge
    pub up: ConnectorCode,
    /// Code on the right edge
    pub right: ConnectorCode,
    /// Code on the bottom edge
    pub down: ConnectorCode,
    /// Code on the left edge
    pub left: ConnectorCode,
}

impl Sides {
    /// Build a signature from codes in `up, right, down, left` order
    pub const fn new(
        up: ConnectorCode,
        right: ConnectorCode,
        down: ConnectorCode,
        left: ConnectorCode,
    ) -> Self {
        Self {
            up,
            right,
            down,
            left,
        }
    }

    /// Code on the given side
    pub const fn get(self, direction: Direction) -> ConnectorCode {
        match direction {
            Direction::Up => self.up,
            Direction::Right => self.right,
            Direction::Down => self.down,
            Direction::Left => self.left,
        }
    }

    /// Signature of the same piece turned a quarter turn clockwise
    #[must_use]
    pub const fn rotated_clockwise(self) -> Self {
        Self {
            up: self.left,
            right: self.up,
            down: self.right,
            left: self.down,
        }
    }
}

/// One entry of a palette: a glyph and its connector signature
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileVariant {
    /// Display symbol, unique within a palette
    pub glyph: char,
    /// Connector codes per side
    pub sides: Sides,
}

impl TileVariant {
    /// Create a variant
    pub const fn new(glyph: char, sides: Sides) -> Self {
        Self { glyph, sides }
    }

    /// Whether this variant may sit with `neighbor` on its `direction` side
    ///
    /// The code on this variant's `direction` side must equal the code on the
    /// neighbour's opposite side.
    pub const fn fits_beside(&self, direction: Direction, neighbor: &Self) -> bool {
        self.sides.get(direction) == neighbor.sides.get(direction.opposite())
    }
}

const DOUBLE_LINE: [TileVariant; 12] = [
    TileVariant::new(' ', Sides::new(0, 0, 0, 0)),
    TileVariant::new('╠', Sides::new(1, 1, 1, 0)),
    TileVariant::new('╦', Sides::new(0, 1, 1, 1)),
    TileVariant::new('╣', Sides::new(1, 0, 1, 1)),
    TileVariant::new('╩', Sides::new(1, 1, 0, 1)),
    TileVariant::new('╔', Sides::new(0, 1, 1, 0)),
    TileVariant::new('╗', Sides::new(0, 0, 1, 1)),
    TileVariant::new('╚', Sides::new(1, 1, 0, 0)),
    TileVariant::new('╝', Sides::new(1, 0, 0, 1)),
    TileVariant::new('╬', Sides::new(1, 1, 1, 1)),
    TileVariant::new('║', Sides::new(1, 0, 1, 0)),
    TileVariant::new('═', Sides::new(0, 1, 0, 1)),
];

const LIGHT_LINE: [TileVariant; 12] = [
    TileVariant::new(' ', Sides::new(0, 0, 0, 0)),
    TileVariant::new('├', Sides::new(1, 1, 1, 0)),
    TileVariant::new('┬', Sides::new(0, 1, 1, 1)),
    TileVariant::new('┤', Sides::new(1, 0, 1, 1)),
    TileVariant::new('┴', Sides::new(1, 1, 0, 1)),
    TileVariant::new('┌', Sides::new(0, 1, 1, 0)),
    TileVariant::new('┐', Sides::new(0, 0, 1, 1)),
    TileVariant::new('└', Sides::new(1, 1, 0, 0)),
    TileVariant::new('┘', Sides::new(1, 0, 0, 1)),
    TileVariant::new('┼', Sides::new(1, 1, 1, 1)),
    TileVariant::new('│', Sides::new(1, 0, 1, 0)),
    TileVariant::new('─', Sides::new(0, 1, 0, 1)),
];

/// Immutable, ordered catalog of tile variants
///
/// Variants are addressed by their index in the catalog; every cell state in
/// the grid refers back to the palette it was propagated against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    variants: Vec<TileVariant>,
}

impl Palette {
    /// Build a palette from an ordered list of variants
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the list is empty or two variants share
    /// a glyph.
    pub fn new(variants: Vec<TileVariant>) -> Result<Self> {
        if variants.is_empty() {
            return Err(invalid_parameter(
                "palette",
                &"[]",
                &"palette must contain at least one variant",
            ));
        }

        let mut seen = HashSet::with_capacity(variants.len());
        for variant in &variants {
            if !seen.insert(variant.glyph) {
                return Err(invalid_parameter(
                    "palette",
                    &variant.glyph,
                    &"glyphs must be unique within a palette",
                ));
            }
        }

        Ok(Self { variants })
    }

    /// The 12 double-line pipe pieces: blank, corners, T-junctions, cross, straights
    pub fn double_line() -> Self {
        Self {
            variants: DOUBLE_LINE.to_vec(),
        }
    }

    /// The same 12 shapes drawn with single-line box characters
    pub fn light_line() -> Self {
        Self {
            variants: LIGHT_LINE.to_vec(),
        }
    }

    /// Variants in catalog order
    pub fn variants(&self) -> &[TileVariant] {
        &self.variants
    }

    /// Variant at `index`
    pub fn get(&self, index: usize) -> Option<&TileVariant> {
        self.variants.get(index)
    }

    /// Number of variants
    pub const fn len(&self) -> usize {
        self.variants.len()
    }

    /// Always false for palettes built through the public constructors
    pub const fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Index of the variant drawn with `glyph`
    pub fn position_of(&self, glyph: char) -> Option<usize> {
        self.variants.iter().position(|variant| variant.glyph == glyph)
    }

    /// Whether every variant's quarter-turn rotation is also in the palette
    pub fn is_closed_under_rotation(&self) -> bool {
        let signatures: HashSet<Sides> = self.variants.iter().map(|v| v.sides).collect();
        signatures
            .iter()
            .all(|sides| signatures.contains(&sides.rotated_clockwise()))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::double_line()
    }
}
