//! Grid cells and grid limits.

use core::fmt;

/// Side length used for both axes when no bounds are given.
pub const DEFAULT_GRID_SIZE: u8 = 10;

/// Represents a cell of the grid.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    /// The x-coordinate (column index) in the grid.
    pub x: u8,
    /// The y-coordinate (row index) in the grid.
    pub y: u8,
}

impl Position {
    /// Creates a new `Position`.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Exclusive upper limits of a grid. Valid cells satisfy
/// `x < max_x` and `y < max_y`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GridBounds {
    /// Number of columns.
    pub max_x: u8,
    /// Number of rows.
    pub max_y: u8,
}

impl GridBounds {
    /// Creates new `GridBounds`.
    #[must_use]
    pub const fn new(max_x: u8, max_y: u8) -> Self {
        Self { max_x, max_y }
    }

    /// Returns `true` if `p` lies inside the grid.
    pub fn contains(&self, p: Position) -> bool {
        p.x < self.max_x && p.y < self.max_y
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE, DEFAULT_GRID_SIZE)
    }
}

impl fmt::Display for GridBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.max_x, self.max_y)
    }
}
