//! This module defines the error types used by the `gridbot-grid` crate.

#![warn(missing_docs)]

use crate::direction::Direction;
use crate::point_types::{GridBounds, Position};

/// Context captured when a move would take the robot off the grid.
///
/// The fields are stored raw and only rendered when the error is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffTheField {
    position: Position,
    bounds: GridBounds,
    direction: Direction,
}

impl OffTheField {
    /// Creates the context for a rejected move.
    ///
    /// # Arguments
    /// * `position` - The position held when the move was rejected
    /// * `bounds` - The bounds of the grid
    /// * `direction` - The direction of the rejected move
    pub const fn new(position: Position, bounds: GridBounds, direction: Direction) -> Self {
        Self {
            position,
            bounds,
            direction,
        }
    }

    /// The position held when the move was rejected.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The bounds of the grid the move was checked against.
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// The direction of the rejected move.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Lowercase label of the rejected direction, e.g. `"up"`.
    pub fn direction_label(&self) -> &'static str {
        self.direction.label()
    }
}

impl core::fmt::Display for OffTheField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "moving {} from {} leaves the {} grid",
            self.direction, self.position, self.bounds
        )
    }
}

/// Error type for grid operations.
///
/// This enum encapsulates all possible errors that can occur while building
/// a grid or moving the robot across it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Error for a move that would leave the grid.
    /// The robot's position is left unchanged.
    OutOfBounds(OffTheField),
    /// Error for a command that is not a move, such as `Direction::None`
    /// or an unrecognized label.
    IllegalCommand(&'static str),
    /// Error for invalid grid dimensions.
    /// This variant is returned when the grid width or height is zero.
    InvalidDimensions(&'static str),
    /// Error for a start position that does not lie inside the grid.
    InvalidStart(Position),
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::OutOfBounds(ctx) => write!(f, "Off the field: {}", ctx),
            GridError::IllegalCommand(reason) => write!(f, "Illegal command: {}", reason),
            GridError::InvalidDimensions(msg) => write!(f, "Invalid grid dimensions: {}", msg),
            GridError::InvalidStart(p) => write!(f, "Start position {} is outside the grid", p),
        }
    }
}

impl core::error::Error for GridError {}
