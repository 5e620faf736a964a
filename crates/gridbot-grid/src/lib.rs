#![warn(missing_docs)]
#![doc = "A bounded 2D grid robot."]
#![doc = ""]
#![doc = "The robot moves one cell at a time. Moves that would leave the grid are"]
#![doc = "rejected with a `GridError` carrying the position, grid size and direction."]

pub mod direction;
pub mod error;
pub mod grid;
pub mod point_types;

pub use direction::Direction;
pub use error::{GridError, OffTheField};
pub use grid::BoundedGrid;
pub use point_types::{DEFAULT_GRID_SIZE, GridBounds, Position};
