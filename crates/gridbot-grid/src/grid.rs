#![warn(missing_docs)]

//! The robot and its edge-checked moves.

use tracing::debug;

use crate::direction::Direction;
use crate::error::{GridError, OffTheField};
use crate::point_types::{GridBounds, Position};

/// A robot confined to a rectangular grid.
///
/// Every move is checked against the grid edges before it is applied. A
/// rejected move leaves the position untouched and reports where the robot
/// was, how large the grid is and which way it tried to go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedGrid {
    /// Current cell of the robot
    position: Position,
    /// Exclusive limits of the grid, fixed at construction
    bounds: GridBounds,
}

impl BoundedGrid {
    /// Creates a new grid with the robot placed at `start`.
    ///
    /// # Arguments
    /// * `start` - Initial position of the robot
    /// * `bounds` - Exclusive limits of the grid
    ///
    /// # Returns
    /// * `Result<Self, GridError>` - The grid, or an error if the bounds are empty
    ///   or `start` lies outside them
    pub fn new(start: Position, bounds: GridBounds) -> Result<Self, GridError> {
        if bounds.max_x == 0 || bounds.max_y == 0 {
            return Err(GridError::InvalidDimensions("Width and height must be non-zero"));
        }
        if !bounds.contains(start) {
            return Err(GridError::InvalidStart(start));
        }

        Ok(BoundedGrid {
            position: start,
            bounds,
        })
    }

    /// Creates a grid with the default 10x10 bounds and the robot at `(x, y)`.
    pub fn at(x: u8, y: u8) -> Result<Self, GridError> {
        Self::new(Position::new(x, y), GridBounds::default())
    }

    /// Current position of the robot.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Limits of the grid.
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Moves the robot one cell in `direction`.
    ///
    /// # Returns
    /// * `Result<Position, GridError>` - The new position, `OutOfBounds` if the
    ///   move would leave the grid, or `IllegalCommand` for `Direction::None`
    pub fn step(&mut self, direction: Direction) -> Result<Position, GridError> {
        match direction {
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::None => {
                debug!(position = %self.position, "Rejected move without a direction");
                Err(GridError::IllegalCommand("No direction"))
            }
        }
    }

    /// Moves the robot one cell towards larger y.
    pub fn move_up(&mut self) -> Result<Position, GridError> {
        if self.position.y + 1 >= self.bounds.max_y {
            return Err(self.off_the_field(Direction::Up));
        }
        self.position.y += 1;
        Ok(self.moved(Direction::Up))
    }

    /// Moves the robot one cell towards smaller y.
    pub fn move_down(&mut self) -> Result<Position, GridError> {
        if self.position.y == 0 {
            return Err(self.off_the_field(Direction::Down));
        }
        self.position.y -= 1;
        Ok(self.moved(Direction::Down))
    }

    /// Moves the robot one cell towards smaller x.
    pub fn move_left(&mut self) -> Result<Position, GridError> {
        if self.position.x == 0 {
            return Err(self.off_the_field(Direction::Left));
        }
        self.position.x -= 1;
        Ok(self.moved(Direction::Left))
    }

    /// Moves the robot one cell towards larger x.
    pub fn move_right(&mut self) -> Result<Position, GridError> {
        if self.position.x + 1 >= self.bounds.max_x {
            return Err(self.off_the_field(Direction::Right));
        }
        self.position.x += 1;
        Ok(self.moved(Direction::Right))
    }

    /// Parses `label` as a direction and moves the robot.
    ///
    /// Unrecognized labels fail with `IllegalCommand` and do not move the robot.
    pub fn execute(&mut self, label: &str) -> Result<Position, GridError> {
        let direction = label.parse::<Direction>()?;
        self.step(direction)
    }

    /// Applies `directions` in order, stopping at the first rejected move.
    ///
    /// Moves applied before the failure are kept; the remaining ones are dropped.
    ///
    /// # Returns
    /// * `Result<Position, GridError>` - The final position, or the first error
    pub fn follow<I>(&mut self, directions: I) -> Result<Position, GridError>
    where
        I: IntoIterator<Item = Direction>,
    {
        for direction in directions {
            self.step(direction)?;
        }
        Ok(self.position)
    }

    fn moved(&self, direction: Direction) -> Position {
        debug!(%direction, position = %self.position, "Robot moved");
        self.position
    }

    fn off_the_field(&self, direction: Direction) -> GridError {
        debug!(%direction, position = %self.position, bounds = %self.bounds, "Rejected move off the field");
        GridError::OutOfBounds(OffTheField::new(self.position, self.bounds, direction))
    }
}

impl core::fmt::Display for BoundedGrid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "BoundedGrid ({}), robot at {}", self.bounds, self.position)?;

        // Top row first so that "up" points up
        for y in (0..self.bounds.max_y).rev() {
            for x in 0..self.bounds.max_x {
                let cell = if self.position == Position::new(x, y) { 'R' } else { '.' };
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn out_of_bounds(result: Result<Position, GridError>) -> OffTheField {
        match result {
            Err(GridError::OutOfBounds(ctx)) => ctx,
            other => panic!("expected OutOfBounds, got {:?}", other),
        }
    }

    #[test]
    fn test_grid_creation() {
        let grid = BoundedGrid::at(8, 8).unwrap();
        assert_eq!(grid.position(), Position::new(8, 8));
        assert_eq!(grid.bounds(), GridBounds::new(10, 10));
    }

    #[test]
    fn test_invalid_creation() {
        assert!(matches!(
            BoundedGrid::new(Position::new(0, 0), GridBounds::new(0, 10)),
            Err(GridError::InvalidDimensions(_))
        ));
        assert!(matches!(
            BoundedGrid::new(Position::new(0, 0), GridBounds::new(10, 0)),
            Err(GridError::InvalidDimensions(_))
        ));
        assert_eq!(
            BoundedGrid::at(10, 3),
            Err(GridError::InvalidStart(Position::new(10, 3)))
        );
    }

    #[test]
    fn test_walk_off_the_top() {
        let mut grid = BoundedGrid::at(8, 8).unwrap();

        assert_eq!(grid.step(Direction::Up), Ok(Position::new(8, 9)));
        assert_eq!(grid.step(Direction::Left), Ok(Position::new(7, 9)));

        let ctx = out_of_bounds(grid.step(Direction::Up));
        assert_eq!(ctx.position(), Position::new(7, 9));
        assert_eq!(ctx.bounds(), GridBounds::new(10, 10));
        assert_eq!(ctx.direction_label(), "up");
        assert_eq!(grid.position(), Position::new(7, 9));
    }

    #[test]
    fn test_follow_stops_at_first_failure() {
        let mut grid = BoundedGrid::at(8, 8).unwrap();
        let result = grid.follow([
            Direction::Up,
            Direction::Left,
            Direction::Up,
            Direction::Up,
            Direction::None,
        ]);

        let ctx = out_of_bounds(result);
        assert_eq!(ctx.direction(), Direction::Up);
        assert_eq!(grid.position(), Position::new(7, 9));
    }

    #[test]
    fn test_follow_returns_final_position() {
        let mut grid = BoundedGrid::at(0, 0).unwrap();
        let end = grid.follow([Direction::Right, Direction::Right, Direction::Up]);
        assert_eq!(end, Ok(Position::new(2, 1)));
    }

    #[test]
    fn test_lower_edges() {
        let mut grid = BoundedGrid::at(0, 0).unwrap();
        assert_eq!(out_of_bounds(grid.move_down()).direction_label(), "down");
        assert_eq!(out_of_bounds(grid.move_left()).direction_label(), "left");
        assert_eq!(grid.position(), Position::new(0, 0));
    }

    #[test]
    fn test_upper_edges() {
        let mut grid = BoundedGrid::at(9, 9).unwrap();
        assert_eq!(out_of_bounds(grid.move_up()).position(), Position::new(9, 9));
        assert_eq!(out_of_bounds(grid.move_right()).direction_label(), "right");
        assert_eq!(grid.position(), Position::new(9, 9));
    }

    #[test]
    fn test_upper_edge_at_type_limit() {
        // Largest grid a u8 coordinate can address
        let mut grid =
            BoundedGrid::new(Position::new(254, 254), GridBounds::new(255, 255)).unwrap();
        assert!(grid.move_up().is_err());
        assert!(grid.move_right().is_err());
        assert_eq!(grid.position(), Position::new(254, 254));
    }

    #[test]
    fn test_execute_labels() {
        let mut grid = BoundedGrid::at(5, 5).unwrap();
        assert_eq!(grid.execute("down"), Ok(Position::new(5, 4)));
        assert_eq!(grid.execute("Right"), Ok(Position::new(6, 4)));
        assert_eq!(
            grid.execute("diagonal"),
            Err(GridError::IllegalCommand("Unknown direction"))
        );
        assert_eq!(grid.execute("none"), Err(GridError::IllegalCommand("No direction")));
        assert_eq!(grid.position(), Position::new(6, 4));
    }

    #[test]
    fn test_error_display() {
        let err = GridError::OutOfBounds(OffTheField::new(
            Position::new(7, 9),
            GridBounds::new(10, 10),
            Direction::Up,
        ));
        assert_eq!(err.to_string(), "Off the field: moving up from (7, 9) leaves the 10x10 grid");
        assert_eq!(
            GridError::IllegalCommand("No direction").to_string(),
            "Illegal command: No direction"
        );
    }

    #[test]
    fn test_display() {
        let grid = BoundedGrid::new(Position::new(1, 0), GridBounds::new(3, 2)).unwrap();
        let display_str = format!("{}", grid);
        assert!(display_str.contains("BoundedGrid (3x2), robot at (1, 0)"));
        assert!(display_str.ends_with(". . . \n. R . \n"));
    }

    fn any_position() -> impl Strategy<Value = Position> {
        (0u8..10, 0u8..10).prop_map(|(x, y)| Position::new(x, y))
    }

    proptest! {
        #[test]
        fn prop_step_moves_one_cell_or_nothing(start in any_position(), index in 0usize..4) {
            let direction = Direction::MOVES[index];
            let mut grid = BoundedGrid::at(start.x, start.y).unwrap();

            let at_edge = match direction {
                Direction::Up => start.y == 9,
                Direction::Down => start.y == 0,
                Direction::Left => start.x == 0,
                Direction::Right => start.x == 9,
                Direction::None => unreachable!(),
            };

            match grid.step(direction) {
                Ok(p) => {
                    prop_assert!(!at_edge);
                    let expected = match direction {
                        Direction::Up => Position::new(start.x, start.y + 1),
                        Direction::Down => Position::new(start.x, start.y - 1),
                        Direction::Left => Position::new(start.x - 1, start.y),
                        Direction::Right => Position::new(start.x + 1, start.y),
                        Direction::None => unreachable!(),
                    };
                    prop_assert_eq!(p, expected);
                    prop_assert_eq!(grid.position(), expected);
                }
                Err(GridError::OutOfBounds(ctx)) => {
                    prop_assert!(at_edge);
                    prop_assert_eq!(ctx.position(), start);
                    prop_assert_eq!(ctx.direction(), direction);
                    prop_assert_eq!(grid.position(), start);
                }
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
        }

        #[test]
        fn prop_none_is_always_illegal(start in any_position()) {
            let mut grid = BoundedGrid::at(start.x, start.y).unwrap();
            prop_assert_eq!(grid.step(Direction::None), Err(GridError::IllegalCommand("No direction")));
            prop_assert_eq!(grid.position(), start);
        }

        #[test]
        fn prop_position_stays_inside(start in any_position(), moves in proptest::collection::vec(0usize..4, 0..64)) {
            let mut grid = BoundedGrid::at(start.x, start.y).unwrap();
            for index in moves {
                let _ = grid.step(Direction::MOVES[index]);
                prop_assert!(grid.bounds().contains(grid.position()));
            }
        }
    }
}
