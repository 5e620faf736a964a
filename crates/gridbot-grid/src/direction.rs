//! Movement commands and their textual labels.

use core::fmt;
use core::str::FromStr;

use crate::error::GridError;

/// A movement command for the robot.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// No movement. Stepping with it is an illegal command.
    #[default]
    None,
    /// Towards larger y.
    Up,
    /// Towards smaller y.
    Down,
    /// Towards smaller x.
    Left,
    /// Towards larger x.
    Right,
}

impl Direction {
    /// All directions that actually move the robot.
    pub const MOVES: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Lowercase label used in diagnostics and configuration.
    pub const fn label(self) -> &'static str {
        match self {
            Direction::None => "none",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Direction {
    type Err = GridError;

    /// Parses a label case-insensitively. Unrecognized labels are illegal commands.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        [
            Direction::None,
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
        .into_iter()
        .find(|d| d.label().eq_ignore_ascii_case(s))
        .ok_or(GridError::IllegalCommand("Unknown direction"))
    }
}
