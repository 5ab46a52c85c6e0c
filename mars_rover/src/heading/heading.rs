use crate::error::RoverError;
use crate::Position;

use std::fmt;
use std::str::FromStr;

/// Cardinal direction the rover is facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in clockwise order, starting from north.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Heading after a quarter turn to the right.
    pub fn clockwise(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Heading after a quarter turn to the left.
    pub fn counter_clockwise(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// Unit step taken when moving forward along this heading.
    /// North is positive y, east is positive x.
    pub fn delta(self) -> Position {
        match self {
            Heading::North => Position::new(0, 1),
            Heading::East => Position::new(1, 0),
            Heading::South => Position::new(0, -1),
            Heading::West => Position::new(-1, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Heading::North => "north",
            Heading::East => "east",
            Heading::South => "south",
            Heading::West => "west",
        }
    }
}

impl FromStr for Heading {
    type Err = RoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heading::ALL
            .iter()
            .copied()
            .find(|heading| heading.name() == s)
            .ok_or_else(|| RoverError::InvalidHeading(s.to_owned()))
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
