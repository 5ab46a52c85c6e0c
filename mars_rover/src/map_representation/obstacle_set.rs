use crate::map_representation::map::Map;
use crate::Position;

use std::collections::HashSet;
use std::iter::FromIterator;

/// A fixed set of blocked lattice cells.
///
/// Membership is exact: a cell one unit away from an obstacle is free.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObstacleSet {
    cells: HashSet<Position>,
}

impl ObstacleSet {
    /// Creates an empty obstacle set
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a cell as blocked. Returns false if it already was.
    ///
    /// Only for building the set. Once it is behind a rover's `Arc` it can
    /// no longer be changed.
    pub fn insert(&mut self, cell: Position) -> bool {
        self.cells.insert(cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter()
    }
}

impl Map for ObstacleSet {
    fn is_obstacle(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }
}

impl FromIterator<Position> for ObstacleSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(i64, i64)> for ObstacleSet {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(x, y)| Position::new(x, y))
            .collect()
    }
}
