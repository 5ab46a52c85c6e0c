use crate::Position;

/// Abstract interface for obstacle lookups.
pub trait Map {
    /// Returns true if `position` is blocked.
    fn is_obstacle(&self, position: Position) -> bool;
}
