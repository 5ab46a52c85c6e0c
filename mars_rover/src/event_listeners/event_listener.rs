use crate::heading::heading::Heading;
use crate::Position;

/// Receives notifications about what a rover did.
///
/// Listeners only observe. Nothing they do changes the rover's state.
pub trait EventListener {
    /// Called each time a move is halted because the candidate cell is blocked
    fn obstacle_avoided(&mut self, position: Position, heading: Heading);

    /// Called each time the rover commits a move
    fn rover_moved(&mut self, _from: Position, _to: Position) {}

    /// Called each time the rover turns
    fn rover_turned(&mut self, _from: Heading, _to: Heading) {}
}
