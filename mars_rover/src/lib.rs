use std::sync::{Arc, Mutex};
pub extern crate nalgebra as na;
use log::{debug, warn};
use na::Vector2;

pub mod error;
pub mod event_listeners;
pub mod heading;
pub mod instructions;
pub mod map_representation;
pub mod scenario;

pub use crate::error::RoverError;
pub use crate::event_listeners::event_listener::EventListener;
pub use crate::event_listeners::log_listener::LogListener;
pub use crate::heading::heading::Heading;
pub use crate::instructions::instruction::Instruction;
pub use crate::map_representation::map::Map;
pub use crate::map_representation::obstacle_set::ObstacleSet;
pub use crate::scenario::scenario::Scenario;

/// Cell on the unbounded integer lattice
pub type Position = Vector2<i64>;

/// Result of a single forward or backward move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The rover now sits on this cell
    Moved(Position),
    /// This cell is an obstacle. The rover did not move.
    Blocked(Position),
    /// The next cell is past the `i64` range. The rover did not move.
    OffLattice,
}

/// A single rover roving over a lattice with statically known obstacles.
///
/// The rover assumes exclusive access. If it is shared between threads the
/// caller has to serialise calls around it.
pub struct Rover<M: Map = ObstacleSet> {
    /// Direction the rover is facing
    heading: Heading,
    /// Current cell
    position: Position,
    /// Obstacle map, shared read only
    map: Arc<M>,
    /// Observers notified on moves, turns and blocked moves
    event_listeners: Vec<Arc<Mutex<dyn EventListener>>>,
}

impl Rover<ObstacleSet> {
    /// Create a rover from a heading name (`north`, `east`, `south` or
    /// `west`), a starting cell and a list of obstacle cells.
    pub fn new<I>(heading: &str, position: (i64, i64), obstacles: I) -> Result<Self, RoverError>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let heading = heading.parse::<Heading>()?;
        let map = Arc::new(obstacles.into_iter().collect::<ObstacleSet>());
        Ok(Self::with_map(
            heading,
            Position::new(position.0, position.1),
            map,
        ))
    }

    /// Create a rover on an empty lattice
    pub fn without_obstacles(heading: &str, position: (i64, i64)) -> Result<Self, RoverError> {
        Self::new(heading, position, std::iter::empty())
    }
}

impl<M: Map> Rover<M> {
    /// Create a rover over any obstacle map
    pub fn with_map(heading: Heading, position: Position, map: Arc<M>) -> Self {
        Self {
            heading,
            position,
            map,
            event_listeners: vec![],
        }
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn map(&self) -> Arc<M> {
        self.map.clone()
    }

    pub fn add_event_listener(&mut self, listener: Arc<Mutex<dyn EventListener>>) {
        self.event_listeners.push(listener);
    }

    /// Move one cell along the current heading
    pub fn forward(&mut self) -> MoveOutcome {
        let delta = self.heading.delta();
        self.guarded_move(self.candidate(delta))
    }

    /// Move one cell against the current heading
    pub fn backward(&mut self) -> MoveOutcome {
        let delta = -self.heading.delta();
        self.guarded_move(self.candidate(delta))
    }

    pub fn turn_right(&mut self) {
        self.turn(self.heading.clockwise());
    }

    pub fn turn_left(&mut self) {
        self.turn(self.heading.counter_clockwise());
    }

    /// Execute single character instruction codes in order.
    ///
    /// Stops at the first unknown code. Instructions executed before it are
    /// not rolled back.
    pub fn receive_instructions<I>(&mut self, codes: I) -> Result<(), RoverError>
    where
        I: IntoIterator<Item = char>,
    {
        for code in codes {
            let instruction = Instruction::try_from(code)?;
            self.execute(instruction);
        }
        Ok(())
    }

    pub fn execute(&mut self, instruction: Instruction) {
        debug!("Executing '{}'", instruction.code());
        match instruction {
            Instruction::Forward => {
                self.forward();
            }
            Instruction::Backward => {
                self.backward();
            }
            Instruction::TurnRight => self.turn_right(),
            Instruction::TurnLeft => self.turn_left(),
        }
    }

    pub fn is_obstacle(&self, position: Position) -> bool {
        self.map.is_obstacle(position)
    }

    /// Report a halted move. Never changes the rover's state.
    pub fn on_obstacle_avoided(&self, position: Position) {
        warn!(
            "Obstacle detected in ({}, {}). Movement halted.",
            position.x, position.y
        );
        let heading = self.heading;
        self.notify(|listener| listener.obstacle_avoided(position, heading));
    }

    /// Cell one `delta` away, or `None` if it does not fit in `i64`
    fn candidate(&self, delta: Position) -> Option<Position> {
        let x = self.position.x.checked_add(delta.x)?;
        let y = self.position.y.checked_add(delta.y)?;
        Some(Position::new(x, y))
    }

    /// Only the destination is checked, so a rover starting on an obstacle
    /// can still drive off it.
    fn guarded_move(&mut self, candidate: Option<Position>) -> MoveOutcome {
        let candidate = match candidate {
            Some(candidate) => candidate,
            None => {
                warn!(
                    "Edge of lattice reached at ({}, {}). Movement halted.",
                    self.position.x, self.position.y
                );
                return MoveOutcome::OffLattice;
            }
        };
        if self.is_obstacle(candidate) {
            self.on_obstacle_avoided(candidate);
            return MoveOutcome::Blocked(candidate);
        }
        let from = self.position;
        self.position = candidate;
        self.notify(|listener| listener.rover_moved(from, candidate));
        MoveOutcome::Moved(candidate)
    }

    fn turn(&mut self, to: Heading) {
        let from = self.heading;
        self.heading = to;
        self.notify(|listener| listener.rover_turned(from, to));
    }

    fn notify<F>(&self, mut event: F)
    where
        F: FnMut(&mut dyn EventListener),
    {
        for listener in &self.event_listeners {
            // A poisoned listener is skipped
            if let Ok(mut listener) = listener.lock() {
                event(&mut *listener);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[derive(Default)]
    struct RecordingListener {
        blocked: Vec<Position>,
        moves: usize,
        turns: usize,
    }

    impl EventListener for RecordingListener {
        fn obstacle_avoided(&mut self, position: Position, _heading: Heading) {
            self.blocked.push(position);
        }

        fn rover_moved(&mut self, _from: Position, _to: Position) {
            self.moves += 1;
        }

        fn rover_turned(&mut self, _from: Heading, _to: Heading) {
            self.turns += 1;
        }
    }

    /// Map that blocks every cell
    struct Walled {}

    impl Map for Walled {
        fn is_obstacle(&self, _position: Position) -> bool {
            true
        }
    }

    #[test]
    fn test_forward_then_backward_returns_home() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let start = (rng.gen_range(-1000..1000), rng.gen_range(-1000..1000));
            for heading in Heading::ALL {
                let mut rover = Rover::without_obstacles(heading.name(), start).unwrap();
                rover.forward();
                rover.backward();
                assert_eq!(rover.position(), Position::new(start.0, start.1));
                assert_eq!(rover.heading(), heading);
            }
        }
    }

    #[test]
    fn test_move_deltas() {
        let expected = [
            ("north", (0, 1), (0, -1)),
            ("east", (1, 0), (-1, 0)),
            ("south", (0, -1), (0, 1)),
            ("west", (-1, 0), (1, 0)),
        ];
        for (heading, front, back) in expected {
            let mut rover = Rover::without_obstacles(heading, (0, 0)).unwrap();
            assert_eq!(rover.forward(), MoveOutcome::Moved(Position::new(front.0, front.1)));

            let mut rover = Rover::without_obstacles(heading, (0, 0)).unwrap();
            assert_eq!(rover.backward(), MoveOutcome::Moved(Position::new(back.0, back.1)));
        }
    }

    #[test]
    fn test_turns_never_check_obstacles() {
        let mut rover = Rover::with_map(Heading::North, Position::zeros(), Arc::new(Walled {}));
        rover.turn_right();
        assert_eq!(rover.heading(), Heading::East);
        rover.turn_left();
        rover.turn_left();
        assert_eq!(rover.heading(), Heading::West);
        assert_eq!(rover.position(), Position::zeros());
    }

    #[test]
    fn test_blocked_move_keeps_state() {
        let mut rover = Rover::with_map(Heading::South, Position::new(3, 3), Arc::new(Walled {}));
        assert_eq!(rover.forward(), MoveOutcome::Blocked(Position::new(3, 2)));
        assert_eq!(rover.backward(), MoveOutcome::Blocked(Position::new(3, 4)));
        assert_eq!(rover.position(), Position::new(3, 3));
        assert_eq!(rover.heading(), Heading::South);
    }

    #[test]
    fn test_listeners_see_every_event() {
        let listener = Arc::new(Mutex::new(RecordingListener::default()));
        let mut rover = Rover::new("north", (0, 0), vec![(1, 1)]).unwrap();
        rover.add_event_listener(listener.clone());

        rover.receive_instructions("frfl".chars()).unwrap();

        let listener = listener.lock().unwrap();
        assert_eq!(listener.blocked, vec![Position::new(1, 1)]);
        assert_eq!(listener.moves, 1);
        assert_eq!(listener.turns, 2);
    }

    #[test]
    fn test_invalid_instruction_keeps_prior_effects() {
        let mut rover = Rover::without_obstacles("north", (0, 0)).unwrap();
        let res = rover.receive_instructions(vec!['f', 'r', 'x', 'f']);
        assert_eq!(res, Err(RoverError::InvalidInstruction('x')));
        assert_eq!(rover.position(), Position::new(0, 1));
        assert_eq!(rover.heading(), Heading::East);
    }

    #[test]
    fn test_moves_past_i64_range_are_halted() {
        let mut rover = Rover::without_obstacles("north", (0, i64::MAX)).unwrap();
        assert_eq!(rover.forward(), MoveOutcome::OffLattice);
        assert_eq!(rover.position(), Position::new(0, i64::MAX));
        assert_eq!(rover.backward(), MoveOutcome::Moved(Position::new(0, i64::MAX - 1)));

        let mut rover = Rover::without_obstacles("south", (0, i64::MAX)).unwrap();
        assert_eq!(rover.backward(), MoveOutcome::OffLattice);
        assert_eq!(rover.position(), Position::new(0, i64::MAX));

        let mut rover = Rover::without_obstacles("east", (i64::MIN, 0)).unwrap();
        assert_eq!(rover.backward(), MoveOutcome::OffLattice);
        assert_eq!(rover.position(), Position::new(i64::MIN, 0));
        assert_eq!(rover.forward(), MoveOutcome::Moved(Position::new(i64::MIN + 1, 0)));

        let mut rover = Rover::without_obstacles("west", (i64::MIN, 0)).unwrap();
        assert_eq!(rover.forward(), MoveOutcome::OffLattice);
        assert_eq!(rover.heading(), Heading::West);
        assert_eq!(rover.position(), Position::new(i64::MIN, 0));
    }

    #[test]
    fn test_halted_edge_move_does_not_report_obstacle() {
        let listener = Arc::new(Mutex::new(RecordingListener::default()));
        let mut rover = Rover::without_obstacles("north", (0, i64::MAX)).unwrap();
        rover.add_event_listener(listener.clone());

        rover.receive_instructions("fff".chars()).unwrap();

        let listener = listener.lock().unwrap();
        assert!(listener.blocked.is_empty());
        assert_eq!(listener.moves, 0);
    }

    #[test]
    fn test_map_is_shared() {
        let map = Arc::new(ObstacleSet::from_iter(vec![(4i64, 4i64)]));
        let first = Rover::with_map(Heading::North, Position::zeros(), map.clone());
        let second = Rover::with_map(Heading::East, Position::new(1, 1), map.clone());
        assert!(first.is_obstacle(Position::new(4, 4)));
        assert!(second.is_obstacle(Position::new(4, 4)));
        assert!(Arc::ptr_eq(&first.map(), &second.map()));
    }
}
