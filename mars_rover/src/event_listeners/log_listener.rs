use crate::event_listeners::event_listener::EventListener;
use crate::heading::heading::Heading;
use crate::Position;

use log::{debug, info};

/// Writes every rover event to the `log` facade.
#[derive(Debug, Default)]
pub struct LogListener {}

impl EventListener for LogListener {
    fn obstacle_avoided(&mut self, position: Position, heading: Heading) {
        info!(
            "Blocked at ({}, {}) while heading {}",
            position.x, position.y, heading
        );
    }

    fn rover_moved(&mut self, from: Position, to: Position) {
        debug!("Moved ({}, {}) -> ({}, {})", from.x, from.y, to.x, to.y);
    }

    fn rover_turned(&mut self, from: Heading, to: Heading) {
        debug!("Turned {} -> {}", from, to);
    }
}
