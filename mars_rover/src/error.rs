//! Error types for rover construction and instruction handling.

use thiserror::Error;

/// Errors that can occur when building or commanding a rover.
///
/// Blocked moves are not errors. A move into an obstacle leaves the rover
/// where it is and is reported through the event listeners instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoverError {
    /// Heading name is not one of `north`, `east`, `south` or `west`.
    #[error("invalid heading: {0}")]
    InvalidHeading(String),

    /// Instruction code is not one of `f`, `b`, `r` or `l`.
    #[error("invalid instruction: {0}")]
    InvalidInstruction(char),

    /// Scenario document is malformed or missing a required key.
    #[error("invalid scenario: {0}")]
    Config(String),
}
