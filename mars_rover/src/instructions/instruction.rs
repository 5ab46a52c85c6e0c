use crate::error::RoverError;

/// A single primitive command, encoded on the wire as one character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `f`
    Forward,
    /// `b`
    Backward,
    /// `r`
    TurnRight,
    /// `l`
    TurnLeft,
}

impl Instruction {
    /// Character code of this instruction.
    pub fn code(self) -> char {
        match self {
            Instruction::Forward => 'f',
            Instruction::Backward => 'b',
            Instruction::TurnRight => 'r',
            Instruction::TurnLeft => 'l',
        }
    }

    /// Parses a whole instruction string up front. Nothing is executed, so a
    /// bad code anywhere rejects the entire sequence.
    pub fn parse_sequence(codes: &str) -> Result<Vec<Instruction>, RoverError> {
        codes.chars().map(Instruction::try_from).collect()
    }
}

impl TryFrom<char> for Instruction {
    type Error = RoverError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code {
            'f' => Ok(Instruction::Forward),
            'b' => Ok(Instruction::Backward),
            'r' => Ok(Instruction::TurnRight),
            'l' => Ok(Instruction::TurnLeft),
            other => Err(RoverError::InvalidInstruction(other)),
        }
    }
}
