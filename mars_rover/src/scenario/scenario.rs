use yaml_rust::{Yaml, YamlLoader};

use crate::error::RoverError;
use crate::heading::heading::Heading;
use crate::instructions::instruction::Instruction;
use crate::map_representation::obstacle_set::ObstacleSet;
use crate::{Position, Rover};

use std::sync::Arc;

/// A rover session described in YAML.
///
/// ```yaml
/// rover:
///   heading: north
///   position: [0, 0]
/// obstacles:
///   - [0, 1]
/// instructions: "frff"
/// ```
///
/// `obstacles` and `instructions` may be left out.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub heading: Heading,
    pub position: Position,
    pub obstacles: ObstacleSet,
    pub instructions: Vec<Instruction>,
}

fn parse_cell(value: &Yaml, key: &str) -> Result<Position, RoverError> {
    let pair = value
        .as_vec()
        .ok_or_else(|| RoverError::Config(format!("{} must be a [x, y] pair", key)))?;
    match pair.as_slice() {
        [x, y] => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => Ok(Position::new(x, y)),
            _ => Err(RoverError::Config(format!("{} must hold integers", key))),
        },
        _ => Err(RoverError::Config(format!(
            "{} must have exactly two entries, got {}",
            key,
            pair.len()
        ))),
    }
}

impl Scenario {
    pub fn from_yaml(yaml_str: &str) -> Result<Self, RoverError> {
        let docs =
            YamlLoader::load_from_str(yaml_str).map_err(|e| RoverError::Config(e.to_string()))?;
        let doc = docs
            .first()
            .ok_or_else(|| RoverError::Config("empty document".to_owned()))?;

        let rover = &doc["rover"];
        if rover.is_badvalue() {
            return Err(RoverError::Config("missing key: rover".to_owned()));
        }

        let heading = rover["heading"]
            .as_str()
            .ok_or_else(|| RoverError::Config("missing key: rover.heading".to_owned()))?
            .parse::<Heading>()?;

        if rover["position"].is_badvalue() {
            return Err(RoverError::Config("missing key: rover.position".to_owned()));
        }
        let position = parse_cell(&rover["position"], "rover.position")?;

        let obstacles = match &doc["obstacles"] {
            Yaml::BadValue | Yaml::Null => ObstacleSet::new(),
            Yaml::Array(cells) => cells
                .iter()
                .map(|cell| parse_cell(cell, "obstacles"))
                .collect::<Result<ObstacleSet, RoverError>>()?,
            _ => return Err(RoverError::Config("obstacles must be a list".to_owned())),
        };

        let instructions = match &doc["instructions"] {
            Yaml::BadValue | Yaml::Null => vec![],
            Yaml::String(codes) => Instruction::parse_sequence(codes)?,
            _ => return Err(RoverError::Config("instructions must be a string".to_owned())),
        };

        Ok(Self {
            heading,
            position,
            obstacles,
            instructions,
        })
    }

    /// Build the rover described by this scenario without running anything
    pub fn into_rover(self) -> Rover<ObstacleSet> {
        Rover::with_map(self.heading, self.position, Arc::new(self.obstacles))
    }

    /// Execute every instruction and hand back the rover in its final state
    pub fn run(self) -> Rover<ObstacleSet> {
        let Scenario {
            heading,
            position,
            obstacles,
            instructions,
        } = self;
        let mut rover = Rover::with_map(heading, position, Arc::new(obstacles));
        for instruction in instructions {
            rover.execute(instruction);
        }
        rover
    }
}
