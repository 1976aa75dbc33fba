//! Serializable maze settings.
//!
//! A `MazeConfig` is the plain data form of a `MazeDescriptor` plus a seed, so that maze setups
//! can be kept in JSON files next to whatever consumes the generated mazes:
//!
//! ```json
//! {
//!     "dimensions": [10, 10],
//!     "wrap": true,
//!     "open_plan_chance": 5,
//!     "connections": [
//!         { "from": 0, "delta": [0, -1], "to": 0 },
//!         { "from": 0, "delta": [0, 1], "to": 0 },
//!         { "from": 0, "delta": [1, 0], "to": 0 },
//!         { "from": 0, "delta": [-1, 0], "to": 0 }
//!     ]
//! }
//! ```
//!
//! Unlike the descriptor the config is checked before use, as it usually comes from outside the
//! program.
use std::fs;
use std::path::Path;

use serde_derive::{Deserialize, Serialize};

use crate::coordinates::Coordinate;
use crate::descriptor::{MazeDescriptor, MazeDescriptorBuilder};
use crate::dimensions::Dimensions;
use crate::errors::*;
use error_chain::bail;
use crate::generator::Generator;
use crate::maze::Maze;
use crate::template::{Connection, ConnectionTemplate};
use crate::units::CellType;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConnectionConfig {
    pub from: u32,
    pub delta: Vec<i32>,
    pub to: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MazeConfig {
    pub dimensions: Vec<i32>,
    pub connections: Vec<ConnectionConfig>,
    #[serde(default)]
    pub start: Option<Vec<i32>>,
    #[serde(default)]
    pub first_cell_type: Option<u32>,
    #[serde(default)]
    pub wrap: bool,
    #[serde(default)]
    pub single_path: bool,
    #[serde(default)]
    pub no_dead_ends: bool,
    #[serde(default)]
    pub open_plan_chance: u8,
    /// 0 keeps the generator's random source as it is.
    #[serde(default)]
    pub seed: u32,
}

impl MazeConfig {
    pub fn from_json(json: &str) -> Result<MazeConfig> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<MazeConfig> {
        let content = fs::read_to_string(path)?;
        MazeConfig::from_json(&content)
    }

    /// The connection template, connections defined in the listed order.
    pub fn template(&self) -> ConnectionTemplate {
        let mut template = ConnectionTemplate::new();
        for con in &self.connections {
            template.define_connection(Connection::new(CellType(con.from),
                                                       Coordinate::new(&con.delta),
                                                       CellType(con.to)));
        }
        if let Some(first) = self.first_cell_type {
            template.set_first_cell_type(CellType(first));
        }
        template
    }

    pub fn descriptor(&self) -> Result<MazeDescriptor> {
        self.validate()?;

        let mut builder = MazeDescriptorBuilder::new(self.template(), Dimensions::new(&self.dimensions))
            .wrap(self.wrap)
            .single_path(self.single_path)
            .no_dead_ends(self.no_dead_ends)
            .open_plan_chance(self.open_plan_chance);
        if let Some(ref start) = self.start {
            builder = builder.start(Coordinate::new(start));
        }
        Ok(builder.build())
    }

    /// Generate a maze with the default random source and the configured seed.
    pub fn generate(&self) -> Result<Maze> {
        let mut generator = Generator::new(self.descriptor()?);
        generator.generate(self.seed)
    }

    fn validate(&self) -> Result<()> {
        let axes = self.dimensions.len();
        if axes == 0 {
            bail!(ErrorKind::InvalidConfig("no dimensions given".to_string()));
        }
        if self.dimensions.iter().any(|&extent| extent <= 0) {
            bail!(ErrorKind::InvalidConfig(format!("extents must be positive, got {:?}", self.dimensions)));
        }
        if self.connections.is_empty() {
            bail!(ErrorKind::InvalidConfig("no connections given".to_string()));
        }
        if let Some(bad) = self.connections.iter().find(|con| con.delta.len() != axes) {
            bail!(ErrorKind::InvalidConfig(format!("connection delta {:?} does not have {} axes",
                                                   bad.delta, axes)));
        }
        if let Some(ref start) = self.start {
            if start.len() != axes {
                bail!(ErrorKind::InvalidConfig(format!("start {:?} does not have {} axes", start, axes)));
            }
        }
        if self.open_plan_chance > 100 {
            bail!(ErrorKind::InvalidConfig(format!("open plan chance {} is above 100",
                                                   self.open_plan_chance)));
        }
        Ok(())
    }
}
