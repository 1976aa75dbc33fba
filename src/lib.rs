//! **tiled_mazes** generates mazes over N dimensional grids tiled with one or more cell types.
//!
//! A `ConnectionTemplate` says, for each cell type, which directions it has exits in and what
//! type of cell each exit leads to. The `Generator` discovers every cell the template can reach
//! from a start location within the maze `Dimensions`, then carves passages so that every cell
//! is connected, either with loops allowed in the walk (braided) or as one randomized depth
//! first path. Dead ends can be removed and extra walls knocked through afterwards.
//!
//! ```rust,ignore
//! let mut template = ConnectionTemplate::new();
//! template.connect(CellType(0), &[0, -1], CellType(0))
//!         .connect(CellType(0), &[0, 1], CellType(0))
//!         .connect(CellType(0), &[1, 0], CellType(0))
//!         .connect(CellType(0), &[-1, 0], CellType(0));
//! let descriptor = MazeDescriptorBuilder::new(template, Dimensions::new(&[20, 20]))
//!     .wrap(true)
//!     .build();
//! let maze = Generator::new(descriptor).generate(42)?;
//! ```

pub mod config;
pub mod coordinates;
pub mod descriptor;
pub mod dimensions;
pub mod errors;
pub mod generator;
pub mod maze;
pub mod node;
pub mod random;
pub mod registry;
pub mod template;
pub mod units;
mod utils;

#[cfg(test)]
mod test_utils;

pub use crate::config::{ConnectionConfig, MazeConfig};
pub use crate::coordinates::Coordinate;
pub use crate::descriptor::{MazeDescriptor, MazeDescriptorBuilder};
pub use crate::dimensions::Dimensions;
pub use crate::errors::{Error, ErrorKind, Result};
pub use crate::generator::Generator;
pub use crate::maze::{Maze, Passage};
pub use crate::node::{Exit, Node, TreeDirection};
pub use crate::random::{default_random_source, RandomSource, XorShiftSource};
pub use crate::template::{Connection, ConnectionTemplate};
pub use crate::units::{CellType, EdgesCount, ExitIndex, NodeId, NodesCount};
