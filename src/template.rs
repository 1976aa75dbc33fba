//! The repeating tile a maze is built from.
//!
//! Each cell type owns an ordered list of connections. A connection says "moving by `delta`
//! from a cell of type `from` reaches a cell of type `to`". Connections carry no ids, the order
//! they are defined in is their id: the n-th connection of a type becomes exit n of every node of
//! that type.
//!
//! A plain 2d square maze has a single cell type with four connections, e.g. north `(0,-1)`,
//! south `(0,1)`, east `(1,0)` and west `(-1,0)`. A 3d maze adds two more for up and down.
//!
//! Nothing is validated. Every connection needs a partner defined on the target type with the
//! negated delta, otherwise opening that edge fails during generation.

use crate::coordinates::Coordinate;
use crate::units::{CellType, ExitIndex};
use crate::utils::{self, FnvHashMap};

#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    pub from: CellType,
    pub delta: Coordinate,
    pub to: CellType,
}

impl Connection {
    pub fn new(from: CellType, delta: Coordinate, to: CellType) -> Connection {
        Connection { from, delta, to }
    }
}

#[derive(Clone, Debug)]
pub struct ConnectionTemplate {
    first_cell_type: Option<CellType>,
    connections: FnvHashMap<CellType, Vec<Connection>>,
}

impl Default for ConnectionTemplate {
    fn default() -> ConnectionTemplate {
        ConnectionTemplate::new()
    }
}

impl ConnectionTemplate {
    pub fn new() -> ConnectionTemplate {
        ConnectionTemplate {
            first_cell_type: None,
            connections: utils::fnv_hashmap(4),
        }
    }

    /// Append a connection to the list of its `from` cell type.
    ///
    /// The first connection ever defined also decides the cell type of the maze's root node,
    /// unless `set_first_cell_type` overrides it.
    pub fn define_connection(&mut self, connection: Connection) {
        if self.first_cell_type.is_none() {
            self.first_cell_type = Some(connection.from);
        }
        self.connections
            .entry(connection.from)
            .or_insert_with(Vec::new)
            .push(connection);
    }

    /// Shorthand for `define_connection`.
    pub fn connect(&mut self, from: CellType, delta: &[i32], to: CellType) -> &mut Self {
        self.define_connection(Connection::new(from, Coordinate::new(delta), to));
        self
    }

    pub fn set_first_cell_type(&mut self, cell_type: CellType) {
        self.first_cell_type = Some(cell_type);
    }

    /// Cell type of the root node. None for an empty template.
    #[inline]
    pub fn first_cell_type(&self) -> Option<CellType> {
        self.first_cell_type
    }

    /// The connections of `cell_type` in definition order, empty for an unknown type.
    pub fn connections(&self, cell_type: CellType) -> &[Connection] {
        self.connections
            .get(&cell_type)
            .map(|cons| cons.as_slice())
            .unwrap_or(&[])
    }

    #[inline]
    pub fn num_connections(&self, cell_type: CellType) -> usize {
        self.connections(cell_type).len()
    }

    pub fn connection(&self, cell_type: CellType, exit: ExitIndex) -> Option<&Connection> {
        self.connections(cell_type).get(exit.0)
    }

    pub fn cell_types_count(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}
