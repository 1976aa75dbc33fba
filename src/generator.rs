//! Maze generation over a connection template.
//!
//! A run works in three stages:
//!
//! 1. Discover every node reachable from the start location by a breadth first walk over the
//!    template's connections, recording which exits lead to new nodes (down tree) and collecting
//!    every exit that has a real neighbour.
//! 2. Carve passages. Braided mazes shuffle the exit list and open each exit whose two nodes are
//!    not yet connected, tracked with the registry's union-find. Single path mazes are carved by
//!    a randomized depth first walk instead.
//! 3. Optionally open a passage out of every dead end, then open further random walls.
//!
//! Every random decision comes from the generator's `RandomSource` in a fixed order, so equal
//! sources and seeds give equal mazes.
use std::fmt;

use log::{debug, info};
use smallvec::SmallVec;

use crate::coordinates::Coordinate;
use crate::descriptor::MazeDescriptor;
use crate::errors::*;
use error_chain::bail;
use crate::maze::Maze;
use crate::node::{self, Exit, TreeDirection};
use crate::random::{self, RandomSource};
use crate::registry::NodeRegistry;
use crate::units::{CellType, ExitIndex, NodeId, NodesCount};
use crate::utils;

type ExitList = Vec<(NodeId, ExitIndex)>;
type ExitCandidates = SmallVec<[usize; 8]>;

pub struct Generator {
    descriptor: MazeDescriptor,
    rng: Box<dyn RandomSource>,
}

impl Generator {
    /// A generator drawing from `random::default_random_source()`.
    pub fn new(descriptor: MazeDescriptor) -> Generator {
        Generator::with_random_source(descriptor, random::default_random_source())
    }

    pub fn with_random_source(descriptor: MazeDescriptor, rng: Box<dyn RandomSource>) -> Generator {
        Generator { descriptor, rng }
    }

    pub fn set_random_source(&mut self, rng: Box<dyn RandomSource>) {
        self.rng = rng;
    }

    #[inline]
    pub fn descriptor(&self) -> &MazeDescriptor {
        &self.descriptor
    }

    /// Build a new maze.
    ///
    /// A non zero `seed` restarts the random source from that seed first. A seed of 0 carries on
    /// from wherever the source currently is, so repeated calls give different mazes.
    ///
    /// Fails with `NoReverseExit` when the template has a connection without a matching
    /// connection back, and with `SinglePathExhausted` when a single path maze is asked for but
    /// the template cannot reach every cell of the grid.
    pub fn generate(&mut self, seed: u32) -> Result<Maze> {
        if seed != 0 {
            self.rng.initialise(seed);
        }

        let run = Run::new(&self.descriptor, self.rng.as_mut());
        let (registry, root, end) = run.execute()?;
        Ok(Maze::new(self.descriptor.clone(), registry, root, end))
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Generator :: descriptor: {:?}", self.descriptor)
    }
}

/// State of one generation run. Dropped, along with every node, if the run fails.
struct Run<'a> {
    descriptor: &'a MazeDescriptor,
    rng: &'a mut dyn RandomSource,
    registry: NodeRegistry,
    exits: ExitList,
}

impl<'a> Run<'a> {
    fn new(descriptor: &'a MazeDescriptor, rng: &'a mut dyn RandomSource) -> Run<'a> {
        let NodesCount(cells) = descriptor.total_cells();
        let capacity = utils::capacity_hint(cells);
        Run {
            descriptor,
            rng,
            registry: NodeRegistry::with_capacity(capacity),
            exits: Vec::with_capacity(capacity * 2),
        }
    }

    fn execute(mut self) -> Result<(NodeRegistry, NodeId, Option<Coordinate>)> {
        let root = self.build_graph();

        let end = if self.descriptor.single_path() {
            Some(self.make_single_path_maze(root)?)
        } else {
            self.make_maze()?;
            None
        };

        if self.descriptor.no_dead_ends() {
            self.remove_dead_ends(root)?;
        }
        if self.descriptor.open_plan_chance() > 0 {
            self.make_open_plan(root)?;
        }

        Ok((self.registry, root, end))
    }

    /// Create every node reachable from the start location and all of their exits.
    fn build_graph(&mut self) -> NodeId {
        let descriptor = self.descriptor;
        let template = descriptor.template();
        let dimensions = descriptor.dimensions();
        let wrap = descriptor.wrap();

        let root_type = template.first_cell_type().unwrap_or(CellType(0));
        let (root, _) = self.registry.get_or_create(root_type, descriptor.start().clone());
        info!("build graph from {} over {:?}, wrap: {}", descriptor.start(), dimensions, wrap);

        // Nodes are appended to the arena in discovery order, which doubles as the work queue.
        let mut next = root.index();
        while next < self.registry.nodes().len() {
            let current = NodeId::from_index(next);
            let cell_type = self.registry.node(current).cell_type();
            let location = self.registry.node(current).location().clone();

            for (i, con) in template.connections(cell_type).iter().enumerate() {
                let exit = match dimensions.resolve(location.offset(&con.delta), wrap) {
                    None => Exit::boundary(),
                    Some(loc) => {
                        let (neighbour, is_new) = self.registry.get_or_create(con.to, loc);
                        self.exits.push((current, ExitIndex(i)));
                        let tree = if is_new { TreeDirection::DownTree } else { TreeDirection::UpTree };
                        Exit::new(neighbour, tree)
                    }
                };
                self.registry.node_mut(current).add_exit(exit);
            }
            next += 1;
        }

        info!("build graph found {} nodes and {} exits", self.registry.len().0, self.exits.len());
        root
    }

    /// Braided maze: open randomly ordered exits between nodes that are not yet connected.
    fn make_maze(&mut self) -> Result<()> {
        info!("make maze over {} exits", self.exits.len());

        let mut exits = ::std::mem::replace(&mut self.exits, Vec::new());
        for i in (0..exits.len()).rev() {
            let r = self.rng.next_int(0, i);
            exits.swap(i, r);
        }

        for &(from, exit) in &exits {
            let to = match self.registry.node(from).exit_node(exit) {
                Some(to) => to,
                None => continue,
            };
            if self.registry.connected(from, to) {
                continue;
            }
            self.open_exit(from, exit)?;
            self.registry.union(from, to);
        }

        self.exits = exits;
        Ok(())
    }

    /// Single path maze by randomized depth first carving. Returns the location farthest from
    /// the root found along the way.
    fn make_single_path_maze(&mut self, root: NodeId) -> Result<Coordinate> {
        let NodesCount(total) = self.descriptor.total_cells();
        info!("make single path maze from {}, total cells {}",
              self.registry.node(root).location(), total);

        let mut stack: Vec<(NodeId, usize)> = Vec::new();
        let mut current = root;
        let mut distance = 0;
        let mut visited = 1;
        let mut longest = 0;
        let mut end = self.registry.node(root).location().clone();

        while visited < total {
            let candidates: ExitCandidates = {
                let nodes = self.registry.nodes();
                nodes[current.index()]
                    .exits()
                    .iter()
                    .enumerate()
                    .filter(|&(_, exit)| exit.neighbour().map_or(false, |n| nodes[n.index()].is_sealed()))
                    .map(|(i, _)| i)
                    .collect()
            };
            debug!("single path at {} with {} sealed neighbours, visited {}",
                   self.registry.node(current).location(), candidates.len(), visited);

            if !candidates.is_empty() {
                let pick = candidates[self.rng.next_int(0, candidates.len() - 1)];
                let next = self.open_exit(current, ExitIndex(pick))?;
                stack.push((current, distance));
                current = next;
                visited += 1;
                distance += 1;
            } else {
                if distance > longest {
                    end = self.registry.node(current).location().clone();
                    longest = distance;
                }
                match stack.pop() {
                    Some((previous, previous_distance)) => {
                        current = previous;
                        distance = previous_distance;
                    }
                    None => {
                        bail!(ErrorKind::SinglePathExhausted(visited, total));
                    }
                }
            }
        }

        // never backtracked
        if longest == 0 {
            end = self.registry.node(current).location().clone();
        }

        info!("single path end {}", end);
        Ok(end)
    }

    /// Open a second passage out of every node with a single open exit, where it has a wall to
    /// knock through. One pass only, nodes later in the order may still be dead ends if an
    /// earlier node's passage ran into them.
    fn remove_dead_ends(&mut self, root: NodeId) -> Result<()> {
        info!("remove dead ends");

        for id in node::down_tree_order(self.registry.nodes(), root) {
            let (open, candidates) = {
                let node = self.registry.node(id);
                let candidates: ExitCandidates = node.exits()
                                                     .iter()
                                                     .enumerate()
                                                     .filter(|&(_, exit)| exit.is_openable())
                                                     .map(|(i, _)| i)
                                                     .collect();
                (node.open_exits_count(), candidates)
            };

            if open == 1 && !candidates.is_empty() {
                let pick = candidates[self.rng.next_int(0, candidates.len() - 1)];
                let _ = self.open_exit(id, ExitIndex(pick))?;
            }
        }
        Ok(())
    }

    /// Knock through each remaining wall with `open_plan_chance` percent probability.
    fn make_open_plan(&mut self, root: NodeId) -> Result<()> {
        let chance = self.descriptor.open_plan_chance() as usize;
        info!("make open plan, chance {}%", chance);

        for id in node::down_tree_order(self.registry.nodes(), root) {
            for i in 0..self.registry.node(id).num_exits() {
                let openable = self.registry.node(id).exits()[i].is_openable();
                if openable && self.rng.next_int(0, 99) < chance {
                    let _ = self.open_exit(id, ExitIndex(i))?;
                }
            }
        }
        Ok(())
    }

    /// Open both sides of the passage behind `from`'s `exit` and return the node on the far side.
    fn open_exit(&mut self, from: NodeId, exit: ExitIndex) -> Result<NodeId> {
        let reverse = node::reverse_exit(self.registry.nodes(), self.descriptor.template(), from, exit);
        let (to, to_exit) = match reverse {
            Some(found) => found,
            None => {
                let location = self.registry.node(from).location().clone();
                bail!(ErrorKind::NoReverseExit(location, exit));
            }
        };

        self.registry.node_mut(from).set_open(exit, true);
        self.registry.node_mut(to).set_open(to_exit, true);
        debug!("open exit {} of {} to exit {} of {}",
               exit.0,
               self.registry.node(from).location(),
               to_exit.0,
               self.registry.node(to).location());
        Ok(to)
    }
}
