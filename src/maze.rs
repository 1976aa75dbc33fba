use std::fmt;

use petgraph::{Graph, Undirected};
use petgraph::graph::NodeIndex;

use crate::coordinates::Coordinate;
use crate::descriptor::MazeDescriptor;
use crate::node::{self, Node};
use crate::registry::NodeRegistry;
use crate::units::{EdgesCount, ExitIndex, NodeId, NodesCount};
use crate::utils::FnvHashMap;

/// A generated maze: every node the template reached from the start location, their exits and
/// which of those exits are open.
///
/// The maze owns all of its nodes, dropping it releases the whole graph.
pub struct Maze {
    descriptor: MazeDescriptor,
    nodes: Vec<Node>,
    index: FnvHashMap<Coordinate, NodeId>,
    root: NodeId,
    end: Option<Coordinate>,
}

impl Maze {
    pub(crate) fn new(descriptor: MazeDescriptor,
                      registry: NodeRegistry,
                      root: NodeId,
                      end: Option<Coordinate>)
                      -> Maze {
        let (nodes, index) = registry.into_parts();
        Maze {
            descriptor,
            nodes,
            index,
            root,
            end,
        }
    }

    /// The parameters the maze was generated from.
    #[inline]
    pub fn descriptor(&self) -> &MazeDescriptor {
        &self.descriptor
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn root_node(&self) -> &Node {
        self.node(self.root)
    }

    /// Farthest point from the root found while carving a single path maze, None for braided mazes.
    #[inline]
    pub fn end_coordinate(&self) -> Option<&Coordinate> {
        self.end.as_ref()
    }

    /// Panics if `id` does not belong to this maze.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn len(&self) -> NodesCount {
        NodesCount(self.nodes.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node at a location, if the template reached it.
    pub fn find_node(&self, loc: &Coordinate) -> Option<NodeId> {
        self.index.get(loc).cloned()
    }

    /// The node behind an exit.
    pub fn neighbour(&self, id: NodeId, exit: ExitIndex) -> Option<NodeId> {
        self.node(id).exit_node(exit)
    }

    /// Every node, root first, in breadth first order over the down tree exits.
    pub fn node_list(&self) -> Vec<NodeId> {
        node::down_tree_order(&self.nodes, self.root)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.node_list().into_iter().map(move |id| (id, self.node(id)))
    }

    /// The exit on the other side of the passage behind `exit`.
    pub fn reverse_exit(&self, id: NodeId, exit: ExitIndex) -> Option<(NodeId, ExitIndex)> {
        node::reverse_exit(&self.nodes, self.descriptor.template(), id, exit)
    }

    /// Every open passage, each reported once from one of its two sides.
    pub fn passages(&self) -> PassagesIter {
        PassagesIter {
            maze: self,
            node: 0,
            exit: 0,
        }
    }

    /// Number of open passages. Each passage is open on both of its sides.
    pub fn passages_count(&self) -> EdgesCount {
        let open_exits: usize = self.nodes.iter().map(|n| n.open_exits_count()).sum();
        EdgesCount(open_exits / 2)
    }

    /// Nodes with exactly one open exit.
    pub fn dead_ends(&self) -> Vec<NodeId> {
        self.node_list()
            .into_iter()
            .filter(|&id| self.node(id).open_exits_count() == 1)
            .collect()
    }

    /// The open passages as an undirected `petgraph` graph weighted by node location.
    ///
    /// Graph node indices line up with `NodeId` indices, handy for running petgraph's path
    /// finding or rendering code over the maze.
    pub fn passage_graph(&self) -> Graph<Coordinate, (), Undirected> {
        let EdgesCount(edges) = self.passages_count();
        let mut graph = Graph::with_capacity(self.nodes.len(), edges);
        for node in &self.nodes {
            let _ = graph.add_node(node.location().clone());
        }
        for passage in self.passages() {
            let _ = graph.add_edge(NodeIndex::new(passage.from.index()),
                                   NodeIndex::new(passage.to.index()),
                                   ());
        }
        graph
    }

    /// Textual form of a node with its neighbours' locations, for debugging.
    pub fn display_node(&self, id: NodeId) -> NodeDisplay {
        NodeDisplay { maze: self, id }
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Maze :: nodes: {:?}, passages: {:?}, root: {:?}, end: {:?}",
               self.nodes.len(), self.passages_count().0, self.root, self.end)
    }
}

/// Both sides of an open passage.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Passage {
    pub from: NodeId,
    pub from_exit: ExitIndex,
    pub to: NodeId,
    pub to_exit: ExitIndex,
}

pub struct PassagesIter<'a> {
    maze: &'a Maze,
    node: usize,
    exit: usize,
}

impl<'a> Iterator for PassagesIter<'a> {
    type Item = Passage;

    fn next(&mut self) -> Option<Passage> {
        while self.node < self.maze.nodes.len() {
            let from = NodeId::from_index(self.node);
            let node = &self.maze.nodes[self.node];

            while self.exit < node.num_exits() {
                let from_exit = ExitIndex(self.exit);
                self.exit += 1;

                if !node.is_open(from_exit) {
                    continue;
                }
                if let Some((to, to_exit)) = self.maze.reverse_exit(from, from_exit) {
                    // report the passage from the lower side only
                    if (from, from_exit) < (to, to_exit) {
                        return Some(Passage { from, from_exit, to, to_exit });
                    }
                }
            }

            self.node += 1;
            self.exit = 0;
        }
        None
    }
}

impl<'a> fmt::Debug for PassagesIter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PassagesIter :: node: {:?}, exit: {:?}", self.node, self.exit)
    }
}

pub struct NodeDisplay<'a> {
    maze: &'a Maze,
    id: NodeId,
}

impl<'a> fmt::Display for NodeDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let node = self.maze.node(self.id);
        write!(f, "NODE: {} EXITS {}", node.location(), node.num_exits())?;
        for (i, exit) in node.exits().iter().enumerate() {
            if let Some(neighbour) = exit.neighbour() {
                let exit_index = ExitIndex(i);
                write!(f,
                       "\n   exit: {} {} {} TO: {}",
                       i,
                       if node.is_up_tree(exit_index) { "UP" } else { "DN" },
                       if exit.is_open() { "OPEN" } else { "CLSD" },
                       self.maze.node(neighbour).location())?;
            }
        }
        Ok(())
    }
}
