use std::fmt;

use crate::coordinates::Coordinate;
use crate::template::ConnectionTemplate;
use crate::units::{CellType, ExitIndex, NodeId};

/// Where an exit's neighbour sits relative to the spanning tree found while building the graph.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum TreeDirection {
    /// The neighbour was first discovered through this exit, it is a child of this node.
    DownTree,
    /// The neighbour already existed when the exit was added, or there is no neighbour.
    UpTree,
}

/// One side of a possible passage between two nodes.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Exit {
    neighbour: Option<NodeId>,
    open: bool,
    tree: TreeDirection,
}

impl Exit {
    pub fn new(neighbour: NodeId, tree: TreeDirection) -> Exit {
        Exit {
            neighbour: Some(neighbour),
            open: false,
            tree,
        }
    }

    /// An exit leading off the edge of the maze. It has no neighbour and stays closed forever,
    /// it only exists so that exit indices line up with the template's connections.
    pub fn boundary() -> Exit {
        Exit {
            neighbour: None,
            open: false,
            tree: TreeDirection::UpTree,
        }
    }

    #[inline]
    pub fn neighbour(&self) -> Option<NodeId> {
        self.neighbour
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn tree_direction(&self) -> TreeDirection {
        self.tree
    }

    /// Closed but with a real node on the other side, i.e. a wall that could be knocked through.
    #[inline]
    pub fn is_openable(&self) -> bool {
        !self.open && self.neighbour.is_some()
    }
}

/// A cell of the maze: its type, location and one exit per connection of its type.
#[derive(Clone, Debug)]
pub struct Node {
    cell_type: CellType,
    location: Coordinate,
    exits: Vec<Exit>,
}

impl Node {
    pub fn new(cell_type: CellType, location: Coordinate) -> Node {
        Node {
            cell_type,
            location,
            exits: Vec::new(),
        }
    }

    #[inline]
    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    #[inline]
    pub fn location(&self) -> &Coordinate {
        &self.location
    }

    #[inline]
    pub fn num_exits(&self) -> usize {
        self.exits.len()
    }

    #[inline]
    pub fn exits(&self) -> &[Exit] {
        &self.exits
    }

    #[inline]
    pub fn exit(&self, exit: ExitIndex) -> Option<&Exit> {
        self.exits.get(exit.0)
    }

    /// Out of range exits are reported as closed.
    pub fn is_open(&self, exit: ExitIndex) -> bool {
        self.exit(exit).map_or(false, |e| e.open)
    }

    pub fn is_closed(&self, exit: ExitIndex) -> bool {
        !self.is_open(exit)
    }

    pub fn is_up_tree(&self, exit: ExitIndex) -> bool {
        self.exit(exit).map_or(false, |e| e.tree == TreeDirection::UpTree)
    }

    pub fn is_down_tree(&self, exit: ExitIndex) -> bool {
        self.exit(exit).map_or(false, |e| e.tree == TreeDirection::DownTree)
    }

    /// The node an exit leads to, None for boundary exits and out of range indices.
    pub fn exit_node(&self, exit: ExitIndex) -> Option<NodeId> {
        self.exit(exit).and_then(|e| e.neighbour)
    }

    pub fn open_exits_count(&self) -> usize {
        self.exits.iter().filter(|e| e.open).count()
    }

    /// No exit has been opened yet.
    pub fn is_sealed(&self) -> bool {
        self.exits.iter().all(|e| !e.open)
    }

    /// Children of this node in the discovery tree.
    pub fn down_tree_nodes<'a>(&'a self) -> impl Iterator<Item = NodeId> + 'a {
        self.exits
            .iter()
            .filter(|e| e.tree == TreeDirection::DownTree)
            .filter_map(|e| e.neighbour)
    }

    pub(crate) fn add_exit(&mut self, exit: Exit) {
        self.exits.push(exit);
    }

    pub(crate) fn set_open(&mut self, exit: ExitIndex, open: bool) {
        if let Some(e) = self.exits.get_mut(exit.0) {
            e.open = open;
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NODE: {} EXITS {}", self.location, self.exits.len())?;
        for (i, exit) in self.exits.iter().enumerate() {
            if let Some(neighbour) = exit.neighbour {
                write!(f,
                       "\n   exit: {} {} {} TO: #{}",
                       i,
                       if exit.tree == TreeDirection::UpTree { "UP" } else { "DN" },
                       if exit.open { "OPEN" } else { "CLSD" },
                       neighbour.0)?;
            }
        }
        Ok(())
    }
}

/// Every node reachable from `root` through down tree exits, breadth first.
///
/// The down tree exits form a tree, so each node shows up exactly once. Iterative on purpose, big
/// mazes are far deeper than the call stack.
pub fn down_tree_order(nodes: &[Node], root: NodeId) -> Vec<NodeId> {
    let mut order = Vec::with_capacity(nodes.len());
    if root.index() >= nodes.len() {
        return order;
    }

    order.push(root);
    let mut next = 0;
    while next < order.len() {
        let node = &nodes[order[next].index()];
        order.extend(node.down_tree_nodes());
        next += 1;
    }
    order
}

/// The exit on the far side of the passage behind `from`'s `exit`.
///
/// The neighbour may have several exits leading back to `from` (tiny wrapped mazes), so the match
/// also requires the connection delta to be the exact negation of the outgoing one.
/// None for boundary exits, or when the template has no matching reverse connection.
pub fn reverse_exit(nodes: &[Node],
                    template: &ConnectionTemplate,
                    from: NodeId,
                    exit: ExitIndex)
                    -> Option<(NodeId, ExitIndex)> {
    let from_node = &nodes[from.index()];
    let to = from_node.exit_node(exit)?;
    let from_delta = &template.connection(from_node.cell_type(), exit)?.delta;

    let to_node = &nodes[to.index()];
    let to_connections = template.connections(to_node.cell_type());
    to_node.exits()
        .iter()
        .zip(to_connections.iter())
        .position(|(back, con)| back.neighbour() == Some(from) && con.delta.is_negation_of(from_delta))
        .map(|i| (to, ExitIndex(i)))
}

#[cfg(test)]
mod tests {

    use super::*;

    fn corridor() -> Node {
        let mut node = Node::new(CellType(1), Coordinate::new(&[0, 0]));
        node.add_exit(Exit::boundary());
        node.add_exit(Exit::new(NodeId(4), TreeDirection::DownTree));
        node.add_exit(Exit::new(NodeId(2), TreeDirection::UpTree));
        node
    }

    #[test]
    fn exits_are_positional() {
        let node = corridor();
        assert_eq!(node.num_exits(), 3);
        assert_eq!(node.exit_node(ExitIndex(0)), None);
        assert_eq!(node.exit_node(ExitIndex(1)), Some(NodeId(4)));
        assert_eq!(node.exit_node(ExitIndex(2)), Some(NodeId(2)));
        assert_eq!(node.exit_node(ExitIndex(3)), None);
    }

    #[test]
    fn tree_directions() {
        let node = corridor();
        assert!(node.is_up_tree(ExitIndex(0)));
        assert!(node.is_down_tree(ExitIndex(1)));
        assert!(node.is_up_tree(ExitIndex(2)));
        assert!(!node.is_down_tree(ExitIndex(7)));
        assert_eq!(node.down_tree_nodes().collect::<Vec<_>>(), vec![NodeId(4)]);
    }

    #[test]
    fn opening_and_closing() {
        let mut node = corridor();
        assert!(node.is_sealed());
        assert!(node.exit(ExitIndex(1)).unwrap().is_openable());
        assert!(!node.exit(ExitIndex(0)).unwrap().is_openable());

        node.set_open(ExitIndex(1), true);
        assert!(node.is_open(ExitIndex(1)));
        assert!(!node.is_sealed());
        assert_eq!(node.open_exits_count(), 1);
        assert!(!node.exit(ExitIndex(1)).unwrap().is_openable());

        node.set_open(ExitIndex(1), false);
        assert!(node.is_closed(ExitIndex(1)));

        // out of range is a no-op and reads as closed
        node.set_open(ExitIndex(9), true);
        assert!(node.is_closed(ExitIndex(9)));
        assert!(node.is_sealed());
    }

    #[test]
    fn down_tree_order_is_breadth_first() {
        // 0 -> {1, 2}, 1 -> {3}, 2 has an up tree exit back to 0
        let loc = |x| Coordinate::new(&[x]);
        let mut nodes = (0..4).map(|x| Node::new(CellType(0), loc(x))).collect::<Vec<_>>();
        nodes[0].add_exit(Exit::new(NodeId(1), TreeDirection::DownTree));
        nodes[0].add_exit(Exit::boundary());
        nodes[0].add_exit(Exit::new(NodeId(2), TreeDirection::DownTree));
        nodes[1].add_exit(Exit::new(NodeId(3), TreeDirection::DownTree));
        nodes[2].add_exit(Exit::new(NodeId(0), TreeDirection::UpTree));

        assert_eq!(down_tree_order(&nodes, NodeId(0)),
                   vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3)]);
        assert_eq!(down_tree_order(&nodes, NodeId(1)), vec![NodeId(1), NodeId(3)]);
        assert!(down_tree_order(&[], NodeId(0)).is_empty());
    }

    #[test]
    fn reverse_exit_matches_negated_delta() {
        let mut template = ConnectionTemplate::new();
        let t = CellType(0);
        // east, west on a 1d line
        template.connect(t, &[1], t).connect(t, &[-1], t);

        // two cell ring with wrap: both exits of each node lead to the other node
        let mut nodes = vec![Node::new(t, Coordinate::new(&[0])), Node::new(t, Coordinate::new(&[1]))];
        nodes[0].add_exit(Exit::new(NodeId(1), TreeDirection::DownTree));
        nodes[0].add_exit(Exit::new(NodeId(1), TreeDirection::UpTree));
        nodes[1].add_exit(Exit::new(NodeId(0), TreeDirection::UpTree));
        nodes[1].add_exit(Exit::new(NodeId(0), TreeDirection::UpTree));

        assert_eq!(reverse_exit(&nodes, &template, NodeId(0), ExitIndex(0)),
                   Some((NodeId(1), ExitIndex(1))));
        assert_eq!(reverse_exit(&nodes, &template, NodeId(0), ExitIndex(1)),
                   Some((NodeId(1), ExitIndex(0))));
    }

    #[test]
    fn reverse_exit_missing_from_template() {
        let mut template = ConnectionTemplate::new();
        let t = CellType(0);
        // one way connection only
        template.connect(t, &[1], t);

        let mut nodes = vec![Node::new(t, Coordinate::new(&[0])), Node::new(t, Coordinate::new(&[1]))];
        nodes[0].add_exit(Exit::new(NodeId(1), TreeDirection::DownTree));
        nodes[1].add_exit(Exit::boundary());

        assert_eq!(reverse_exit(&nodes, &template, NodeId(0), ExitIndex(0)), None);
        assert_eq!(reverse_exit(&nodes, &template, NodeId(1), ExitIndex(0)), None);
    }

    #[test]
    fn display_lists_real_exits_only() {
        let mut node = corridor();
        node.set_open(ExitIndex(2), true);
        let text = format!("{}", node);
        assert_eq!(text,
                   "NODE: (0,0) EXITS 3\n   exit: 1 DN CLSD TO: #4\n   exit: 2 UP OPEN TO: #2");
    }
}
