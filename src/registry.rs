//! Canonical node storage for one generation run.
//!
//! Nodes live in an arena and are addressed by `NodeId` everywhere. The registry interns nodes by
//! coordinate so that no location is ever represented twice, and layers a union-find structure over
//! the arena which the loop carving pass uses to tell whether two nodes are already connected.

use crate::coordinates::Coordinate;
use crate::node::Node;
use crate::units::{CellType, NodeId, NodesCount};
use crate::utils::{self, FnvHashMap};

#[derive(Debug)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
    index: FnvHashMap<Coordinate, NodeId>,
    // union-find representative link per node, None marks the end of a chain
    chains: Vec<Option<NodeId>>,
}

impl NodeRegistry {
    pub fn with_capacity(capacity: usize) -> NodeRegistry {
        NodeRegistry {
            nodes: Vec::with_capacity(capacity),
            index: utils::fnv_hashmap(capacity),
            chains: Vec::with_capacity(capacity),
        }
    }

    /// The node at `loc`, created with `cell_type` if the location has not been seen before.
    ///
    /// Returns the handle and whether the node is new. An existing node keeps the cell type it
    /// was created with.
    pub fn get_or_create(&mut self, cell_type: CellType, loc: Coordinate) -> (NodeId, bool) {
        if let Some(&existing) = self.index.get(&loc) {
            return (existing, false);
        }

        let id = NodeId::from_index(self.nodes.len());
        self.index.insert(loc.clone(), id);
        self.nodes.push(Node::new(cell_type, loc));
        self.chains.push(None);
        (id, true)
    }

    #[inline]
    pub fn lookup(&self, loc: &Coordinate) -> Option<NodeId> {
        self.index.get(loc).cloned()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn len(&self) -> NodesCount {
        NodesCount(self.nodes.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Representative of the set `id` belongs to.
    ///
    /// Every node visited on the way is relinked straight to the representative.
    pub fn find(&mut self, id: NodeId) -> NodeId {
        let mut end = id;
        while let Some(next) = self.chains[end.index()] {
            end = next;
        }

        let mut current = id;
        while current != end {
            let next = self.chains[current.index()].unwrap_or(end);
            self.chains[current.index()] = Some(end);
            current = next;
        }

        end
    }

    /// Merge the sets of `a` and `b`, the representative of `a` is linked to that of `b`.
    pub fn union(&mut self, a: NodeId, b: NodeId) {
        let a_end = self.find(a);
        let b_end = self.find(b);
        if a_end != b_end {
            self.chains[a_end.index()] = Some(b_end);
        }
    }

    pub fn connected(&mut self, a: NodeId, b: NodeId) -> bool {
        self.find(a) == self.find(b)
    }

    /// Hand over the arena and the location index, dropping the union-find links.
    pub fn into_parts(self) -> (Vec<Node>, FnvHashMap<Coordinate, NodeId>) {
        (self.nodes, self.index)
    }
}
