use crate::maze::Maze;
use crate::random::RandomSource;
use crate::template::ConnectionTemplate;
use crate::units::{CellType, ExitIndex, NodeId};

/// One cell type with exits N, S, E, W in that order.
pub fn square_template() -> ConnectionTemplate {
    let mut template = ConnectionTemplate::new();
    template.connect(CellType(0), &[0, -1], CellType(0))
            .connect(CellType(0), &[0, 1], CellType(0))
            .connect(CellType(0), &[1, 0], CellType(0))
            .connect(CellType(0), &[-1, 0], CellType(0));
    template
}

/// One cell type with an exit along each direction of each of the three axes.
pub fn cube_template() -> ConnectionTemplate {
    let mut template = ConnectionTemplate::new();
    template.connect(CellType(0), &[1, 0, 0], CellType(0))
            .connect(CellType(0), &[-1, 0, 0], CellType(0))
            .connect(CellType(0), &[0, 1, 0], CellType(0))
            .connect(CellType(0), &[0, -1, 0], CellType(0))
            .connect(CellType(0), &[0, 0, 1], CellType(0))
            .connect(CellType(0), &[0, 0, -1], CellType(0));
    template
}

/// Rooms (type 0) at even x and corridors (type 1) at odd x along a single row. Rooms also link
/// vertically to other rooms. Only usable with the start x even.
pub fn rooms_and_corridors_template() -> ConnectionTemplate {
    let mut template = ConnectionTemplate::new();
    template.connect(CellType(0), &[1, 0], CellType(1))
            .connect(CellType(0), &[-1, 0], CellType(1))
            .connect(CellType(0), &[0, 1], CellType(0))
            .connect(CellType(0), &[0, -1], CellType(0))
            .connect(CellType(1), &[1, 0], CellType(0))
            .connect(CellType(1), &[-1, 0], CellType(0));
    template
}

/// Always draws the lowest value of the range.
#[derive(Debug, Default)]
pub struct LowestSource {
    pub draws: usize,
    pub seeds: Vec<u32>,
}

impl RandomSource for LowestSource {
    fn initialise(&mut self, seed: u32) {
        self.seeds.push(seed);
    }

    fn next_int(&mut self, low: usize, high: usize) -> usize {
        assert!(low <= high);
        self.draws += 1;
        low
    }
}

/// Every open exit of every node is matched by an open reverse exit.
pub fn assert_symmetric(maze: &Maze) {
    for (id, node) in maze.iter() {
        for (i, exit) in node.exits().iter().enumerate() {
            if !exit.is_open() {
                continue;
            }
            let (to, to_exit) = maze.reverse_exit(id, ExitIndex(i))
                                    .unwrap_or_else(|| panic!("no reverse for exit {} of {}", i, node.location()));
            assert!(maze.node(to).is_open(to_exit),
                    "exit {} of {} is open but its reverse is closed",
                    i,
                    node.location());
        }
    }
}

/// Nodes reachable from the root through open exits, by depth first walk.
pub fn reachable_through_open_exits(maze: &Maze) -> usize {
    let mut seen = vec![false; maze.len().0];
    let mut stack: Vec<NodeId> = vec![maze.root()];
    seen[maze.root().index()] = true;
    let mut count = 0;
    while let Some(id) = stack.pop() {
        count += 1;
        for exit in maze.node(id).exits().iter().filter(|e| e.is_open()) {
            if let Some(next) = exit.neighbour() {
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    stack.push(next);
                }
            }
        }
    }
    count
}
