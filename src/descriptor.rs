use crate::coordinates::Coordinate;
use crate::dimensions::Dimensions;
use crate::template::ConnectionTemplate;
use crate::units::NodesCount;

/// Everything the generator needs to know to build a maze. Read only during generation.
#[derive(Clone, Debug)]
pub struct MazeDescriptor {
    template: ConnectionTemplate,
    dimensions: Dimensions,
    start: Coordinate,
    wrap: bool,
    single_path: bool,
    no_dead_ends: bool,
    open_plan_chance: u8,
}

impl MazeDescriptor {
    /// A braided maze without any of the optional passes.
    pub fn new(template: ConnectionTemplate, dimensions: Dimensions, start: Coordinate) -> MazeDescriptor {
        MazeDescriptorBuilder::new(template, dimensions).start(start).build()
    }

    #[inline]
    pub fn template(&self) -> &ConnectionTemplate {
        &self.template
    }

    #[inline]
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    #[inline]
    pub fn start(&self) -> &Coordinate {
        &self.start
    }

    /// Exits leading off one side of the maze come back in on the opposite side.
    #[inline]
    pub fn wrap(&self) -> bool {
        self.wrap
    }

    /// Exactly one route between any two cells, before dead end removal and open plan.
    #[inline]
    pub fn single_path(&self) -> bool {
        self.single_path
    }

    /// Give every dead end a second way out.
    #[inline]
    pub fn no_dead_ends(&self) -> bool {
        self.no_dead_ends
    }

    /// Percent chance, 0 to 100, that each remaining closed exit is opened at the end.
    #[inline]
    pub fn open_plan_chance(&self) -> u8 {
        self.open_plan_chance
    }

    #[inline]
    pub fn total_cells(&self) -> NodesCount {
        self.dimensions.size()
    }
}

pub struct MazeDescriptorBuilder {
    template: ConnectionTemplate,
    dimensions: Dimensions,
    start: Option<Coordinate>,
    wrap: bool,
    single_path: bool,
    no_dead_ends: bool,
    open_plan_chance: u8,
}

impl MazeDescriptorBuilder {
    pub fn new(template: ConnectionTemplate, dimensions: Dimensions) -> MazeDescriptorBuilder {
        MazeDescriptorBuilder {
            template,
            dimensions,
            start: None,
            wrap: false,
            single_path: false,
            no_dead_ends: false,
            open_plan_chance: 0,
        }
    }

    /// Location of the root node, the origin if not given.
    pub fn start(mut self, start: Coordinate) -> MazeDescriptorBuilder {
        self.start = Some(start);
        self
    }

    pub fn wrap(mut self, wrap: bool) -> MazeDescriptorBuilder {
        self.wrap = wrap;
        self
    }

    pub fn single_path(mut self, single_path: bool) -> MazeDescriptorBuilder {
        self.single_path = single_path;
        self
    }

    pub fn no_dead_ends(mut self, no_dead_ends: bool) -> MazeDescriptorBuilder {
        self.no_dead_ends = no_dead_ends;
        self
    }

    /// Chances above 100 are treated as 100.
    pub fn open_plan_chance(mut self, percent: u8) -> MazeDescriptorBuilder {
        self.open_plan_chance = if percent > 100 { 100 } else { percent };
        self
    }

    pub fn build(self) -> MazeDescriptor {
        let axes = self.dimensions.axes();
        MazeDescriptor {
            template: self.template,
            dimensions: self.dimensions,
            start: self.start.unwrap_or_else(|| Coordinate::origin(axes)),
            wrap: self.wrap,
            single_path: self.single_path,
            no_dead_ends: self.no_dead_ends,
            open_plan_chance: self.open_plan_chance,
        }
    }
}
