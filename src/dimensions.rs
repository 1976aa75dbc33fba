use std::fmt;

use crate::coordinates::Coordinate;
use crate::units::NodesCount;

/// Per axis extent of the maze. A coordinate is inside the maze when every axis value lies in
/// `[0, extent)`.
#[derive(Clone, PartialEq, Eq)]
pub struct Dimensions {
    extents: Coordinate,
}

impl Dimensions {
    pub fn new(extents: &[i32]) -> Dimensions {
        Dimensions { extents: Coordinate::new(extents) }
    }

    #[inline]
    pub fn axes(&self) -> usize {
        self.extents.dimensions()
    }

    #[inline]
    pub fn extents(&self) -> &[i32] {
        self.extents.values()
    }

    #[inline]
    pub fn extent(&self, axis: usize) -> i32 {
        self.extents[axis]
    }

    /// Number of cells in the whole grid, the product of every extent.
    pub fn size(&self) -> NodesCount {
        let cells = self.extents
            .values()
            .iter()
            .fold(1i64, |product, &extent| product * extent as i64);
        NodesCount(if cells < 0 { 0 } else { cells as usize })
    }

    pub fn contains(&self, loc: &Coordinate) -> bool {
        loc.dimensions() == self.axes() &&
        loc.values()
            .iter()
            .zip(self.extents().iter())
            .all(|(&value, &extent)| value >= 0 && value < extent)
    }

    /// Bring a candidate location inside the grid.
    ///
    /// With `wrap` on, an axis value one extent below or above the grid folds back to the other
    /// side, so a step off the top of a 2d maze lands on the bottom row. Returns None if the
    /// location is still outside the grid afterwards.
    pub fn resolve(&self, mut loc: Coordinate, wrap: bool) -> Option<Coordinate> {
        for (value, &extent) in loc.values_mut().iter_mut().zip(self.extents().iter()) {
            if wrap {
                if *value < 0 {
                    *value += extent;
                }
                if *value >= extent {
                    *value -= extent;
                }
            }

            if *value < 0 || *value >= extent {
                return None;
            }
        }
        Some(loc)
    }
}

impl<'a> From<&'a [i32]> for Dimensions {
    fn from(extents: &'a [i32]) -> Dimensions {
        Dimensions::new(extents)
    }
}

impl fmt::Debug for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Dimensions{}", self.extents)
    }
}
