use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Index};

use itertools::Itertools;
use smallvec::SmallVec;

/// Fixed length integer location of a cell, one value per axis of the maze.
///
/// The same type doubles as the direction delta of a connection. Mazes with up to 4 axes keep the
/// values inline.
#[derive(Clone)]
pub struct Coordinate {
    values: SmallVec<[i32; 4]>,
}

impl Coordinate {
    pub fn new(values: &[i32]) -> Coordinate {
        Coordinate { values: values.iter().cloned().collect() }
    }

    /// The origin of a maze with `dimensions` axes.
    pub fn origin(dimensions: usize) -> Coordinate {
        Coordinate { values: (0..dimensions).map(|_| 0).collect() }
    }

    #[inline]
    pub fn dimensions(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    #[inline]
    pub(crate) fn values_mut(&mut self) -> &mut [i32] {
        &mut self.values
    }

    /// Elementwise sum of the two coordinates.
    ///
    /// Both must have the same number of axes, extra axes of the longer one are dropped.
    pub fn offset(&self, delta: &Coordinate) -> Coordinate {
        Coordinate {
            values: self.values
                .iter()
                .zip(delta.values.iter())
                .map(|(v, d)| v + d)
                .collect(),
        }
    }

    pub fn negated(&self) -> Coordinate {
        Coordinate { values: self.values.iter().map(|v| -v).collect() }
    }

    /// Is `other` the exact opposite direction of `self`, axis by axis?
    pub fn is_negation_of(&self, other: &Coordinate) -> bool {
        self.values.len() == other.values.len() &&
        self.values.iter().zip(other.values.iter()).all(|(a, b)| *a == -*b)
    }
}

impl<'a> Add<&'a Coordinate> for &'a Coordinate {
    type Output = Coordinate;

    fn add(self, delta: &'a Coordinate) -> Coordinate {
        self.offset(delta)
    }
}

impl Index<usize> for Coordinate {
    type Output = i32;

    #[inline]
    fn index(&self, axis: usize) -> &i32 {
        &self.values[axis]
    }
}

impl<'a> From<&'a [i32]> for Coordinate {
    fn from(values: &'a [i32]) -> Coordinate {
        Coordinate::new(values)
    }
}

impl From<Vec<i32>> for Coordinate {
    fn from(values: Vec<i32>) -> Coordinate {
        Coordinate::new(&values)
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Coordinate) -> bool {
        self.values[..] == other.values[..]
    }
}
impl Eq for Coordinate {}

// Coordinates are the registry keys, so hashing covers every axis value (and the axis count).
impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values[..].hash(state);
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Coordinate) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Coordinate {
    fn cmp(&self, other: &Coordinate) -> Ordering {
        self.values[..].cmp(&other.values[..])
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.values.iter().join(","))
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Coordinate{}", self)
    }
}
