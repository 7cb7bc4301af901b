//! Line entity

use crate::entities::EntityCommon;
use crate::types::Vector3;

/// A straight segment between two points
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Common entity data
    pub common: EntityCommon,
    /// Start point
    pub start: Vector3,
    /// End point
    pub end: Vector3,
}

impl Line {
    /// Create a new line between two points
    pub fn new(start: Vector3, end: Vector3) -> Self {
        Line {
            common: EntityCommon::new(),
            start,
            end,
        }
    }

    /// Length of the segment
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }
}
