//! Ray entity (semi-infinite line)

use crate::entities::EntityCommon;
use crate::types::Vector3;

/// A semi-infinite line from a start point along a unit direction
#[derive(Debug, Clone, PartialEq)]
pub struct Ray {
    /// Common entity data
    pub common: EntityCommon,
    /// Start point
    pub start: Vector3,
    /// Unit direction vector
    pub unit_vector: Vector3,
}

impl Ray {
    /// Create a new ray; the direction is normalized
    pub fn new(start: Vector3, direction: Vector3) -> Self {
        Ray {
            common: EntityCommon::new(),
            start,
            unit_vector: direction.normalize(),
        }
    }
}
