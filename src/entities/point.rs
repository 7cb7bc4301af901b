//! Point entity

use crate::entities::EntityCommon;
use crate::types::Vector3;

/// A single location marker
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Common entity data
    pub common: EntityCommon,
    /// Location of the point
    pub location: Vector3,
}

impl Point {
    /// Create a new point at a location
    pub fn new(location: Vector3) -> Self {
        Point {
            common: EntityCommon::new(),
            location,
        }
    }
}
