//! Ellipse entity

use crate::entities::EntityCommon;
use crate::types::Vector3;

/// An elliptical arc entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: Vector3,
    /// Endpoint of the major axis, relative to the center
    pub major_axis: Vector3,
    /// Ratio of minor axis to major axis
    pub ratio: f64,
    /// Start parameter (0 for a full ellipse)
    pub start_param: f64,
    /// End parameter (2π for a full ellipse)
    pub end_param: f64,
}

impl Ellipse {
    /// Create a full ellipse from center, major axis and ratio
    pub fn new(center: Vector3, major_axis: Vector3, ratio: f64) -> Self {
        Ellipse {
            common: EntityCommon::new(),
            center,
            major_axis,
            ratio,
            start_param: 0.0,
            end_param: 2.0 * std::f64::consts::PI,
        }
    }
}
