//! Lightweight polyline entity
//!
//! Unlike the heavy POLYLINE, a LWPOLYLINE is self-contained: its point
//! records are embedded in the one tag block as repeated groups, so it never
//! participates in reassembly.

use crate::entities::EntityCommon;
use crate::types::Vector2;

/// One 2D point record of a lightweight polyline
#[derive(Debug, Clone, PartialEq)]
pub struct LwVertex {
    /// Point location
    pub point: Vector2,
    /// Bulge of the following segment (0 = straight)
    pub bulge: f64,
}

impl LwVertex {
    /// Create a straight-segment point record
    pub fn new(point: Vector2) -> Self {
        LwVertex { point, bulge: 0.0 }
    }
}

/// A lightweight polyline
#[derive(Debug, Clone, PartialEq)]
pub struct LwPolyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Point records in order
    pub points: Vec<LwVertex>,
    /// Whether the polyline is closed
    pub is_closed: bool,
}

impl LwPolyline {
    /// Create an empty open polyline
    pub fn new() -> Self {
        LwPolyline {
            common: EntityCommon::new(),
            points: Vec::new(),
            is_closed: false,
        }
    }

    /// Number of point records
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for LwPolyline {
    fn default() -> Self {
        Self::new()
    }
}
