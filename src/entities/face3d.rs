//! Face3D entity (3D face)

use bitflags::bitflags;

use crate::entities::EntityCommon;
use crate::types::Vector3;

bitflags! {
    /// Invisible edge flags for Face3D (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InvisibleEdgeFlags: u8 {
        const FIRST = 1;
        const SECOND = 2;
        const THIRD = 4;
        const FOURTH = 8;
    }
}

/// A planar face with up to four corners and per-edge visibility
#[derive(Debug, Clone, PartialEq)]
pub struct Face3D {
    /// Common entity data
    pub common: EntityCommon,
    /// Corner points, in record order
    pub corners: [Vector3; 4],
    /// Which edges are invisible
    pub invisible_edges: InvisibleEdgeFlags,
}

impl Face3D {
    /// Create a new face from four corners with all edges visible
    pub fn new(corners: [Vector3; 4]) -> Self {
        Face3D {
            common: EntityCommon::new(),
            corners,
            invisible_edges: InvisibleEdgeFlags::empty(),
        }
    }
}
