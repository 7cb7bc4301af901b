//! Heavy polyline entities and their vertex satellites.
//!
//! A POLYLINE record is only a header: its vertices arrive as a following
//! run of VERTEX records closed by SEQEND, and the true shape of the entity
//! (plain polyline, polyface mesh, polygon mesh) is derived from the header
//! flags. The reassembly pass in [`crate::assembly`] fills `vertices` and
//! performs the polyface/polymesh cast.

use bitflags::bitflags;

use crate::entities::EntityCommon;
use crate::types::Vector3;

bitflags! {
    /// Polyline header flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PolylineFlags: u16 {
        const CLOSED = 1;
        const CURVE_FIT = 2;
        const SPLINE_FIT = 4;
        const POLYLINE_3D = 8;
        const POLYGON_MESH = 16;
        const CLOSED_N = 32;
        const POLYFACE_MESH = 64;
        const LINETYPE_CONTINUOUS = 128;
    }
}

bitflags! {
    /// Vertex flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct VertexFlags: u16 {
        const EXTRA_VERTEX = 1;
        const CURVE_FIT_TANGENT = 2;
        const SPLINE_VERTEX = 8;
        const SPLINE_CONTROL = 16;
        const POLYLINE_3D = 32;
        const POLYGON_MESH = 64;
        const POLYFACE_FACE = 128;
    }
}

/// How a polyline run must be reassembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolylineMode {
    /// An ordinary open or closed polyline
    Plain,
    /// A mesh of independent faces over shared vertices
    Polyface,
    /// A 2D grid of vertices addressed by (m, n)
    Polymesh,
}

impl PolylineMode {
    /// Derived once from the header flags at decode time.
    pub fn from_flags(flags: PolylineFlags) -> Self {
        if flags.contains(PolylineFlags::POLYFACE_MESH) {
            PolylineMode::Polyface
        } else if flags.contains(PolylineFlags::POLYGON_MESH) {
            PolylineMode::Polymesh
        } else {
            PolylineMode::Plain
        }
    }
}

/// A vertex satellite record.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Common entity data
    pub common: EntityCommon,
    /// Location of the vertex
    pub location: Vector3,
    /// Vertex flags
    pub flags: VertexFlags,
    /// Bulge (0 = straight segment)
    pub bulge: f64,
    /// Curve-fit tangent direction, when the record carried one
    pub tangent: Option<f64>,
    /// Signed 1-based references into the owning polyline's vertex list
    /// (group codes 71-74). A negative sign marks the leading edge as
    /// invisible; 0 terminates the list early.
    pub face_indices: Vec<i32>,
}

impl Vertex {
    /// Create a plain vertex at a location
    pub fn new(location: Vector3) -> Self {
        Vertex {
            common: EntityCommon::new(),
            location,
            flags: VertexFlags::empty(),
            bulge: 0.0,
            tangent: None,
            face_indices: Vec::new(),
        }
    }

    /// True for a face-definition vertex of a polyface mesh: the polyface
    /// bit is set and the polygon-mesh bit is clear.
    pub fn defines_face(&self) -> bool {
        self.flags.contains(VertexFlags::POLYFACE_FACE)
            && !self.flags.contains(VertexFlags::POLYGON_MESH)
    }
}

/// A heavy polyline: the header record plus, after reassembly, its vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Header flags
    pub flags: PolylineFlags,
    /// Reassembly mode, derived from the flags at decode time
    pub mode: PolylineMode,
    /// Vertex count in the M direction (mesh modes)
    pub mcount: u32,
    /// Vertex count in the N direction (mesh modes)
    pub ncount: u32,
    /// Elevation
    pub elevation: f64,
    /// Vertices, populated by reassembly
    pub vertices: Vec<Vertex>,
}

impl Polyline {
    /// Create an empty plain polyline
    pub fn new() -> Self {
        Polyline {
            common: EntityCommon::new(),
            flags: PolylineFlags::empty(),
            mode: PolylineMode::Plain,
            mcount: 0,
            ncount: 0,
            elevation: 0.0,
            vertices: Vec::new(),
        }
    }

    /// Whether the polyline is closed in the M direction
    pub fn is_m_closed(&self) -> bool {
        self.flags.contains(PolylineFlags::CLOSED)
    }

    /// Whether the polyline is closed in the N direction
    pub fn is_n_closed(&self) -> bool {
        self.flags.contains(PolylineFlags::CLOSED_N)
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex locations in order
    pub fn points(&self) -> impl Iterator<Item = Vector3> + '_ {
        self.vertices.iter().map(|v| v.location)
    }
}

impl Default for Polyline {
    fn default() -> Self {
        Self::new()
    }
}
