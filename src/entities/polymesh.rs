//! Polymesh view of a reassembled polyline.

use crate::entities::{EntityCommon, Polyline, Vertex};
use crate::error::{DxfError, Result};
use crate::types::Vector3;

/// A polyline reinterpreted as a 2D grid of vertices, row-major:
/// `index = m * ncount + n`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polymesh {
    /// Common entity data, copied from the originating polyline
    pub common: EntityCommon,
    /// Vertex count in the M direction
    pub mcount: u32,
    /// Vertex count in the N direction
    pub ncount: u32,
    /// Whether the mesh is closed in the M direction
    pub is_m_closed: bool,
    /// Whether the mesh is closed in the N direction
    pub is_n_closed: bool,
    vertices: Vec<Vertex>,
}

impl Polymesh {
    /// Build from a populated polymesh-mode polyline.
    ///
    /// The vertex run must fill the declared grid exactly; a count mismatch
    /// fails with [`DxfError::MalformedStructure`].
    pub(crate) fn from_polyline(polyline: Polyline) -> Result<Self> {
        let is_m_closed = polyline.is_m_closed();
        let is_n_closed = polyline.is_n_closed();
        let Polyline {
            common,
            mcount,
            ncount,
            vertices,
            ..
        } = polyline;

        let expected = mcount as usize * ncount as usize;
        if vertices.len() != expected {
            return Err(DxfError::MalformedStructure(format!(
                "polymesh vertex count {} does not fill a {}x{} grid",
                vertices.len(),
                mcount,
                ncount
            )));
        }

        Ok(Polymesh {
            common,
            mcount,
            ncount,
            is_m_closed,
            is_n_closed,
            vertices,
        })
    }

    /// Grid lookup. Positions outside `[0, mcount) x [0, ncount)` fail with
    /// [`DxfError::IndexOutOfRange`].
    pub fn vertex_at(&self, m: i32, n: i32) -> Result<&Vertex> {
        if m < 0 || n < 0 || m as u32 >= self.mcount || n as u32 >= self.ncount {
            return Err(DxfError::IndexOutOfRange(format!(
                "grid position ({}, {}) outside {}x{} mesh",
                m, n, self.mcount, self.ncount
            )));
        }
        Ok(&self.vertices[m as usize * self.ncount as usize + n as usize])
    }

    /// Location of the vertex at a grid position
    pub fn location_at(&self, m: i32, n: i32) -> Result<Vector3> {
        self.vertex_at(m, n).map(|vertex| vertex.location)
    }

    /// The grid's vertices in row-major order
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}
