//! Polyface mesh view of a reassembled polyline.

use crate::entities::{EntityCommon, Polyline, Vertex};
use crate::error::{DxfError, Result};

/// A polyline reinterpreted as independent planar faces over shared vertices.
///
/// The vertex sequence is stored once; each face group is a list of
/// zero-based indexes into it. Face groups come from the face-definition
/// vertices of the originating run, in record order. Vertices that define no
/// face stay in the sequence as index targets only.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyface {
    /// Common entity data, copied from the originating polyline
    pub common: EntityCommon,
    vertices: Vec<Vertex>,
    faces: Vec<Vec<usize>>,
}

impl Polyface {
    /// Build from a populated polyface-mode polyline.
    ///
    /// Walks each face-definition vertex's index list, stopping at the first
    /// zero entry. Index signs carry edge visibility, not position, and are
    /// stripped before resolving; a reference outside the vertex sequence
    /// fails with [`DxfError::IndexOutOfRange`].
    pub(crate) fn from_polyline(polyline: Polyline) -> Result<Self> {
        let Polyline {
            common, vertices, ..
        } = polyline;

        let mut faces = Vec::new();
        for vertex in &vertices {
            if !vertex.defines_face() {
                continue;
            }
            let mut members = Vec::new();
            for &index in &vertex.face_indices {
                if index == 0 {
                    break;
                }
                let slot = index.unsigned_abs() as usize - 1;
                if slot >= vertices.len() {
                    return Err(DxfError::IndexOutOfRange(format!(
                        "face vertex index {} exceeds vertex count {}",
                        index,
                        vertices.len()
                    )));
                }
                members.push(slot);
            }
            faces.push(members);
        }

        Ok(Polyface {
            common,
            vertices,
            faces,
        })
    }

    /// Number of face groups
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// The vertices of one face group, in index order
    pub fn face(&self, index: usize) -> Option<Vec<&Vertex>> {
        self.faces
            .get(index)
            .map(|members| members.iter().map(|&slot| &self.vertices[slot]).collect())
    }

    /// Iterate over all face groups
    pub fn faces(&self) -> impl Iterator<Item = Vec<&Vertex>> + '_ {
        (0..self.faces.len()).filter_map(move |index| self.face(index))
    }

    /// The shared vertex sequence, including non-face-defining index targets
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}
