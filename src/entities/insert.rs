//! Insert entity (block reference)

use crate::entities::{Attrib, EntityCommon};
use crate::types::Vector3;

/// A reference to a block definition, optionally carrying attribute values.
///
/// `attribs` starts empty; when `attribs_follow` is set on the wire, the
/// following ATTRIB run is collected into it by the reassembly pass, which
/// then clears the flag (the satellites no longer follow in the graph).
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Common entity data
    pub common: EntityCommon,
    /// Name of the referenced block
    pub block_name: String,
    /// Insertion point
    pub insert_point: Vector3,
    /// Rotation angle in degrees
    pub rotation: f64,
    /// Whether an attribute run follows this record on the wire
    pub attribs_follow: bool,
    /// Attribute values, populated by reassembly
    pub attribs: Vec<Attrib>,
}

impl Insert {
    /// Create a new insert without attributes
    pub fn new(block_name: impl Into<String>, insert_point: Vector3) -> Self {
        Insert {
            common: EntityCommon::new(),
            block_name: block_name.into(),
            insert_point,
            rotation: 0.0,
            attribs_follow: false,
            attribs: Vec::new(),
        }
    }
}
