//! Attrib entity (block attribute instance)
//!
//! An ATTRIB record is a satellite: it only has meaning as a child of the
//! preceding INSERT and is merged into it during reassembly.

use crate::entities::EntityCommon;
use crate::types::Vector3;

/// A text attribute value attached to a block insertion
#[derive(Debug, Clone, PartialEq)]
pub struct Attrib {
    /// Common entity data
    pub common: EntityCommon,
    /// Insertion point
    pub insert: Vector3,
    /// Text height
    pub height: f64,
    /// Attribute value
    pub text: String,
    /// Attribute tag name
    pub tag: String,
    /// Rotation angle in degrees
    pub rotation: f64,
}

impl Attrib {
    /// Create a new attribute
    pub fn new(tag: impl Into<String>, text: impl Into<String>, insert: Vector3, height: f64) -> Self {
        Attrib {
            common: EntityCommon::new(),
            insert,
            height,
            text: text.into(),
            tag: tag.into(),
            rotation: 0.0,
        }
    }
}
